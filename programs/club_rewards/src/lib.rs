use anchor_lang::prelude::*;

declare_id!("AxHTxETyaHPWUgJwPoFpnrcMLyhJEWsBhZnvpSP5NoWN");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Club Rewards Program
 *
 * Two merkle-gated ledgers behind a shared owner/pause gate:
 *
 * Prize Distributor:
 * - One allocation root per asset (native lamports or any SPL / Token 2022 mint)
 * - Leaves commit cumulative totals, so an updated table pays only the difference
 * - Re-claiming an already settled total succeeds and pays zero
 * - Claims are submitted by the recipient or by an owner-designated relayer
 *
 * Academy:
 * - Season clock with an age window for minting cohorts
 * - Division membership proven against a (club_id, division_tier) root
 * - Each generation id is redeemable once per (club, division)
 * - Exact per-division fee, forwarded to the payment receiver
 *
 * Architecture:
 * - Distributor PDA: gate, relayer, signs token vault transfers
 * - Asset Root PDAs: current root per asset
 * - Claim Status PDAs: cumulative claimed amount per (asset, account)
 * - Native Vault PDA / Token Vault PDAs: hold prizes
 * - Academy PDA: gate, season, division root, fees, signs player mints
 * - Cohort PDAs: redemption bitmap per (club, division)
 * - Club PDAs: club id to club NFT mint
 *
 * Merkle Tree Structure:
 * - Intermediate nodes: hash(left_child + right_child) with lexicographic ordering
 * - Odd nodes are paired with themselves
 * - Roots and proofs can be produced off-chain with utils::merkle::MerkleTree
 */
#[program]
pub mod club_rewards {
    use super::*;

    /**
     * Creates a prize distributor owned by the signer
     *
     * @param relayer - Optional account allowed to claim on behalf of recipients
     *
     * Access Control: Any signer
     */
    pub fn initialize_distributor(ctx: Context<InitializeDistributor>, relayer: Option<Pubkey>) -> Result<()> {
        handle_initialize_distributor(ctx, relayer)
    }

    /**
     * Sets the allocation root for native prizes
     *
     * @param merkle_root - 32-byte root over hash(asset_key + account + total_allocated) leaves
     *
     * Access Control: Owner only
     * Note: Claim progress is kept when the root is replaced
     */
    pub fn set_native_root(ctx: Context<SetNativeRoot>, merkle_root: [u8; 32]) -> Result<()> {
        handle_set_native_root(ctx, merkle_root)
    }

    /**
     * Sets the allocation root for one token mint, creating its vault if needed
     *
     * Access Control: Owner only
     */
    pub fn set_token_root(ctx: Context<SetTokenRoot>, merkle_root: [u8; 32]) -> Result<()> {
        handle_set_token_root(ctx, merkle_root)
    }

    /**
     * Funds the native vault
     *
     * Access Control: Anyone
     */
    pub fn deposit_native(ctx: Context<DepositNative>, amount: u64) -> Result<()> {
        handle_deposit_native(ctx, amount)
    }

    /**
     * Claims native prizes with merkle proof verification
     *
     * @param total_allocated - Cumulative amount the recipient is owed
     * @param proof - Array of 32-byte hashes forming the merkle proof
     *
     * Access Control: Recipient or relayer with a valid merkle proof
     * Returns: Amount paid by this call, zero when already settled
     */
    pub fn claim_native(ctx: Context<ClaimNative>, total_allocated: u64, proof: Vec<[u8; 32]>) -> Result<u64> {
        handle_claim_native(ctx, total_allocated, proof)
    }

    /**
     * Claims token prizes with merkle proof verification
     *
     * Access Control: Recipient or relayer with a valid merkle proof
     */
    pub fn claim_token(ctx: Context<ClaimToken>, total_allocated: u64, proof: Vec<[u8; 32]>) -> Result<u64> {
        handle_claim_token(ctx, total_allocated, proof)
    }

    /**
     * Sets or clears the claim relayer
     *
     * Access Control: Owner only
     */
    pub fn set_relayer(ctx: Context<DistributorAdmin>, relayer: Option<Pubkey>) -> Result<()> {
        handle_set_relayer(ctx, relayer)
    }

    pub fn pause_distributor(ctx: Context<DistributorGate>) -> Result<()> {
        handle_pause_distributor(ctx)
    }

    pub fn activate_distributor(ctx: Context<DistributorGate>) -> Result<()> {
        handle_activate_distributor(ctx)
    }

    pub fn transfer_distributor_ownership(ctx: Context<DistributorGate>, new_owner: Pubkey) -> Result<()> {
        handle_transfer_distributor_ownership(ctx, new_owner)
    }

    /**
     * Creates an academy owned by the signer, along with its player mint
     *
     * @param max_generation_id - Highest generation id accepted initially
     * @param division_fees - Fee per player for division tiers 1..=8
     * @param payment_receiver - Account receiving minting fees
     *
     * Access Control: Any signer
     */
    pub fn initialize_academy(
        ctx: Context<InitializeAcademy>,
        max_generation_id: u32,
        division_fees: Vec<u64>,
        payment_receiver: Pubkey,
    ) -> Result<()> {
        handle_initialize_academy(ctx, max_generation_id, division_fees, payment_receiver)
    }

    /**
     * Sets the root over (club_id, division_tier) leaves
     *
     * Access Control: Owner only
     */
    pub fn set_division_root(ctx: Context<AcademyAdmin>, merkle_root: [u8; 32]) -> Result<()> {
        handle_set_division_root(ctx, merkle_root)
    }

    /**
     * Replaces the division fee table
     *
     * Access Control: Owner only
     */
    pub fn set_division_fees(ctx: Context<AcademyAdmin>, fees: Vec<u64>) -> Result<()> {
        handle_set_division_fees(ctx, fees)
    }

    pub fn set_max_generation_id(ctx: Context<AcademyAdmin>, max_generation_id: u32) -> Result<()> {
        handle_set_max_generation_id(ctx, max_generation_id)
    }

    /**
     * Moves the season clock forward
     *
     * Access Control: Owner only
     */
    pub fn advance_season(ctx: Context<AcademyAdmin>, season: u32) -> Result<()> {
        handle_advance_season(ctx, season)
    }

    pub fn set_payment_receiver(ctx: Context<AcademyAdmin>, payment_receiver: Pubkey) -> Result<()> {
        handle_set_payment_receiver(ctx, payment_receiver)
    }

    /**
     * Binds a club id to its NFT mint
     *
     * Access Control: Owner only
     */
    pub fn register_club(ctx: Context<RegisterClub>, club_id: u64) -> Result<()> {
        handle_register_club(ctx, club_id)
    }

    /**
     * Mints a batch of academy players for a club
     *
     * @param requested_season - Season the cohort belongs to
     * @param club_id - Club redeeming the slots
     * @param division_tier - Division the club played in
     * @param generation_ids - Generation slots to redeem
     * @param division_proof - Merkle proof of the club's division
     * @param paid_amount - Lamports paid, must match the division fee exactly
     *
     * Access Control: Club owner
     * Returns: Number of players minted
     */
    pub fn mint_players(
        ctx: Context<MintPlayers>,
        requested_season: u32,
        club_id: u64,
        division_tier: u8,
        generation_ids: Vec<u32>,
        division_proof: Vec<[u8; 32]>,
        paid_amount: u64,
    ) -> Result<u32> {
        handle_mint_players(
            ctx,
            requested_season,
            club_id,
            division_tier,
            generation_ids,
            division_proof,
            paid_amount,
        )
    }

    pub fn pause_academy(ctx: Context<AcademyGate>) -> Result<()> {
        handle_pause_academy(ctx)
    }

    pub fn activate_academy(ctx: Context<AcademyGate>) -> Result<()> {
        handle_activate_academy(ctx)
    }

    pub fn transfer_academy_ownership(ctx: Context<AcademyGate>, new_owner: Pubkey) -> Result<()> {
        handle_transfer_academy_ownership(ctx, new_owner)
    }
}
