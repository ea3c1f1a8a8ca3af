use anchor_lang::prelude::*;
use crate::error::*;
use crate::state::{AssetRoot, ClaimStatus, Gate};
use crate::utils::ClaimAuthority;

/**
 * Prize distributor state account
 *
 * Holds the access gate and claim policy for a cumulative prize ledger.
 * Allocation roots live in one AssetRoot per asset class and payouts come
 * from the native vault or a per-mint token vault, both controlled by PDAs.
 *
 * Derivation: ["prize_distributor", creator]
 *
 * Lifecycle:
 * 1. Created during initialize_distributor with the creator as owner
 * 2. Gate and relayer updated by the owner
 */
#[account]
#[derive(Default, Debug)]
pub struct PrizeDistributor {
    /// Bump seed for PDA derivation
    /// - Needed to sign token vault transfers
    pub bump: u8,

    /// Account that created the distributor
    /// - Part of the PDA seeds, so it never changes with ownership
    pub creator: Pubkey,

    /// Owner and pause switch
    pub gate: Gate,

    /// Optional relayer allowed to trigger payouts to the rightful account
    pub relayer: Option<Pubkey>,
}

impl PrizeDistributor {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<PrizeDistributor>();

    /// Validates a claim without touching any state
    ///
    /// Returns the amount that `claim_status.record` will pay out. Checks run
    /// in order: pause, caller authorization, root presence, proof.
    pub fn authorize_claim(
        &self,
        asset_root: &AssetRoot,
        claim_status: &ClaimStatus,
        caller: &Pubkey,
        account: &Pubkey,
        total_allocated: u64,
        proof: &[[u8; 32]],
    ) -> Result<u64> {
        self.gate.ensure_active()?;

        require!(
            self.may_claim_for(caller, account),
            ClubRewardsError::InvalidAccount
        );

        asset_root.verify_allocation(account, total_allocated, proof)?;

        Ok(claim_status.pending(total_allocated))
    }

    /// Funding the native vault is open to anyone while the distributor is active
    pub fn authorize_deposit(&self, amount: u64) -> Result<()> {
        self.gate.ensure_active()?;
        require!(amount > 0, ClubRewardsError::InvalidAmount);
        Ok(())
    }
}

impl ClaimAuthority for PrizeDistributor {
    fn may_claim_for(&self, caller: &Pubkey, account: &Pubkey) -> bool {
        caller == account || self.relayer.as_ref() == Some(caller)
    }
}
