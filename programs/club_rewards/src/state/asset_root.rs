use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use crate::error::*;
use crate::utils::{verify, EMPTY_ROOT};

/// Asset a prize table is denominated in
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetClass {
    /// Lamports held in the native vault
    Native,
    /// SPL Token or Token 2022 mint
    Token(Pubkey),
}

impl Default for AssetClass {
    fn default() -> Self {
        AssetClass::Native
    }
}

impl AssetClass {
    /// Key used in PDA seeds, leaves and events (all zeros for native)
    pub fn asset_key(&self) -> Pubkey {
        match self {
            AssetClass::Native => Pubkey::default(),
            AssetClass::Token(mint) => *mint,
        }
    }
}

/// Leaf committed for one account's cumulative allocation
/// - hash(asset_key + account + total_allocated)
pub fn allocation_leaf(asset: &AssetClass, account: &Pubkey, total_allocated: u64) -> [u8; 32] {
    hashv(&[
        asset.asset_key().as_ref(),
        account.as_ref(),
        &total_allocated.to_le_bytes(),
    ])
    .to_bytes()
}

/**
 * Current allocation root for one asset class
 *
 * Derivation: ["asset_root", distributor_key, asset_key]
 *
 * Lifecycle:
 * 1. Created the first time the owner sets a root for the asset
 * 2. Replaced wholesale on every later root update
 *
 * Claim progress is stored separately in ClaimStatus, so replacing the
 * root never resets what an account has already been paid.
 */
#[account]
#[derive(Default, Debug)]
pub struct AssetRoot {
    /// Distributor this root belongs to
    pub distributor: Pubkey,

    /// Asset the allocation table is denominated in
    pub asset: AssetClass,

    /// Merkle root over allocation_leaf entries
    pub merkle_root: [u8; 32],

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl AssetRoot {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<AssetRoot>();

    pub fn is_set(&self) -> bool {
        self.merkle_root != EMPTY_ROOT
    }

    /// Checks that `total_allocated` is attested for `account` by the current root
    pub fn verify_allocation(
        &self,
        account: &Pubkey,
        total_allocated: u64,
        proof: &[[u8; 32]],
    ) -> Result<()> {
        require!(self.is_set(), ClubRewardsError::NoMerkleRoot);

        let leaf = allocation_leaf(&self.asset, account, total_allocated);
        require!(
            verify(proof, self.merkle_root, leaf),
            ClubRewardsError::InvalidProof
        );
        Ok(())
    }
}
