use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/// Number of u64 words needed to cover GENERATION_ID_CAP bits
pub const REDEMPTION_WORDS: usize = (GENERATION_ID_CAP as usize + 63) / 64;

/// Redemption bitmap, one bit per generation id
pub type RedemptionBitmap = [u64; REDEMPTION_WORDS];

/**
 * Redeemed generation ids for one (club, division) pair
 *
 * Derivation: ["cohort", academy_key, club_id, division_tier]
 *
 * Lifecycle:
 * 1. Created on the first mint for the pair (using init_if_needed)
 * 2. Bits are only ever set, never cleared
 */
#[account]
#[derive(Default, Debug)]
pub struct CohortRedemptions {
    /// Academy the bitmap belongs to
    pub academy: Pubkey,

    /// Club the generation slots belong to
    pub club_id: u64,

    /// Division tier the slots were earned in
    pub division_tier: u8,

    /// Bit `id` is set once generation id `id` has been minted
    pub redeemed: RedemptionBitmap,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl CohortRedemptions {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<CohortRedemptions>();

    pub fn is_redeemed(&self, generation_id: u32) -> bool {
        bit_is_set(&self.redeemed, generation_id)
    }

    pub fn redeemed_count(&self) -> u32 {
        self.redeemed.iter().map(|word| word.count_ones()).sum()
    }

    /// Validates a batch against a scratch copy of the bitmap
    ///
    /// Ids are processed in submission order, so a duplicate inside the batch
    /// fails exactly like an id redeemed by an earlier transaction. The stored
    /// bitmap is untouched; pass the result to `commit` once every other
    /// check has passed.
    pub fn stage(&self, generation_ids: &[u32], max_generation_id: u32) -> Result<RedemptionBitmap> {
        let mut staged = self.redeemed;
        for &generation_id in generation_ids {
            if generation_id > max_generation_id {
                msg!("Generation id {} above maximum {}", generation_id, max_generation_id);
                return Err(error!(ClubRewardsError::GenerationIdTooHigh)
                    .with_values((generation_id, max_generation_id)));
            }
            if bit_is_set(&staged, generation_id) {
                msg!("Generation id {} already redeemed", generation_id);
                return Err(error!(ClubRewardsError::PlayerAlreadyRedeemed)
                    .with_values((generation_id, max_generation_id)));
            }
            set_bit(&mut staged, generation_id);
        }
        Ok(staged)
    }

    pub fn commit(&mut self, staged: RedemptionBitmap) {
        self.redeemed = staged;
    }
}

fn bit_is_set(bitmap: &RedemptionBitmap, generation_id: u32) -> bool {
    let index = generation_id as usize;
    bitmap
        .get(index / 64)
        .map_or(false, |word| word & (1u64 << (index % 64)) != 0)
}

fn set_bit(bitmap: &mut RedemptionBitmap, generation_id: u32) {
    let index = generation_id as usize;
    if let Some(word) = bitmap.get_mut(index / 64) {
        *word |= 1u64 << (index % 64);
    }
}
