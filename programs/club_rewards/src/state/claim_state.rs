use anchor_lang::prelude::*;

/**
 * Individual claim status account
 *
 * Tracks the cumulative amount paid to one account for one asset class.
 * Allocations are cumulative totals, so each claim pays the difference
 * between the attested total and what was already paid.
 *
 * Derivation: ["claim", distributor_key, asset_key, account]
 *
 * Lifecycle:
 * 1. Created on first claim (using init_if_needed)
 * 2. Raised with each claim that attests a higher total
 *
 * Design Notes:
 * - Keyed by asset, not by root, so progress survives root updates
 * - claimed_amount never decreases; a lowered allocation pays zero
 */
#[account]
#[derive(Default, Debug)]
pub struct ClaimStatus {
    /// Total amount claimed by this account (cumulative)
    pub claimed_amount: u64,
}

impl ClaimStatus {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClaimStatus>();

    /// Amount still owed against `total_allocated`, clamped at zero
    pub fn pending(&self, total_allocated: u64) -> u64 {
        total_allocated.saturating_sub(self.claimed_amount)
    }

    /// Records a verified total and returns the amount to pay now
    pub fn record(&mut self, total_allocated: u64) -> u64 {
        let pending = self.pending(total_allocated);
        if pending > 0 {
            self.claimed_amount = total_allocated;
        }
        pending
    }
}
