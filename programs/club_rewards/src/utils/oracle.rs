use anchor_lang::prelude::*;
use crate::state::ClubRecord;

/// Resolves who may act as the owner of a club
pub trait ClubOwnership {
    /// Current owner of `club_id`, or `None` when it cannot be resolved
    fn owner_of(&self, club_id: u64) -> Option<Pubkey>;
}

/// Decides whether a caller may trigger a payout to an account
pub trait ClaimAuthority {
    fn may_claim_for(&self, caller: &Pubkey, account: &Pubkey) -> bool;
}

/**
 * Club ownership backed by the club NFT
 *
 * A club is owned by whoever holds the single unit of the mint bound to it
 * in its `ClubRecord`. The holding is read from the token account the caller
 * supplies; a holding of any other mint, or an empty one, resolves nobody.
 * Once the club mint's supply is no longer exactly one, the club has no
 * single holder and nobody resolves as its owner.
 */
#[derive(Debug, Clone, Copy)]
pub struct ClubHolding {
    pub club_id: u64,
    pub club_mint: Pubkey,
    pub club_mint_supply: u64,
    pub holding_mint: Pubkey,
    pub holding_owner: Pubkey,
    pub holding_amount: u64,
}

impl ClubHolding {
    pub fn new(
        record: &ClubRecord,
        club_mint_supply: u64,
        holding_mint: Pubkey,
        holding_owner: Pubkey,
        holding_amount: u64,
    ) -> Self {
        ClubHolding {
            club_id: record.club_id,
            club_mint: record.club_mint,
            club_mint_supply,
            holding_mint,
            holding_owner,
            holding_amount,
        }
    }
}

impl ClubOwnership for ClubHolding {
    fn owner_of(&self, club_id: u64) -> Option<Pubkey> {
        let holds_club = self.club_id == club_id
            && self.club_mint_supply == 1
            && self.holding_mint == self.club_mint
            && self.holding_amount == 1;
        holds_club.then_some(self.holding_owner)
    }
}
