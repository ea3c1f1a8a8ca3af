use anchor_lang::prelude::*;

/**
 * Club registry record
 *
 * Binds a club id to the NFT mint that represents the club. Whoever holds
 * that NFT owns the club for academy purposes.
 *
 * Derivation: ["club", academy_key, club_id]
 */
#[account]
#[derive(Default, Debug)]
pub struct ClubRecord {
    /// Academy the club is registered with
    pub academy: Pubkey,

    /// Club id used in division leaves
    pub club_id: u64,

    /// Mint of the club NFT (supply of one)
    pub club_mint: Pubkey,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl ClubRecord {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ClubRecord>();
}
