use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Fixed parameters of the prize ledger and the academy: PDA seeds,
 * the division table shape, generation id bounds and the academy age window.
 */

/// ===== ACADEMY CONSTANTS =====

/// Number of league divisions with a minting fee
/// - Division tiers are indexed 1..=DIVISION_COUNT
/// - A fee table update must supply exactly this many entries
pub const DIVISION_COUNT: usize = 8;

/// Exclusive upper bound for generation ids
/// - Each (club, division) pair tracks redemptions in a bitmap of this many bits
/// - max_generation_id can never be raised to this value or above
#[constant]
pub const GENERATION_ID_CAP: u32 = 1024;

/// Age of a player minted for the current season
#[constant]
pub const ACADEMY_MIN_AGE: u32 = 18;

/// Oldest age a player may have when minted
/// - A cohort stays mintable for ACADEMY_MAX_AGE - ACADEMY_MIN_AGE seasons after its own
#[constant]
pub const ACADEMY_MAX_AGE: u32 = 20;

/// Season the academy starts in
pub const INITIAL_SEASON: u32 = 1;

/// ===== PDA SEED CONSTANTS =====

/// Seed for the prize distributor PDA
/// - Used in: ["prize_distributor", creator]
pub const DISTRIBUTOR_SEED: &str = "prize_distributor";

/// Seed for per-asset allocation roots
/// - Used in: ["asset_root", distributor_key, asset_key]
/// - The native asset uses the all-zero key
pub const ASSET_ROOT_SEED: &str = "asset_root";

/// Seed for the lamport vault PDA
/// - Used in: ["native_vault", distributor_key]
/// - System owned, so it can pay out with a plain system transfer
pub const NATIVE_VAULT_SEED: &str = "native_vault";

/// Seed for token vault PDAs
/// - Used in: ["vault", distributor_key, token_mint]
/// - Token authority is the distributor PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for claim status PDA derivation
/// - Used in: ["claim", distributor_key, asset_key, account]
/// - Tracks cumulative claimed amount even when owner updates merkle root
pub const CLAIM_SEED: &str = "claim";

/// Seed for the academy PDA
/// - Used in: ["academy", creator]
pub const ACADEMY_SEED: &str = "academy";

/// Seed for the player voucher mint
/// - Used in: ["player_mint", academy_key]
pub const PLAYER_MINT_SEED: &str = "player_mint";

/// Seed for per (club, division) redemption bitmaps
/// - Used in: ["cohort", academy_key, club_id, division_tier]
pub const COHORT_SEED: &str = "cohort";

/// Seed for club registry records
/// - Used in: ["club", academy_key, club_id]
pub const CLUB_SEED: &str = "club";
