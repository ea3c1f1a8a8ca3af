use anchor_lang::prelude::*;

/// ===== PRIZE LEDGER EVENTS =====

/// Event emitted when a prize distributor is created
#[event]
pub struct DistributorInitialized {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Owner of the distributor
    pub owner: Pubkey,
    /// Relayer allowed to claim on behalf of recipients, if any
    pub relayer: Option<Pubkey>,
}

/// Event emitted when an allocation root is replaced
#[event]
pub struct MerkleRootSet {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Asset key (all zeros for the native asset, token mint otherwise)
    pub asset: Pubkey,
    /// The merkle root hash
    pub merkle_root: [u8; 32],
}

/// Event emitted when lamports are deposited into the native vault
#[event]
pub struct NativeReceived {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Account that sent the lamports
    pub sender: Pubkey,
    /// Amount of lamports received
    pub amount: u64,
}

/// Event emitted on every settled claim, including zero payouts
#[event]
pub struct PrizeClaimed {
    /// The distributor account public key
    pub distributor: Pubkey,
    /// Asset key (all zeros for the native asset, token mint otherwise)
    pub asset: Pubkey,
    /// Account the prize was paid to
    pub account: Pubkey,
    /// Amount paid in this transaction
    pub amount: u64,
    /// Cumulative allocation attested by the proof
    pub total_allocated: u64,
}

/// Event emitted when the claim relayer changes
#[event]
pub struct RelayerSet {
    pub distributor: Pubkey,
    pub relayer: Option<Pubkey>,
}

/// ===== ACADEMY EVENTS =====

/// Event emitted when an academy is created
#[event]
pub struct AcademyInitialized {
    /// The academy account public key
    pub academy: Pubkey,
    /// Owner of the academy
    pub owner: Pubkey,
    /// Mint used for player vouchers
    pub player_mint: Pubkey,
    /// Receiver of minting fees
    pub payment_receiver: Pubkey,
    /// Initial maximum generation id
    pub max_generation_id: u32,
}

/// Event emitted when the club/division root is replaced
#[event]
pub struct DivisionRootSet {
    pub academy: Pubkey,
    pub merkle_root: [u8; 32],
}

/// Event emitted when the division fee table is replaced
#[event]
pub struct DivisionFeesSet {
    pub academy: Pubkey,
    /// Fees for division tiers 1..=DIVISION_COUNT, in order
    pub fees: Vec<u64>,
}

/// Event emitted when the maximum generation id changes
#[event]
pub struct MaxGenerationIdSet {
    pub academy: Pubkey,
    pub max_generation_id: u32,
}

/// Event emitted when the season clock moves forward
#[event]
pub struct SeasonAdvanced {
    pub academy: Pubkey,
    pub previous_season: u32,
    pub current_season: u32,
}

/// Event emitted when the fee receiver changes
#[event]
pub struct PaymentReceiverSet {
    pub academy: Pubkey,
    pub payment_receiver: Pubkey,
}

/// Event emitted when a club id is bound to its NFT mint
#[event]
pub struct ClubRegistered {
    pub academy: Pubkey,
    pub club_id: u64,
    pub club_mint: Pubkey,
}

/// Event emitted when a cohort batch is minted
#[event]
pub struct PlayersMinted {
    /// The academy account public key
    pub academy: Pubkey,
    /// Club the players were minted for
    pub club_id: u64,
    /// Division tier the club played in
    pub division_tier: u8,
    /// Season the cohort belongs to
    pub season: u32,
    /// Generation ids redeemed, in submission order
    pub generation_ids: Vec<u32>,
    /// Owner of the club who received the players
    pub owner: Pubkey,
    /// Lamports forwarded to the payment receiver
    pub amount_paid: u64,
}

/// ===== ACCESS GATE EVENTS =====

/// Event emitted when a gated account is paused
#[event]
pub struct Paused {
    /// Distributor or academy that was paused
    pub target: Pubkey,
    pub owner: Pubkey,
}

/// Event emitted when a gated account is reactivated
#[event]
pub struct Activated {
    /// Distributor or academy that was reactivated
    pub target: Pubkey,
    pub owner: Pubkey,
}

/// Event emitted when a gated account changes hands
#[event]
pub struct OwnershipTransferred {
    pub target: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
