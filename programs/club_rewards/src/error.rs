use anchor_lang::prelude::*;

#[error_code]
pub enum ClubRewardsError {
    // Access control errors
    #[msg("Only owner can perform this action")]
    OnlyOwner,
    #[msg("Invalid owner account")]
    InvalidOwner,
    #[msg("Caller cannot claim on behalf of this account")]
    InvalidAccount,

    // Pause errors
    #[msg("Contract is paused")]
    ContractPaused,
    #[msg("Contract is not paused")]
    ContractNotPaused,

    // Merkle proof errors
    #[msg("No merkle root set")]
    NoMerkleRoot,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Club is not in the given division")]
    ClubNotInDivision,

    // Club errors
    #[msg("Caller does not own the club")]
    NotClubOwner,
    #[msg("Club mint does not match the registered club")]
    ClubMintMismatch,

    // Season errors
    #[msg("Season id cannot be zero")]
    InvalidSeasonId,
    #[msg("Player is too young to be minted")]
    PlayerTooYoung,
    #[msg("Player is too old to be minted")]
    PlayerTooOld,
    #[msg("New season must be after the current season")]
    InvalidSeasonAdvance,

    // Generation errors
    #[msg("No generation ids given")]
    EmptyGenerationBatch,
    #[msg("Generation id is above the maximum")]
    GenerationIdTooHigh,
    #[msg("Player has already been redeemed")]
    PlayerAlreadyRedeemed,
    #[msg("Maximum generation id exceeds the redemption capacity")]
    GenerationCapExceeded,

    // Fee and payment errors
    #[msg("Division tier out of range")]
    InvalidDivisionTier,
    #[msg("Division fee table has the wrong length")]
    InvalidFeeTable,
    #[msg("Incorrect payment amount")]
    IncorrectPaymentAmount,
    #[msg("Payment receiver does not match the academy configuration")]
    PaymentReceiverMismatch,

    // Amount validation errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Insufficient vault balance for this claim")]
    InsufficientVaultBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match the asset root")]
    TokenMintMismatch,
}
