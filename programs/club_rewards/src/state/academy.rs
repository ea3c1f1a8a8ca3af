use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use crate::constants::*;
use crate::error::*;
use crate::state::{CohortRedemptions, Gate, RedemptionBitmap};
use crate::utils::{verify, ClubOwnership};

/// Leaf committed for a club's membership in a division
/// - hash(club_id + division_tier)
pub fn division_leaf(club_id: u64, division_tier: u8) -> [u8; 32] {
    hashv(&[&club_id.to_le_bytes(), &[division_tier]]).to_bytes()
}

/// Arguments of a mint_players call, borrowed from the instruction data
#[derive(Debug, Clone, Copy)]
pub struct MintRequest<'a> {
    pub requested_season: u32,
    pub club_id: u64,
    pub division_tier: u8,
    pub generation_ids: &'a [u32],
    pub division_proof: &'a [[u8; 32]],
    pub paid_amount: u64,
}

/// Outcome of a validated mint request, applied by the instruction handler
#[derive(Debug, Clone, Copy)]
pub struct MintPlan {
    /// Redemption bitmap with the batch marked
    pub staged: RedemptionBitmap,
    /// Lamports owed for the batch, equal to the amount paid
    pub amount_due: u64,
    /// Age of the players being minted
    pub player_age: u32,
    /// Number of players in the batch
    pub minted_count: u32,
}

/**
 * Academy state account
 *
 * Season clock, division membership root, fee table and generation bound
 * for cohort minting. Owner-controlled through the embedded gate.
 *
 * Derivation: ["academy", creator]
 *
 * Lifecycle:
 * 1. Created during initialize_academy at INITIAL_SEASON
 * 2. Configuration replaced by the owner between seasons
 * 3. Read by every mint_players call
 */
#[account]
#[derive(Default, Debug)]
pub struct Academy {
    /// Bump seed for PDA derivation
    /// - Needed to sign player mints
    pub bump: u8,

    /// Account that created the academy
    pub creator: Pubkey,

    /// Owner and pause switch
    pub gate: Gate,

    /// Season clock, starts at INITIAL_SEASON and only moves forward
    pub current_season: u32,

    /// Merkle root over division_leaf entries
    pub division_root: [u8; 32],

    /// Minting fee in lamports per player, index 0 is division tier 1
    pub division_fees: [u64; DIVISION_COUNT],

    /// Highest generation id accepted in a request
    pub max_generation_id: u32,

    /// Account that receives minting fees
    pub payment_receiver: Pubkey,

    /// Mint for player vouchers, authority is this academy
    pub player_mint: Pubkey,
}

impl Academy {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<Academy>();

    /// Age a player minted for `requested_season` has in the current season
    pub fn player_age(&self, requested_season: u32) -> Result<u32> {
        if requested_season == 0 {
            return Err(error!(ClubRewardsError::InvalidSeasonId)
                .with_values((requested_season, self.current_season)));
        }

        // A cohort from a future season has not reached the minimum age yet
        let elapsed = match self.current_season.checked_sub(requested_season) {
            Some(elapsed) => elapsed,
            None => {
                return Err(error!(ClubRewardsError::PlayerTooYoung)
                    .with_values((requested_season, self.current_season)));
            }
        };

        let age = ACADEMY_MIN_AGE.saturating_add(elapsed);
        if age > ACADEMY_MAX_AGE {
            return Err(error!(ClubRewardsError::PlayerTooOld)
                .with_values((requested_season, self.current_season)));
        }
        Ok(age)
    }

    pub fn verify_division(&self, club_id: u64, division_tier: u8, proof: &[[u8; 32]]) -> Result<()> {
        let leaf = division_leaf(club_id, division_tier);
        if !verify(proof, self.division_root, leaf) {
            msg!("Club {} is not in division {}", club_id, division_tier);
            return Err(error!(ClubRewardsError::ClubNotInDivision)
                .with_values((club_id, division_tier)));
        }
        Ok(())
    }

    /// Fee for one player of `division_tier`
    pub fn fee_for(&self, division_tier: u8) -> Result<u64> {
        let index = (division_tier as usize)
            .checked_sub(1)
            .ok_or(ClubRewardsError::InvalidDivisionTier)?;
        self.division_fees
            .get(index)
            .copied()
            .ok_or_else(|| ClubRewardsError::InvalidDivisionTier.into())
    }

    /// Exact payment required for `count` players of `division_tier`
    pub fn amount_due(&self, division_tier: u8, count: usize) -> Result<u64> {
        let count = u64::try_from(count).map_err(|_| ClubRewardsError::ArithmeticOverflow)?;
        self.fee_for(division_tier)?
            .checked_mul(count)
            .ok_or_else(|| ClubRewardsError::ArithmeticOverflow.into())
    }

    /// Validates a mint request without touching any state
    ///
    /// Checks run in order: pause, season window, division membership, club
    /// ownership, generation ids, payment. The caller commits the returned
    /// bitmap only after the payment and mint CPIs are prepared.
    pub fn authorize_mint(
        &self,
        redemptions: &CohortRedemptions,
        clubs: &impl ClubOwnership,
        caller: &Pubkey,
        request: &MintRequest,
    ) -> Result<MintPlan> {
        self.gate.ensure_active()?;

        let player_age = self.player_age(request.requested_season)?;

        self.verify_division(request.club_id, request.division_tier, request.division_proof)?;

        if clubs.owner_of(request.club_id) != Some(*caller) {
            msg!("{} does not own club {}", caller, request.club_id);
            return Err(error!(ClubRewardsError::NotClubOwner)
                .with_values((request.club_id, *caller)));
        }

        require!(
            !request.generation_ids.is_empty(),
            ClubRewardsError::EmptyGenerationBatch
        );
        let staged = redemptions.stage(request.generation_ids, self.max_generation_id)?;
        let minted_count = u32::try_from(request.generation_ids.len())
            .map_err(|_| ClubRewardsError::ArithmeticOverflow)?;

        let amount_due = self.amount_due(request.division_tier, request.generation_ids.len())?;
        if request.paid_amount != amount_due {
            msg!("Paid {} lamports, expected {}", request.paid_amount, amount_due);
            return Err(error!(ClubRewardsError::IncorrectPaymentAmount)
                .with_values((request.paid_amount, amount_due)));
        }

        Ok(MintPlan {
            staged,
            amount_due,
            player_age,
            minted_count,
        })
    }

    pub fn set_division_root(&mut self, caller: &Pubkey, division_root: [u8; 32]) -> Result<()> {
        self.gate.authorize_admin(caller)?;
        self.division_root = division_root;
        Ok(())
    }

    pub fn set_division_fees(&mut self, caller: &Pubkey, fees: &[u64]) -> Result<()> {
        self.gate.authorize_admin(caller)?;
        let fees: [u64; DIVISION_COUNT] = fees.try_into().map_err(|_| {
            error!(ClubRewardsError::InvalidFeeTable).with_values((fees.len(), DIVISION_COUNT))
        })?;
        self.division_fees = fees;
        Ok(())
    }

    pub fn set_max_generation_id(&mut self, caller: &Pubkey, max_generation_id: u32) -> Result<()> {
        self.gate.authorize_admin(caller)?;
        check_generation_cap(max_generation_id)?;
        self.max_generation_id = max_generation_id;
        Ok(())
    }

    /// Moves the season clock forward, returning the previous season
    pub fn advance_season(&mut self, caller: &Pubkey, season: u32) -> Result<u32> {
        self.gate.authorize_admin(caller)?;
        if season <= self.current_season {
            return Err(error!(ClubRewardsError::InvalidSeasonAdvance)
                .with_values((season, self.current_season)));
        }
        let previous = self.current_season;
        self.current_season = season;
        Ok(previous)
    }

    pub fn set_payment_receiver(&mut self, caller: &Pubkey, payment_receiver: Pubkey) -> Result<()> {
        self.gate.authorize_admin(caller)?;
        require!(
            payment_receiver != Pubkey::default(),
            ClubRewardsError::PaymentReceiverMismatch
        );
        self.payment_receiver = payment_receiver;
        Ok(())
    }
}

/// Generation ids must fit the redemption bitmap
pub fn check_generation_cap(max_generation_id: u32) -> Result<()> {
    if max_generation_id >= GENERATION_ID_CAP {
        return Err(error!(ClubRewardsError::GenerationCapExceeded)
            .with_values((max_generation_id, GENERATION_ID_CAP)));
    }
    Ok(())
}
