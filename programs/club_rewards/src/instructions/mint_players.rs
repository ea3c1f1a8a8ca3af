use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{mint_token, transfer_lamports, ClubHolding};

/**
 * Account context for minting a cohort of academy players
 *
 * A club owner redeems generation slots earned by their club in a division.
 * The whole batch is validated before anything is written: season window,
 * division membership proof, club ownership, generation ids and exact payment.
 *
 * Access Control: Club owner (resolved from the club NFT holding)
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(requested_season: u32, club_id: u64, division_tier: u8)]
pub struct MintPlayers<'info> {
    /// The academy configuration
    /// - Signs player mints as mint authority
    pub academy: Account<'info, Academy>,

    /// Redeemed generation ids for (club_id, division_tier)
    /// - Derived from: ["cohort", academy_key, club_id, division_tier]
    #[account(
        init_if_needed,
        payer = caller,
        space = CohortRedemptions::LEN,
        seeds = [
            COHORT_SEED.as_bytes(),
            academy.key().as_ref(),
            club_id.to_le_bytes().as_ref(),
            division_tier.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub cohort: Account<'info, CohortRedemptions>,

    /// Registry record of the club
    /// - Derived from: ["club", academy_key, club_id]
    #[account(
        seeds = [CLUB_SEED.as_bytes(), academy.key().as_ref(), club_id.to_le_bytes().as_ref()],
        bump = club.bump
    )]
    pub club: Account<'info, ClubRecord>,

    /// Mint of the club NFT, as registered
    /// - Its live supply is part of the ownership check
    #[account(
        address = club.club_mint @ ClubRewardsError::ClubMintMismatch,
        mint::token_program = token_program,
    )]
    pub club_mint: InterfaceAccount<'info, Mint>,

    /// Token account holding the club NFT
    /// - Ownership is resolved in the handler so the pause and season checks come first
    pub club_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Player voucher mint
    #[account(
        mut,
        seeds = [PLAYER_MINT_SEED.as_bytes(), academy.key().as_ref()],
        bump,
        mint::token_program = token_program,
    )]
    pub player_mint: InterfaceAccount<'info, Mint>,

    /// Caller's token account receiving the player vouchers
    #[account(
        mut,
        token::mint = player_mint,
        token::authority = caller,
        token::token_program = token_program,
    )]
    pub player_token_account: InterfaceAccount<'info, TokenAccount>,

    /// Receiver of the minting fee
    /// CHECK: Compared against academy.payment_receiver in the handler
    #[account(mut)]
    pub payment_receiver: UncheckedAccount<'info>,

    /// Club owner paying for the batch
    #[account(mut)]
    pub caller: Signer<'info>,

    /// System program for account creation and fee transfer
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Mints one player voucher per generation id
 *
 * @param ctx - The account context
 * @param requested_season - Season the cohort belongs to
 * @param club_id - Club redeeming the slots
 * @param division_tier - Division the club played in, 1..=DIVISION_COUNT
 * @param generation_ids - Slots to redeem, processed in order
 * @param division_proof - Proof of hash(club_id + division_tier) against the division root
 * @param paid_amount - Lamports paid, must equal fee(division_tier) * generation_ids.len()
 *
 * Returns the number of players minted
 */
pub fn handle_mint_players(
    ctx: Context<MintPlayers>,
    requested_season: u32,
    club_id: u64,
    division_tier: u8,
    generation_ids: Vec<u32>,
    division_proof: Vec<[u8; 32]>,
    paid_amount: u64,
) -> Result<u32> {
    let caller = ctx.accounts.caller.key();

    // ===== VALIDATION PHASE =====

    let holding = &ctx.accounts.club_token_account;
    let clubs = ClubHolding::new(
        &ctx.accounts.club,
        ctx.accounts.club_mint.supply,
        holding.mint,
        holding.owner,
        holding.amount,
    );

    let request = MintRequest {
        requested_season,
        club_id,
        division_tier,
        generation_ids: &generation_ids,
        division_proof: &division_proof,
        paid_amount,
    };
    let plan = ctx
        .accounts
        .academy
        .authorize_mint(&ctx.accounts.cohort, &clubs, &caller, &request)?;

    require_keys_eq!(
        ctx.accounts.payment_receiver.key(),
        ctx.accounts.academy.payment_receiver,
        ClubRewardsError::PaymentReceiverMismatch
    );

    // ===== EFFECTS PHASE =====

    let academy_key = ctx.accounts.academy.key();
    let cohort = &mut ctx.accounts.cohort;
    cohort.academy = academy_key;
    cohort.club_id = club_id;
    cohort.division_tier = division_tier;
    cohort.bump = ctx.bumps.cohort;
    cohort.commit(plan.staged);

    // ===== INTERACTIONS PHASE =====

    if plan.amount_due > 0 {
        transfer_lamports(
            ctx.accounts.caller.to_account_info(),
            ctx.accounts.payment_receiver.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            plan.amount_due,
            None,
        )?;
    }

    let creator = ctx.accounts.academy.creator;
    let academy_bump = ctx.accounts.academy.bump;
    let seeds = &[
        ACADEMY_SEED.as_bytes(),
        creator.as_ref(),
        &[academy_bump],
    ];
    let signer = &[&seeds[..]];

    // One voucher per generation id; the ids are recorded in the cohort and the event
    mint_token(
        ctx.accounts.player_mint.to_account_info(),
        ctx.accounts.player_token_account.to_account_info(),
        ctx.accounts.academy.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        u64::from(plan.minted_count),
        signer,
    )?;

    msg!(
        "Minted {} players aged {} for club {}",
        plan.minted_count,
        plan.player_age,
        club_id
    );

    emit_cpi!(PlayersMinted {
        academy: academy_key,
        club_id,
        division_tier,
        season: requested_season,
        generation_ids,
        owner: caller,
        amount_paid: plan.amount_due,
    });

    Ok(plan.minted_count)
}
