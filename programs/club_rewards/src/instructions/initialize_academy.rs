use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating an academy
 *
 * This instruction initializes the academy configuration and its player mint:
 * - Creates the academy PDA with the creator as owner, starting at INITIAL_SEASON
 * - Creates the player voucher mint with the academy PDA as mint authority
 *
 * Access Control: Any signer, who becomes the owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeAcademy<'info> {
    /// The academy account (PDA)
    /// - Derived from: ["academy", owner]
    #[account(
        init,
        payer = owner,
        space = Academy::LEN,
        seeds = [ACADEMY_SEED.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub academy: Account<'info, Academy>,

    /// Player voucher mint, one unit per minted generation id
    /// - Derived from: ["player_mint", academy_key]
    #[account(
        init,
        payer = owner,
        mint::decimals = 0,
        mint::authority = academy,
        mint::token_program = token_program,
        seeds = [PLAYER_MINT_SEED.as_bytes(), academy.key().as_ref()],
        bump
    )]
    pub player_mint: InterfaceAccount<'info, Mint>,

    /// The creator and initial owner
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates an academy
 *
 * @param ctx - The account context
 * @param max_generation_id - Highest generation id accepted initially
 * @param division_fees - Fee per player for tiers 1..=DIVISION_COUNT
 * @param payment_receiver - Account that receives minting fees
 */
pub fn handle_initialize_academy(
    ctx: Context<InitializeAcademy>,
    max_generation_id: u32,
    division_fees: Vec<u64>,
    payment_receiver: Pubkey,
) -> Result<()> {
    check_generation_cap(max_generation_id)?;
    require!(
        payment_receiver != Pubkey::default(),
        ClubRewardsError::PaymentReceiverMismatch
    );
    let fees: [u64; DIVISION_COUNT] = division_fees
        .as_slice()
        .try_into()
        .map_err(|_| ClubRewardsError::InvalidFeeTable)?;

    let owner_key = ctx.accounts.owner.key();
    let player_mint_key = ctx.accounts.player_mint.key();
    let academy = &mut ctx.accounts.academy;

    academy.bump = ctx.bumps.academy;
    academy.creator = owner_key;
    academy.gate = Gate::new(owner_key);
    academy.current_season = INITIAL_SEASON;
    academy.division_fees = fees;
    academy.max_generation_id = max_generation_id;
    academy.payment_receiver = payment_receiver;
    academy.player_mint = player_mint_key;
    // Note: division_root stays unset until the first set_division_root

    emit_cpi!(AcademyInitialized {
        academy: academy.key(),
        owner: owner_key,
        player_mint: player_mint_key,
        payment_receiver,
        max_generation_id,
    });

    Ok(())
}
