use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for binding a club id to its NFT mint
 *
 * The record is what mint_players reads to decide who owns a club. A club id
 * can be registered once.
 *
 * Access Control: Owner only, rejected while paused
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(club_id: u64)]
pub struct RegisterClub<'info> {
    pub academy: Account<'info, Academy>,

    /// Club record
    /// - Derived from: ["club", academy_key, club_id]
    #[account(
        init,
        payer = authority,
        space = ClubRecord::LEN,
        seeds = [CLUB_SEED.as_bytes(), academy.key().as_ref(), club_id.to_le_bytes().as_ref()],
        bump
    )]
    pub club: Account<'info, ClubRecord>,

    /// Mint of the club NFT
    /// - Exactly one unit and no mint authority, so the club has a single holder
    #[account(
        constraint = club_mint.supply == 1 && club_mint.decimals == 0 @ ClubRewardsError::ClubMintMismatch,
        constraint = club_mint.mint_authority.is_none() @ ClubRewardsError::ClubMintMismatch
    )]
    pub club_mint: InterfaceAccount<'info, Mint>,

    /// Must be the academy owner (checked in the handler, after the pause check)
    #[account(mut)]
    pub authority: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_register_club(ctx: Context<RegisterClub>, club_id: u64) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts.academy.gate.authorize_admin(&authority)?;

    let academy_key = ctx.accounts.academy.key();
    let club_mint = ctx.accounts.club_mint.key();
    let club = &mut ctx.accounts.club;
    club.academy = academy_key;
    club.club_id = club_id;
    club.club_mint = club_mint;
    club.bump = ctx.bumps.club;

    emit_cpi!(ClubRegistered {
        academy: academy_key,
        club_id,
        club_mint,
    });

    Ok(())
}
