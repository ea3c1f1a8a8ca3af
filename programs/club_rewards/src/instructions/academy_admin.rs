use anchor_lang::prelude::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for academy configuration changes
 *
 * Shared by every owner-only setter. The pause check runs before the owner
 * check, then the new value is range checked and stored whole.
 *
 * Access Control: Owner only, rejected while paused
 */
#[event_cpi]
#[derive(Accounts)]
pub struct AcademyAdmin<'info> {
    #[account(mut)]
    pub academy: Account<'info, Academy>,

    /// Must be the academy owner (checked in the handler, after the pause check)
    pub authority: Signer<'info>,
}

/// Replaces the root over (club_id, division_tier) leaves
pub fn handle_set_division_root(ctx: Context<AcademyAdmin>, merkle_root: [u8; 32]) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let academy = &mut ctx.accounts.academy;
    academy.set_division_root(&authority, merkle_root)?;

    emit_cpi!(DivisionRootSet {
        academy: academy.key(),
        merkle_root,
    });
    Ok(())
}

/// Replaces the whole fee table; it must cover every division tier
pub fn handle_set_division_fees(ctx: Context<AcademyAdmin>, fees: Vec<u64>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let academy = &mut ctx.accounts.academy;
    academy.set_division_fees(&authority, &fees)?;

    emit_cpi!(DivisionFeesSet {
        academy: academy.key(),
        fees,
    });
    Ok(())
}

pub fn handle_set_max_generation_id(ctx: Context<AcademyAdmin>, max_generation_id: u32) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let academy = &mut ctx.accounts.academy;
    academy.set_max_generation_id(&authority, max_generation_id)?;

    emit_cpi!(MaxGenerationIdSet {
        academy: academy.key(),
        max_generation_id,
    });
    Ok(())
}

/// Moves the season clock forward; it never goes back or stands still
pub fn handle_advance_season(ctx: Context<AcademyAdmin>, season: u32) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let academy = &mut ctx.accounts.academy;
    let previous_season = academy.advance_season(&authority, season)?;

    emit_cpi!(SeasonAdvanced {
        academy: academy.key(),
        previous_season,
        current_season: season,
    });
    Ok(())
}

pub fn handle_set_payment_receiver(ctx: Context<AcademyAdmin>, payment_receiver: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let academy = &mut ctx.accounts.academy;
    academy.set_payment_receiver(&authority, payment_receiver)?;

    emit_cpi!(PaymentReceiverSet {
        academy: academy.key(),
        payment_receiver,
    });
    Ok(())
}
