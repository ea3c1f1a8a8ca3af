use anchor_lang::prelude::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for the distributor pause switch and ownership
 *
 * Access Control: Owner only. Works while paused.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct DistributorGate<'info> {
    #[account(mut)]
    pub distributor: Account<'info, PrizeDistributor>,

    /// Must be the distributor owner
    pub authority: Signer<'info>,
}

/**
 * Account context for the academy pause switch and ownership
 *
 * Access Control: Owner only. Works while paused.
 */
#[event_cpi]
#[derive(Accounts)]
pub struct AcademyGate<'info> {
    #[account(mut)]
    pub academy: Account<'info, Academy>,

    /// Must be the academy owner
    pub authority: Signer<'info>,
}

pub fn handle_pause_distributor(ctx: Context<DistributorGate>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts.distributor.gate.pause(&authority)?;

    emit_cpi!(Paused {
        target: ctx.accounts.distributor.key(),
        owner: authority,
    });
    Ok(())
}

pub fn handle_activate_distributor(ctx: Context<DistributorGate>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts.distributor.gate.activate(&authority)?;

    emit_cpi!(Activated {
        target: ctx.accounts.distributor.key(),
        owner: authority,
    });
    Ok(())
}

pub fn handle_transfer_distributor_ownership(
    ctx: Context<DistributorGate>,
    new_owner: Pubkey,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let previous_owner = ctx
        .accounts
        .distributor
        .gate
        .transfer_ownership(&authority, new_owner)?;

    emit_cpi!(OwnershipTransferred {
        target: ctx.accounts.distributor.key(),
        previous_owner,
        new_owner,
    });
    Ok(())
}

pub fn handle_pause_academy(ctx: Context<AcademyGate>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts.academy.gate.pause(&authority)?;

    emit_cpi!(Paused {
        target: ctx.accounts.academy.key(),
        owner: authority,
    });
    Ok(())
}

pub fn handle_activate_academy(ctx: Context<AcademyGate>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts.academy.gate.activate(&authority)?;

    emit_cpi!(Activated {
        target: ctx.accounts.academy.key(),
        owner: authority,
    });
    Ok(())
}

pub fn handle_transfer_academy_ownership(ctx: Context<AcademyGate>, new_owner: Pubkey) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let previous_owner = ctx
        .accounts
        .academy
        .gate
        .transfer_ownership(&authority, new_owner)?;

    emit_cpi!(OwnershipTransferred {
        target: ctx.accounts.academy.key(),
        previous_owner,
        new_owner,
    });
    Ok(())
}
