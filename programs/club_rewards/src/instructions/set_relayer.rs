use anchor_lang::prelude::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for distributor configuration changes
 *
 * Access Control: Owner only, rejected while paused
 */
#[event_cpi]
#[derive(Accounts)]
pub struct DistributorAdmin<'info> {
    #[account(mut)]
    pub distributor: Account<'info, PrizeDistributor>,

    /// Must be the distributor owner (checked in the handler, after the pause check)
    pub authority: Signer<'info>,
}

/**
 * Sets or clears the account allowed to claim on behalf of recipients
 *
 * Payouts always go to the account named in the allocation leaf; the relayer
 * only submits the transaction and pays for the claim record.
 */
pub fn handle_set_relayer(ctx: Context<DistributorAdmin>, relayer: Option<Pubkey>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let distributor = &mut ctx.accounts.distributor;
    distributor.gate.authorize_admin(&authority)?;

    distributor.relayer = relayer;

    emit_cpi!(RelayerSet {
        distributor: distributor.key(),
        relayer,
    });

    Ok(())
}
