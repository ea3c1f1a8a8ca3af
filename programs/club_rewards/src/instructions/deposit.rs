use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::transfer_lamports;

/**
 * Account context for funding the native vault
 *
 * Token vaults are funded with plain token transfers; lamports go through this
 * instruction so every deposit is visible to indexers.
 *
 * Access Control: Anyone, rejected while paused
 */
#[event_cpi]
#[derive(Accounts)]
pub struct DepositNative<'info> {
    /// The distributor owning the vault
    pub distributor: Account<'info, PrizeDistributor>,

    /// Lamport vault of the distributor
    /// - Derived from: ["native_vault", distributor_key]
    #[account(
        mut,
        seeds = [NATIVE_VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub native_vault: SystemAccount<'info>,

    /// Account sending the lamports
    #[account(mut)]
    pub sender: Signer<'info>,

    /// System program for lamport transfer
    pub system_program: Program<'info, System>,
}

pub fn handle_deposit_native(ctx: Context<DepositNative>, amount: u64) -> Result<()> {
    ctx.accounts.distributor.authorize_deposit(amount)?;

    transfer_lamports(
        ctx.accounts.sender.to_account_info(),
        ctx.accounts.native_vault.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        amount,
        None,
    )?;

    emit_cpi!(NativeReceived {
        distributor: ctx.accounts.distributor.key(),
        sender: ctx.accounts.sender.key(),
        amount,
    });

    Ok(())
}
