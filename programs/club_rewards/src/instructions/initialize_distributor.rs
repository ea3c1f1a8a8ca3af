use anchor_lang::prelude::*;
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating a prize distributor
 *
 * The creator becomes the owner of the distributor gate. Roots, vaults and
 * claim records are created later, per asset, as the owner publishes tables.
 *
 * Access Control: Any signer, who becomes the owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeDistributor<'info> {
    /// The distributor account (PDA)
    /// - Derived from: ["prize_distributor", owner]
    #[account(
        init,
        payer = owner,
        space = PrizeDistributor::LEN,
        seeds = [DISTRIBUTOR_SEED.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub distributor: Account<'info, PrizeDistributor>,

    /// The creator and initial owner
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Creates a prize distributor
 *
 * @param ctx - The account context containing distributor and owner accounts
 * @param relayer - Optional account allowed to claim on behalf of recipients
 */
pub fn handle_initialize_distributor(
    ctx: Context<InitializeDistributor>,
    relayer: Option<Pubkey>,
) -> Result<()> {
    let owner_key = ctx.accounts.owner.key();
    let distributor = &mut ctx.accounts.distributor;

    distributor.bump = ctx.bumps.distributor;
    distributor.creator = owner_key;
    distributor.gate = Gate::new(owner_key);
    distributor.relayer = relayer;

    emit_cpi!(DistributorInitialized {
        distributor: distributor.key(),
        owner: owner_key,
        relayer,
    });

    Ok(())
}
