use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for setting the native allocation root
 *
 * Access Control: Owner only, rejected while paused
 *
 * Business Logic:
 * - Each leaf in the tree is hash(asset_key + account + total_allocated)
 * - Totals are cumulative: a new table restates what each account is owed in total
 * - Replacing the root leaves every ClaimStatus untouched
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetNativeRoot<'info> {
    /// The distributor the root belongs to
    pub distributor: Account<'info, PrizeDistributor>,

    /// Native allocation root
    /// - Derived from: ["asset_root", distributor_key, [0; 32]]
    #[account(
        init_if_needed,
        payer = authority,
        space = AssetRoot::LEN,
        seeds = [
            ASSET_ROOT_SEED.as_bytes(),
            distributor.key().as_ref(),
            AssetClass::Native.asset_key().as_ref()
        ],
        bump
    )]
    pub asset_root: Account<'info, AssetRoot>,

    /// Must be the distributor owner (checked in the handler, after the pause check)
    #[account(mut)]
    pub authority: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Account context for setting a token allocation root
 *
 * Also creates the token vault for the mint on first use, so the vault can be
 * funded with a plain token transfer.
 *
 * Access Control: Owner only, rejected while paused
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetTokenRoot<'info> {
    /// The distributor the root belongs to
    pub distributor: Account<'info, PrizeDistributor>,

    /// Token allocation root
    /// - Derived from: ["asset_root", distributor_key, token_mint]
    #[account(
        init_if_needed,
        payer = authority,
        space = AssetRoot::LEN,
        seeds = [ASSET_ROOT_SEED.as_bytes(), distributor.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub asset_root: Account<'info, AssetRoot>,

    /// Token vault holding the prizes for this mint
    /// - Controlled by the distributor PDA
    /// - Derived from: ["vault", distributor_key, token_mint]
    #[account(
        init_if_needed,
        payer = authority,
        token::mint = token_mint,
        token::authority = distributor,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// The prize token mint
    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Must be the distributor owner (checked in the handler, after the pause check)
    #[account(mut)]
    pub authority: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Replaces the native allocation root
 *
 * @param ctx - The account context
 * @param merkle_root - 32-byte root over native allocation leaves
 */
pub fn handle_set_native_root(ctx: Context<SetNativeRoot>, merkle_root: [u8; 32]) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts.distributor.gate.authorize_admin(&authority)?;

    let distributor_key = ctx.accounts.distributor.key();
    let asset_root = &mut ctx.accounts.asset_root;
    asset_root.distributor = distributor_key;
    asset_root.asset = AssetClass::Native;
    asset_root.bump = ctx.bumps.asset_root;
    asset_root.merkle_root = merkle_root;

    emit_cpi!(MerkleRootSet {
        distributor: distributor_key,
        asset: AssetClass::Native.asset_key(),
        merkle_root,
    });

    Ok(())
}

/**
 * Replaces the allocation root for one token mint
 *
 * @param ctx - The account context
 * @param merkle_root - 32-byte root over token allocation leaves
 */
pub fn handle_set_token_root(ctx: Context<SetTokenRoot>, merkle_root: [u8; 32]) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts.distributor.gate.authorize_admin(&authority)?;

    let distributor_key = ctx.accounts.distributor.key();
    let asset = AssetClass::Token(ctx.accounts.token_mint.key());
    let asset_root = &mut ctx.accounts.asset_root;
    asset_root.distributor = distributor_key;
    asset_root.asset = asset;
    asset_root.bump = ctx.bumps.asset_root;
    asset_root.merkle_root = merkle_root;

    emit_cpi!(MerkleRootSet {
        distributor: distributor_key,
        asset: asset.asset_key(),
        merkle_root,
    });

    Ok(())
}
