use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use crate::utils::{transfer_lamports, transfer_token};

/**
 * Account context for claiming native prizes
 *
 * The recipient is the account the allocation leaf names. The caller pays for
 * the ClaimStatus account and must be the recipient or the configured relayer.
 *
 * Access Control: Recipient or relayer, with a valid merkle proof
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimNative<'info> {
    /// The distributor holding the gate and claim policy
    pub distributor: Account<'info, PrizeDistributor>,

    /// Native allocation root
    #[account(
        seeds = [
            ASSET_ROOT_SEED.as_bytes(),
            distributor.key().as_ref(),
            AssetClass::Native.asset_key().as_ref()
        ],
        bump = asset_root.bump
    )]
    pub asset_root: Account<'info, AssetRoot>,

    /// Cumulative claim progress of the recipient
    /// - Derived from: ["claim", distributor_key, asset_key, recipient]
    #[account(
        init_if_needed,
        payer = caller,
        space = ClaimStatus::LEN,
        seeds = [
            CLAIM_SEED.as_bytes(),
            distributor.key().as_ref(),
            AssetClass::Native.asset_key().as_ref(),
            recipient.key().as_ref()
        ],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Lamport vault of the distributor
    /// - Derived from: ["native_vault", distributor_key]
    #[account(
        mut,
        seeds = [NATIVE_VAULT_SEED.as_bytes(), distributor.key().as_ref()],
        bump
    )]
    pub native_vault: SystemAccount<'info>,

    /// Account named in the allocation leaf, receives the lamports
    #[account(mut)]
    pub recipient: SystemAccount<'info>,

    /// Recipient or relayer submitting the claim
    #[account(mut)]
    pub caller: Signer<'info>,

    /// System program for account creation and lamport transfer
    pub system_program: Program<'info, System>,
}

/**
 * Account context for claiming token prizes
 *
 * Access Control: Recipient or relayer, with a valid merkle proof
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimToken<'info> {
    /// The distributor holding the gate and claim policy
    /// - Signs vault transfers as token authority
    pub distributor: Account<'info, PrizeDistributor>,

    /// Allocation root for the mint
    #[account(
        seeds = [ASSET_ROOT_SEED.as_bytes(), distributor.key().as_ref(), token_mint.key().as_ref()],
        bump = asset_root.bump
    )]
    pub asset_root: Account<'info, AssetRoot>,

    /// Cumulative claim progress of the recipient for this mint
    /// - Derived from: ["claim", distributor_key, token_mint, recipient]
    #[account(
        init_if_needed,
        payer = caller,
        space = ClaimStatus::LEN,
        seeds = [
            CLAIM_SEED.as_bytes(),
            distributor.key().as_ref(),
            token_mint.key().as_ref(),
            recipient.key().as_ref()
        ],
        bump
    )]
    pub claim_status: Account<'info, ClaimStatus>,

    /// Token vault holding the prizes for this mint
    /// - Derived from: ["vault", distributor_key, token_mint]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), distributor.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub token_vault: InterfaceAccount<'info, TokenAccount>,

    /// Account named in the allocation leaf
    /// CHECK: Only its key is used, in PDA seeds and the allocation leaf
    pub recipient: UncheckedAccount<'info>,

    /// Recipient's token account to receive the tokens
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = recipient,
        token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The prize token mint
    #[account(
        mint::token_program = token_program,
        constraint = asset_root.asset == AssetClass::Token(token_mint.key()) @ ClubRewardsError::TokenMintMismatch
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    /// Recipient or relayer submitting the claim
    #[account(mut)]
    pub caller: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Claims native prizes with merkle proof verification
 *
 * @param ctx - The account context
 * @param total_allocated - Cumulative amount the recipient is owed (from merkle tree)
 * @param proof - Sibling hashes from leaf to root
 *
 * Validation Process:
 * 1. Distributor is not paused
 * 2. Caller may claim for the recipient
 * 3. Proof verifies hash(asset_key + recipient + total_allocated)
 * 4. Pay total_allocated minus what was already claimed, or nothing
 *
 * Returns the amount paid by this call
 */
pub fn handle_claim_native(
    ctx: Context<ClaimNative>,
    total_allocated: u64,
    proof: Vec<[u8; 32]>,
) -> Result<u64> {
    let caller = ctx.accounts.caller.key();
    let recipient = ctx.accounts.recipient.key();

    // ===== VALIDATION PHASE =====

    let pending_amount = ctx.accounts.distributor.authorize_claim(
        &ctx.accounts.asset_root,
        &ctx.accounts.claim_status,
        &caller,
        &recipient,
        total_allocated,
        &proof,
    )?;

    // The vault is system owned and must stay rent exempt
    let spendable = ctx
        .accounts
        .native_vault
        .lamports()
        .saturating_sub(Rent::get()?.minimum_balance(0));
    require!(
        spendable >= pending_amount,
        ClubRewardsError::InsufficientVaultBalance
    );

    // ===== EFFECTS PHASE =====

    let paid = ctx.accounts.claim_status.record(total_allocated);

    // ===== INTERACTIONS PHASE =====

    if paid > 0 {
        let distributor_key = ctx.accounts.distributor.key();
        let vault_bump = ctx.bumps.native_vault;
        let seeds = &[
            NATIVE_VAULT_SEED.as_bytes(),
            distributor_key.as_ref(),
            &[vault_bump],
        ];
        let signer = &[&seeds[..]];

        transfer_lamports(
            ctx.accounts.native_vault.to_account_info(),
            ctx.accounts.recipient.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            paid,
            Some(signer),
        )?;
    }

    emit_cpi!(PrizeClaimed {
        distributor: ctx.accounts.distributor.key(),
        asset: AssetClass::Native.asset_key(),
        account: recipient,
        amount: paid,
        total_allocated,
    });

    Ok(paid)
}

/**
 * Claims token prizes with merkle proof verification
 *
 * @param ctx - The account context
 * @param total_allocated - Cumulative amount the recipient is owed (from merkle tree)
 * @param proof - Sibling hashes from leaf to root
 */
pub fn handle_claim_token(
    ctx: Context<ClaimToken>,
    total_allocated: u64,
    proof: Vec<[u8; 32]>,
) -> Result<u64> {
    let caller = ctx.accounts.caller.key();
    let recipient = ctx.accounts.recipient.key();

    // ===== VALIDATION PHASE =====

    let pending_amount = ctx.accounts.distributor.authorize_claim(
        &ctx.accounts.asset_root,
        &ctx.accounts.claim_status,
        &caller,
        &recipient,
        total_allocated,
        &proof,
    )?;

    require!(
        ctx.accounts.token_vault.amount >= pending_amount,
        ClubRewardsError::InsufficientVaultBalance
    );

    // ===== EFFECTS PHASE =====

    let paid = ctx.accounts.claim_status.record(total_allocated);

    // ===== INTERACTIONS PHASE =====

    let token_mint_key = ctx.accounts.token_mint.key();
    if paid > 0 {
        let creator = ctx.accounts.distributor.creator;
        let distributor_bump = ctx.accounts.distributor.bump;
        let seeds = &[
            DISTRIBUTOR_SEED.as_bytes(),
            creator.as_ref(),
            &[distributor_bump],
        ];
        let signer = &[&seeds[..]];

        transfer_token(
            ctx.accounts.distributor.to_account_info(),
            ctx.accounts.token_vault.to_account_info(),
            ctx.accounts.recipient_token_account.to_account_info(),
            ctx.accounts.token_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            paid,
            ctx.accounts.token_mint.decimals,
            Some(signer),
        )?;
    }

    emit_cpi!(PrizeClaimed {
        distributor: ctx.accounts.distributor.key(),
        asset: token_mint_key,
        account: recipient,
        amount: paid,
        total_allocated,
    });

    Ok(paid)
}
