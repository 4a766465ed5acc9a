use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{mint_to, Mint, MintTo, Token, TokenAccount};

use crate::constants::VALIDATOR_SET_SEED;
use crate::events::TokensBridgedIn;
use crate::quorum::verify_quorum;
use crate::state::ValidatorSet;

#[derive(Accounts)]
pub struct BridgeTokens<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    /// CHECK: arbitrary foreign-chain-derived recipient; only used as the
    /// ATA owner key, never read or written directly.
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = recipient,
    )]
    pub recipient_ata: Account<'info, TokenAccount>,

    /// Signing authority for the mint. Deliberately unconstrained against
    /// `mint.mint_authority`; a mismatch is left to fail inside the CPI
    /// below so it surfaces as a token-layer error, not an Anchor-level one.
    #[account(
        seeds = [VALIDATOR_SET_SEED],
        bump = validator_set.bump,
    )]
    pub validator_set: Account<'info, ValidatorSet>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

/// Quorum-gated inbound mint: co-signed by the current validator set, mints
/// `amount` wrapped tokens into the recipient's associated token account,
/// creating it first if absent.
pub fn handler(ctx: Context<BridgeTokens>, amount: u64) -> Result<()> {
    verify_quorum(&ctx.accounts.validator_set, ctx.remaining_accounts)?;

    let bump = ctx.accounts.validator_set.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[VALIDATOR_SET_SEED, &[bump]]];

    mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.recipient_ata.to_account_info(),
                authority: ctx.accounts.validator_set.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    msg!("minted {} units to {}", amount, ctx.accounts.recipient.key());

    emit!(TokensBridgedIn {
        recipient: ctx.accounts.recipient.key(),
        recipient_ata: ctx.accounts.recipient_ata.key(),
        amount,
    });

    Ok(())
}
