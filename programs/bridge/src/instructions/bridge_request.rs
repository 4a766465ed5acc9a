use anchor_lang::prelude::*;
use anchor_spl::token::{burn, Burn, Mint, Token, TokenAccount};

use crate::constants::{BRIDGING_REQUEST_SEED, RECEIVER_LEN};
use crate::errors::BridgeError;
use crate::events::BridgingRequestOpened;
use crate::state::BridgingRequest;

#[derive(Accounts)]
pub struct BridgeRequest<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = signer,
    )]
    pub signers_ata: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = signer,
        space = 8 + BridgingRequest::SPACE,
        seeds = [BRIDGING_REQUEST_SEED, signer.key().as_ref()],
        bump
    )]
    pub bridging_request: Account<'info, BridgingRequest>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// Open an outbound bridging request: burn the sender's `amount` wrapped
/// tokens immediately (burn-on-request custody, see `DESIGN.md`) and record
/// the intent in a per-sender `BridgingRequest` PDA until `close_request`
/// finalizes or abandons it.
///
/// `receiver` is a Borsh-native `[u8; RECEIVER_LEN]`, so an over- or
/// under-length payload never reaches this handler: it fails Anchor's own
/// instruction deserialization first.
pub fn handler(
    ctx: Context<BridgeRequest>,
    amount: u64,
    receiver: [u8; RECEIVER_LEN],
    destination_chain: u32,
) -> Result<()> {
    require!(
        ctx.accounts.signers_ata.amount >= amount,
        BridgeError::InsufficientFunds
    );

    burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.mint.to_account_info(),
                from: ctx.accounts.signers_ata.to_account_info(),
                authority: ctx.accounts.signer.to_account_info(),
            },
        ),
        amount,
    )?;

    let bridging_request = &mut ctx.accounts.bridging_request;
    bridging_request.sender = ctx.accounts.signer.key();
    bridging_request.amount = amount;
    bridging_request.receiver = receiver;
    bridging_request.destination_chain = destination_chain;

    msg!(
        "opened bridging request for {} to chain {}",
        amount,
        destination_chain
    );

    emit!(BridgingRequestOpened {
        sender: bridging_request.sender,
        bridging_request: bridging_request.key(),
        amount,
        receiver,
        destination_chain,
    });

    Ok(())
}
