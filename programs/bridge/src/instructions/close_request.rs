use anchor_lang::prelude::*;

use crate::constants::{BRIDGING_REQUEST_SEED, VALIDATOR_SET_SEED};
use crate::events::BridgingRequestClosed;
use crate::quorum::verify_quorum;
use crate::state::{BridgingRequest, ValidatorSet};

#[derive(Accounts)]
pub struct CloseRequest<'info> {
    /// Needed to run the quorum verifier against this operation (see
    /// `DESIGN.md` for why it's required here).
    #[account(
        seeds = [VALIDATOR_SET_SEED],
        bump = validator_set.bump,
    )]
    pub validator_set: Account<'info, ValidatorSet>,

    /// CHECK: rent refundee; constrained to match the request's own sender.
    #[account(mut, address = bridging_request.sender)]
    pub signer: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [BRIDGING_REQUEST_SEED, signer.key().as_ref()],
        bump,
        close = signer,
    )]
    pub bridging_request: Account<'info, BridgingRequest>,
}

/// Quorum-gated finalization/cancellation of an outbound request: deallocate
/// the `BridgingRequest` PDA and refund its rent to the original sender.
/// Tokens were already burned when the request was opened (see
/// `bridge_request`), so no further token movement happens here.
pub fn handler(ctx: Context<CloseRequest>) -> Result<()> {
    verify_quorum(&ctx.accounts.validator_set, ctx.remaining_accounts)?;

    msg!("closing bridging request for {}", ctx.accounts.signer.key());

    emit!(BridgingRequestClosed {
        sender: ctx.accounts.signer.key(),
        bridging_request: ctx.accounts.bridging_request.key(),
    });

    Ok(())
}
