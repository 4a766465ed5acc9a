use anchor_lang::prelude::*;

use crate::constants::{MAX_VALIDATORS, MIN_VALIDATORS, VALIDATOR_SET_SEED};
use crate::errors::BridgeError;
use crate::events::ValidatorSetRotated;
use crate::quorum::verify_quorum;
use crate::state::ValidatorSet;

#[derive(Accounts)]
#[instruction(new_set: Vec<Pubkey>)]
pub struct ValidatorSetChange<'info> {
    #[account(
        mut,
        seeds = [VALIDATOR_SET_SEED],
        bump = validator_set.bump,
        realloc = 8 + ValidatorSet::space(new_set.len()),
        realloc::payer = signer,
        realloc::zero = false,
    )]
    pub validator_set: Account<'info, ValidatorSet>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Quorum-gated replacement of the validator set. Quorum is checked against
/// the *current* set before anything is overwritten, so the transaction
/// that rotates membership is itself validated against the old set. The
/// account is resized to fit `new_set`; Anchor's `realloc` constraint
/// refunds excess rent to `signer` on shrink and charges it on growth.
pub fn handler(ctx: Context<ValidatorSetChange>, new_set: Vec<Pubkey>) -> Result<()> {
    verify_quorum(&ctx.accounts.validator_set, ctx.remaining_accounts)?;

    require!(new_set.len() >= MIN_VALIDATORS, BridgeError::MinValidatorsNotMet);
    require!(new_set.len() <= MAX_VALIDATORS, BridgeError::MaxValidatorsExceeded);
    require!(ValidatorSet::is_unique(&new_set), BridgeError::ValidatorsNotUnique);

    let validator_set = &mut ctx.accounts.validator_set;
    validator_set.threshold = ValidatorSet::compute_threshold(new_set.len());
    validator_set.signers = new_set;

    msg!(
        "validator set rotated to {} signers, threshold {}",
        validator_set.signers.len(),
        validator_set.threshold
    );

    emit!(ValidatorSetRotated {
        validator_set: validator_set.key(),
        signers: validator_set.signers.clone(),
        threshold: validator_set.threshold,
    });

    Ok(())
}
