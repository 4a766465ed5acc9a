use anchor_lang::prelude::*;

use crate::constants::{MAX_VALIDATORS, MIN_VALIDATORS, VALIDATOR_SET_SEED};
use crate::errors::BridgeError;
use crate::events::ValidatorSetInitialized;
use crate::state::ValidatorSet;

#[derive(Accounts)]
#[instruction(signers: Vec<Pubkey>)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + ValidatorSet::space(signers.len()),
        seeds = [VALIDATOR_SET_SEED],
        bump
    )]
    pub validator_set: Account<'info, ValidatorSet>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Create the singleton `ValidatorSet`. Open to any caller: the runtime's
/// account-already-initialized failure is what prevents re-initialization,
/// not an authority check here.
pub fn handler(ctx: Context<Initialize>, signers: Vec<Pubkey>) -> Result<()> {
    require!(signers.len() >= MIN_VALIDATORS, BridgeError::MinValidatorsNotMet);
    require!(signers.len() <= MAX_VALIDATORS, BridgeError::MaxValidatorsExceeded);
    require!(ValidatorSet::is_unique(&signers), BridgeError::ValidatorsNotUnique);

    let validator_set = &mut ctx.accounts.validator_set;
    validator_set.threshold = ValidatorSet::compute_threshold(signers.len());
    validator_set.bump = ctx.bumps.validator_set;
    validator_set.signers = signers;

    msg!(
        "validator set initialized with {} signers, threshold {}",
        validator_set.signers.len(),
        validator_set.threshold
    );

    emit!(ValidatorSetInitialized {
        validator_set: validator_set.key(),
        signers: validator_set.signers.clone(),
        threshold: validator_set.threshold,
    });

    Ok(())
}
