use anchor_lang::prelude::*;

/// Validation-tier errors raised by the core itself. Runtime-surface errors
/// (account-already-initialized, signature verification, rent shortfall) and
/// token-layer CPI failures are never wrapped here; they bubble up through
/// `?` unchanged, so callers can tell the three tiers apart.
#[error_code]
pub enum BridgeError {
    #[msg("validator set must contain at least MIN_VALIDATORS signers")]
    MinValidatorsNotMet,
    #[msg("validator set exceeds MAX_VALIDATORS signers")]
    MaxValidatorsExceeded,
    #[msg("validator set contains a duplicate signer")]
    ValidatorsNotUnique,
    #[msg("fewer co-signers were supplied than the quorum threshold requires")]
    NotEnoughSigners,
    #[msg("a supplied co-signer is not a current validator, did not sign, or is a duplicate")]
    InvalidSigner,
    #[msg("sender's associated token account balance is insufficient")]
    InsufficientFunds,
}
