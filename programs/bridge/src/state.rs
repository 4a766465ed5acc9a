use anchor_lang::prelude::*;

use crate::constants::MAX_VALIDATORS;

/// Durable record of the signers authorized to co-sign privileged bridge
/// operations. Singleton account, derived from `VALIDATOR_SET_SEED`.
#[account]
pub struct ValidatorSet {
    /// Ordered, pairwise-distinct signer public keys. Length always in
    /// `[MIN_VALIDATORS, MAX_VALIDATORS]`.
    pub signers: Vec<Pubkey>,
    /// `ceil(2 * signers.len() / 3)`, recomputed on every mutation.
    pub threshold: u8,
    /// Canonical bump for the PDA, stored so CPI signing never has to
    /// re-derive it.
    pub bump: u8,
}

impl ValidatorSet {
    /// Borsh-serialized payload size (excluding the 8-byte Anchor
    /// discriminator) for a set of `n` signers: a 4-byte vec length prefix,
    /// `n` 32-byte pubkeys, a threshold byte, and a bump byte.
    pub fn space(n: usize) -> usize {
        4 + 32 * n + 1 + 1
    }

    /// `space()` sized for the largest set the account will ever hold,
    /// useful when an exact `n` isn't yet known.
    pub const MAX_SPACE: usize = 4 + 32 * MAX_VALIDATORS + 1 + 1;

    /// `ceil(2n/3)`, computed with integer arithmetic.
    pub fn compute_threshold(n: usize) -> u8 {
        ((2 * n + 2) / 3) as u8
    }

    /// `true` iff every entry in `candidates` is pairwise distinct.
    pub fn is_unique(candidates: &[Pubkey]) -> bool {
        for i in 0..candidates.len() {
            for j in (i + 1)..candidates.len() {
                if candidates[i] == candidates[j] {
                    return false;
                }
            }
        }
        true
    }
}

/// A single sender's live outbound bridging intent. Derived from
/// `(BRIDGING_REQUEST_SEED, sender_pubkey)`; at most one exists per sender.
#[account]
pub struct BridgingRequest {
    /// The account that opened the request and whose tokens were escrowed.
    pub sender: Pubkey,
    /// Token units escrowed (burned) when the request was opened.
    pub amount: u64,
    /// Fixed-width foreign-chain recipient address.
    pub receiver: [u8; 32],
    /// Foreign chain identifier the tokens are bound for.
    pub destination_chain: u32,
}

impl BridgingRequest {
    /// Borsh-serialized payload size (excluding the 8-byte discriminator):
    /// sender pubkey, amount, receiver, destination_chain.
    pub const SPACE: usize = 32 + 8 + 32 + 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_of_ten_is_seven() {
        assert_eq!(ValidatorSet::compute_threshold(10), 7);
    }

    #[test]
    fn threshold_is_ceil_not_floor_or_majority() {
        assert_eq!(ValidatorSet::compute_threshold(4), 3);
        assert_eq!(ValidatorSet::compute_threshold(5), 4);
        assert_eq!(ValidatorSet::compute_threshold(6), 4);
        assert_eq!(ValidatorSet::compute_threshold(19), 13);
    }

    #[test]
    fn threshold_never_exceeds_set_size() {
        for n in 0..=MAX_VALIDATORS {
            assert!(ValidatorSet::compute_threshold(n) as usize <= n.max(1));
        }
    }

    #[test]
    fn uniqueness_detects_duplicates() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        assert!(ValidatorSet::is_unique(&[a, b]));
        assert!(!ValidatorSet::is_unique(&[a, b, a]));
    }

    #[test]
    fn uniqueness_holds_for_empty_and_singleton() {
        assert!(ValidatorSet::is_unique(&[]));
        assert!(ValidatorSet::is_unique(&[Pubkey::new_unique()]));
    }
}
