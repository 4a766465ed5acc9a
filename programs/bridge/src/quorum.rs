use anchor_lang::prelude::*;

use crate::errors::BridgeError;
use crate::state::ValidatorSet;

/// Verify that the transaction's trailing accounts (Anchor's
/// `ctx.remaining_accounts`) constitute a valid quorum over `validator_set`.
///
/// Checks run in a fixed order, so callers can rely on `NotEnoughSigners`
/// being reported before any per-signer validation:
/// 1. `remaining_accounts.len() >= validator_set.threshold`.
/// 2. Each co-signer is a current validator and actually signed the tx.
/// 3. All co-signers are pairwise distinct; duplicates are rejected
///    outright rather than counted twice toward quorum.
pub fn verify_quorum(validator_set: &ValidatorSet, remaining_accounts: &[AccountInfo]) -> Result<()> {
    let supplied = remaining_accounts.len();
    require!(
        supplied >= validator_set.threshold as usize,
        BridgeError::NotEnoughSigners
    );

    let mut seen: Vec<Pubkey> = Vec::with_capacity(supplied);
    for co_signer in remaining_accounts {
        require!(co_signer.is_signer, BridgeError::InvalidSigner);
        require!(
            validator_set.signers.contains(co_signer.key),
            BridgeError::InvalidSigner
        );
        require!(!seen.contains(co_signer.key), BridgeError::InvalidSigner);
        seen.push(*co_signer.key);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::solana_program::account_info::AccountInfo;
    use anchor_lang::solana_program::clock::Epoch;

    /// Owns the backing storage `AccountInfo` borrows from, so each test can
    /// assemble the exact co-signer slice it needs without self-reference.
    struct Backing {
        keys: Vec<Pubkey>,
        lamports: Vec<u64>,
        data: Vec<Vec<u8>>,
        owner: Pubkey,
    }

    impl Backing {
        fn new(n: usize) -> Self {
            Self {
                keys: (0..n).map(|_| Pubkey::new_unique()).collect(),
                lamports: vec![0; n],
                data: vec![Vec::new(); n],
                owner: Pubkey::new_unique(),
            }
        }

        /// One `AccountInfo` per key, in order, each flagged a signer iff
        /// its index is in `signer_idxs`. Uses `iter_mut()` over the whole
        /// backing arrays so the disjoint mutable borrows are safe even
        /// though every `AccountInfo` outlives this call.
        fn all_infos(&mut self, signer_idxs: &[usize]) -> Vec<AccountInfo> {
            let signer_set: std::collections::HashSet<usize> = signer_idxs.iter().copied().collect();
            let owner = &self.owner;
            let mut out = Vec::with_capacity(self.keys.len());
            let mut i = 0;
            for ((key, lamports), data) in self
                .keys
                .iter()
                .zip(self.lamports.iter_mut())
                .zip(self.data.iter_mut())
            {
                out.push(AccountInfo::new(
                    key,
                    signer_set.contains(&i),
                    false,
                    lamports,
                    data.as_mut_slice(),
                    owner,
                    false,
                    Epoch::default(),
                ));
                i += 1;
            }
            out
        }
    }

    fn validator_set_of(keys: &[Pubkey], threshold: u8) -> ValidatorSet {
        ValidatorSet {
            signers: keys.to_vec(),
            threshold,
            bump: 255,
        }
    }

    fn assert_err_contains(result: Result<()>, name: &str) {
        let err = result.unwrap_err();
        assert!(
            format!("{:?}", err).contains(name),
            "expected error containing {name}, got {err:?}"
        );
    }

    #[test]
    fn accepts_exact_threshold_of_member_signers() {
        let mut backing = Backing::new(10);
        let vs = validator_set_of(&backing.keys, 7);
        let infos = backing.all_infos(&[0, 1, 2, 3, 4, 5, 6])[..7].to_vec();
        assert!(verify_quorum(&vs, &infos).is_ok());
    }

    #[test]
    fn rejects_below_threshold_before_checking_membership() {
        let mut backing = Backing::new(10);
        let vs = validator_set_of(&backing.keys, 7);
        // Only 2 co-signers supplied, both valid members: still fails with
        // NotEnoughSigners, not InvalidSigner.
        let infos = backing.all_infos(&[0, 1])[..2].to_vec();
        assert_err_contains(verify_quorum(&vs, &infos), "NotEnoughSigners");
    }

    #[test]
    fn rejects_non_member_cosigner() {
        let mut backing = Backing::new(10);
        let vs = validator_set_of(&backing.keys[..9], 7); // index 9 is a stranger
        let infos = backing.all_infos(&[0, 1, 2, 3, 4, 5, 9])[..10].to_vec();
        let cosigners = vec![
            infos[0].clone(),
            infos[1].clone(),
            infos[2].clone(),
            infos[3].clone(),
            infos[4].clone(),
            infos[5].clone(),
            infos[9].clone(),
        ];
        assert_err_contains(verify_quorum(&vs, &cosigners), "InvalidSigner");
    }

    #[test]
    fn rejects_cosigner_account_present_but_not_flagged_as_signer() {
        let mut backing = Backing::new(10);
        let vs = validator_set_of(&backing.keys, 7);
        // 7 accounts supplied (meets the raw count), but index 6 never signed.
        let infos = backing.all_infos(&[0, 1, 2, 3, 4, 5])[..7].to_vec();
        assert_err_contains(verify_quorum(&vs, &infos), "InvalidSigner");
    }

    #[test]
    fn rejects_duplicate_cosigner() {
        let mut backing = Backing::new(10);
        let vs = validator_set_of(&backing.keys, 7);
        let infos = backing.all_infos(&[0, 1, 2, 3, 4, 5, 6])[..7].to_vec();
        // Validator 0 listed twice instead of validator 6 once.
        let cosigners = vec![
            infos[0].clone(),
            infos[1].clone(),
            infos[2].clone(),
            infos[3].clone(),
            infos[4].clone(),
            infos[5].clone(),
            infos[0].clone(),
        ];
        assert_err_contains(verify_quorum(&vs, &cosigners), "InvalidSigner");
    }
}
