mod cancel;
pub use cancel::{SignedCancel, UnsignedCancel};

mod error;
pub use error::SigningError;

mod permit;
pub use permit::{SignedPermit, UnsignedPermit};

use alloy::primitives::{B256, U256};
use chrono::Utc;
use permit3_proof::{create_unhinged_root, ProofError, UnhingedProof};

/// Seconds after signing at which a permit expires, unless a deadline is
/// set explicitly.
pub const DEFAULT_DEADLINE_OFFSET: u64 = 300;

/// Build one proof per leaf, where `leaves` holds one leaf per chain in
/// canonical chain order.
///
/// The first chain links every later leaf onto its own. Every other chain
/// uses the root of the chains before it as a pre-hash.
pub(crate) fn chain_proofs(leaves: &[B256]) -> Result<Vec<UnhingedProof>, ProofError> {
    (0..leaves.len())
        .map(|i| {
            let following = leaves[i + 1..].to_vec();
            match create_unhinged_root(leaves[..i].iter().copied()) {
                Some(pre_hash) => UnhingedProof::with_pre_hash(pre_hash, following),
                None => UnhingedProof::balanced(vec![], following),
            }
        })
        .collect()
}

/// Default salt: the current time in microseconds.
pub(crate) fn default_salt() -> B256 {
    B256::from(U256::from(Utc::now().timestamp_micros() as u64))
}

/// Default deadline: now plus [`DEFAULT_DEADLINE_OFFSET`].
pub(crate) fn default_deadline() -> u64 {
    Utc::now().timestamp() as u64 + DEFAULT_DEADLINE_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;
    use permit3_proof::compute_root;

    #[test]
    fn every_chain_reaches_the_root() {
        let leaves: Vec<B256> = (1..=4).map(B256::repeat_byte).collect();
        let root = create_unhinged_root(leaves.iter().copied()).unwrap();
        let proofs = chain_proofs(&leaves).unwrap();

        assert_eq!(proofs.len(), 4);
        assert!(!proofs[0].shape().has_pre_hash());
        for (leaf, proof) in leaves.iter().zip(&proofs) {
            assert_eq!(compute_root(*leaf, proof).unwrap(), root);
        }
    }

    #[test]
    fn single_chain_proof_is_empty() {
        let proofs = chain_proofs(&[B256::repeat_byte(1)]).unwrap();
        assert_eq!(proofs, vec![UnhingedProof::empty()]);
    }
}
