use crate::{compute_balanced_root, validate_shape, ProofError, UnhingedProof};
use alloy::primitives::{keccak256, B256};

/// Link two hashes in order. Unlike [`crate::hash_sorted_pair`] the operands
/// are not sorted, which fixes the chain order in the root.
pub fn hash_link(acc: B256, next: B256) -> B256 {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(acc.as_slice());
    buf[32..].copy_from_slice(next.as_slice());
    keccak256(buf)
}

/// Compute the unhinged root a leaf and proof commit to.
///
/// The proof shape is validated first. The running hash is seeded either by
/// linking the pre-hash with the leaf, or by the leaf's balanced subtree
/// root. Each following hash is then linked onto it in array order.
pub fn compute_root(leaf: B256, proof: &UnhingedProof) -> Result<B256, ProofError> {
    let shape = validate_shape(proof)?;

    // Validation matched the counts against `nodes.len()`, so they fit.
    let subtree = shape.subtree_proof_count() as usize;

    let (seed, following) = if shape.has_pre_hash() {
        (hash_link(proof.nodes[0], leaf), &proof.nodes[1..])
    } else {
        let (path, rest) = proof.nodes.split_at(subtree);
        (compute_balanced_root(leaf, path), rest)
    };

    Ok(following.iter().fold(seed, |acc, next| hash_link(acc, *next)))
}

/// Check that a leaf and proof commit to `expected`.
pub fn verify(leaf: B256, proof: &UnhingedProof, expected: B256) -> Result<bool, ProofError> {
    compute_root(leaf, proof).map(|root| root == expected)
}

/// Build the unhinged root over per-chain subtree roots, given in canonical
/// chain order. Returns `None` if no roots are given.
pub fn create_unhinged_root<I>(subtree_roots: I) -> Option<B256>
where
    I: IntoIterator<Item = B256>,
{
    subtree_roots.into_iter().reduce(hash_link)
}
