use alloy::primitives::{keccak256, B256};

/// Hash two nodes in ascending numeric order.
///
/// Sorting makes the result independent of which side each node sits on, so
/// proofs carry no direction bits. Off-chain tree builders must apply the same
/// rule or their proofs will not verify.
pub fn hash_sorted_pair(a: B256, b: B256) -> B256 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(lo.as_slice());
    buf[32..].copy_from_slice(hi.as_slice());
    keccak256(buf)
}

/// Compute the root of a balanced Merkle tree from a leaf and its sibling
/// path, hashing each pair in sorted order.
pub fn compute_balanced_root(leaf: B256, proof: &[B256]) -> B256 {
    proof.iter().fold(leaf, |acc, node| hash_sorted_pair(acc, *node))
}
