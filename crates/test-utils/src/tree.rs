//! A reference Merkle tree using sorted-pair hashing.
//!
//! Levels are built bottom up. An unpaired last node is promoted to the next
//! level unchanged, so it contributes no sibling to the proofs below it.

use alloy::primitives::B256;
use permit3_proof::hash_sorted_pair;

/// A fully materialized Merkle tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    levels: Vec<Vec<B256>>,
}

impl MerkleTree {
    /// Build a tree over `leaves`. Panics if there are none.
    pub fn new(leaves: Vec<B256>) -> Self {
        assert!(!leaves.is_empty(), "tree needs at least one leaf");
        let mut levels = vec![leaves];
        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let next = level
                .chunks(2)
                .map(|pair| match pair {
                    [a, b] => hash_sorted_pair(*a, *b),
                    _ => pair[0],
                })
                .collect();
            levels.push(next);
        }
        Self { levels }
    }

    /// The leaves, in insertion order.
    pub fn leaves(&self) -> &[B256] {
        &self.levels[0]
    }

    /// The root.
    pub fn root(&self) -> B256 {
        self.levels[self.levels.len() - 1][0]
    }

    /// The sibling path of the leaf at `index`, bottom up.
    pub fn proof(&self, index: usize) -> Vec<B256> {
        let mut index = index;
        let mut proof = Vec::new();
        for level in &self.levels[..self.levels.len() - 1] {
            if let Some(sibling) = level.get(index ^ 1) {
                proof.push(*sibling);
            }
            index /= 2;
        }
        proof
    }
}
