use crate::{validate_shape, ProofError, ProofShape};
use alloy::primitives::B256;
use serde::{Deserialize, Serialize};

/// A proof that a leaf is part of an unhinged root.
///
/// The node array is laid out as
/// `[pre-hash?] ++ [subtree proof nodes] ++ [following hashes]`, where the
/// pre-hash and the subtree proof are mutually exclusive. `counts` is the
/// packed [`ProofShape`] describing that layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnhingedProof {
    /// The proof nodes.
    pub nodes: Vec<B256>,
    /// The packed descriptor.
    pub counts: B256,
}

impl UnhingedProof {
    /// Create a proof from raw parts. The shape is not checked until
    /// [`Self::validate`] is called.
    pub const fn new(nodes: Vec<B256>, counts: B256) -> Self {
        Self { nodes, counts }
    }

    /// The empty proof. The root it produces is the leaf itself.
    pub const fn empty() -> Self {
        Self { nodes: Vec::new(), counts: B256::ZERO }
    }

    /// Build a proof from a balanced subtree proof and the roots of the
    /// chains that follow this one.
    pub fn balanced(subtree: Vec<B256>, following: Vec<B256>) -> Result<Self, ProofError> {
        let shape = ProofShape::new(subtree.len() as u128, following.len() as u128, false)?;
        let mut nodes = subtree;
        nodes.extend(following);
        Ok(Self { nodes, counts: shape.encode() })
    }

    /// Build a proof from a pre-hash covering every earlier chain and the
    /// roots of the chains that follow this one.
    ///
    /// Only usable when this chain's slice is a single leaf, since a pre-hash
    /// replaces the balanced subtree proof.
    pub fn with_pre_hash(pre_hash: B256, following: Vec<B256>) -> Result<Self, ProofError> {
        if pre_hash.is_zero() {
            return Err(ProofError::ZeroPreHash);
        }
        let shape = ProofShape::new(0, following.len() as u128, true)?;
        let mut nodes = Vec::with_capacity(following.len() + 1);
        nodes.push(pre_hash);
        nodes.extend(following);
        Ok(Self { nodes, counts: shape.encode() })
    }

    /// Decode the descriptor without checking it against the nodes.
    pub fn shape(&self) -> ProofShape {
        ProofShape::decode(self.counts)
    }

    /// Check the node array against the descriptor.
    pub fn validate(&self) -> Result<ProofShape, ProofError> {
        validate_shape(self)
    }

    /// True if the proof carries no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
