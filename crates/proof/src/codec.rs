use crate::{ProofError, UnhingedProof};
use alloy::primitives::{B256, U256};

/// Largest value either count field can hold, `2^120 - 1`.
pub const MAX_COUNT: u128 = (1 << 120) - 1;

const SUBTREE_SHIFT: usize = 136;
const FOLLOWING_SHIFT: usize = 16;

/// Bits 1 through 15 of the descriptor word.
const RESERVED_MASK: U256 = U256::from_limbs([0xfffe, 0, 0, 0]);

/// The decoded `counts` descriptor of an [`UnhingedProof`].
///
/// Word layout, most significant bit first:
///
/// ```text
/// | subtree proof count (120) | following hashes count (120) | reserved (15) | pre-hash (1) |
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ProofShape {
    subtree_proof_count: u128,
    following_hashes_count: u128,
    has_pre_hash: bool,
}

impl ProofShape {
    /// Create a shape, checking field capacity and that a pre-hash is not
    /// combined with subtree nodes.
    pub const fn new(
        subtree_proof_count: u128,
        following_hashes_count: u128,
        has_pre_hash: bool,
    ) -> Result<Self, ProofError> {
        if subtree_proof_count > MAX_COUNT {
            return Err(ProofError::CountOverflow { count: subtree_proof_count });
        }
        if following_hashes_count > MAX_COUNT {
            return Err(ProofError::CountOverflow { count: following_hashes_count });
        }
        if has_pre_hash && subtree_proof_count > 0 {
            return Err(ProofError::PreHashWithSubtree);
        }
        Ok(Self { subtree_proof_count, following_hashes_count, has_pre_hash })
    }

    /// Number of balanced subtree proof nodes.
    pub const fn subtree_proof_count(&self) -> u128 {
        self.subtree_proof_count
    }

    /// Number of chain-link nodes following the subtree proof.
    pub const fn following_hashes_count(&self) -> u128 {
        self.following_hashes_count
    }

    /// True if the first node is a pre-hash.
    pub const fn has_pre_hash(&self) -> bool {
        self.has_pre_hash
    }

    /// Number of nodes a proof of this shape carries.
    pub const fn node_count(&self) -> u128 {
        // Both counts are at most 2^120 - 1, the sum cannot overflow.
        self.subtree_proof_count + self.following_hashes_count + self.has_pre_hash as u128
    }

    /// Pack the shape into its descriptor word.
    pub fn encode(&self) -> B256 {
        let subtree = U256::from(self.subtree_proof_count & MAX_COUNT) << SUBTREE_SHIFT;
        let following = U256::from(self.following_hashes_count & MAX_COUNT) << FOLLOWING_SHIFT;
        let flag = U256::from(self.has_pre_hash as u8);
        B256::from(subtree | following | flag)
    }

    /// Unpack a descriptor word. Reserved bits are ignored, see
    /// [`validate_shape`].
    pub fn decode(counts: B256) -> Self {
        let word = U256::from_be_bytes(counts.0);
        let mask = U256::from(MAX_COUNT);
        Self {
            subtree_proof_count: ((word >> SUBTREE_SHIFT) & mask).saturating_to(),
            following_hashes_count: ((word >> FOLLOWING_SHIFT) & mask).saturating_to(),
            has_pre_hash: word.bit(0),
        }
    }
}

impl From<ProofShape> for B256 {
    fn from(shape: ProofShape) -> Self {
        shape.encode()
    }
}

impl From<B256> for ProofShape {
    fn from(counts: B256) -> Self {
        Self::decode(counts)
    }
}

/// Check that a proof's node array matches its declared shape, returning the
/// decoded shape.
pub fn validate_shape(proof: &UnhingedProof) -> Result<ProofShape, ProofError> {
    let word = U256::from_be_bytes(proof.counts.0);
    if !(word & RESERVED_MASK).is_zero() {
        return Err(ProofError::ReservedBits);
    }

    let shape = ProofShape::decode(proof.counts);
    if shape.has_pre_hash && shape.subtree_proof_count > 0 {
        return Err(ProofError::PreHashWithSubtree);
    }

    let expected = shape.node_count();
    if expected != proof.nodes.len() as u128 {
        return Err(ProofError::NodeCountMismatch { expected, actual: proof.nodes.len() });
    }

    if shape.has_pre_hash && proof.nodes[0].is_zero() {
        return Err(ProofError::ZeroPreHash);
    }

    Ok(shape)
}
