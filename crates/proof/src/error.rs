/// An error that can occur when decoding or validating an
/// [`UnhingedProof`](crate::UnhingedProof).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProofError {
    /// A count does not fit in its 120-bit field.
    #[error("count {count} exceeds the 120-bit field capacity")]
    CountOverflow {
        /// The offending count.
        count: u128,
    },
    /// The node array length does not match the declared shape.
    #[error("proof declares {expected} nodes but carries {actual}")]
    NodeCountMismatch {
        /// Node count implied by the descriptor.
        expected: u128,
        /// Node count actually supplied.
        actual: usize,
    },
    /// The pre-hash flag is set but the first node is zero.
    #[error("pre-hash flag set with a zero pre-hash")]
    ZeroPreHash,
    /// The proof carries both a pre-hash and balanced subtree nodes.
    #[error("a proof may carry a pre-hash or subtree nodes, not both")]
    PreHashWithSubtree,
    /// Reserved descriptor bits are not zero.
    #[error("reserved descriptor bits are set")]
    ReservedBits,
}
