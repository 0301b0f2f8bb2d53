//! Unhinged Merkle proofs.
//!
//! An unhinged root commits to the operations of many chains with a single
//! hash. Each chain's operations form a balanced Merkle tree, hashed with
//! sorted pairs so that no path-direction bits are needed. The per-chain
//! roots are then linked in a canonical chain order:
//!
//! ```text
//! root = H(...H(H(root_0 || root_1) || root_2)... || root_n)
//! ```
//!
//! A chain proves its slice with its own balanced subtree proof followed by
//! the roots of the later chains, or, to keep proofs short, with a single
//! pre-hash standing in for every earlier chain.
//!
//! ## Example
//!
//! ```
//! # use alloy::primitives::B256;
//! # use permit3_proof::{compute_root, create_unhinged_root, UnhingedProof};
//! # fn main() -> Result<(), permit3_proof::ProofError> {
//! let chain_a = B256::repeat_byte(0xaa);
//! let chain_b = B256::repeat_byte(0xbb);
//! let root = create_unhinged_root([chain_a, chain_b]).unwrap();
//!
//! // Chain B only needs chain A's root as its pre-hash.
//! let proof = UnhingedProof::with_pre_hash(chain_a, vec![])?;
//! assert_eq!(compute_root(chain_b, &proof)?, root);
//! # Ok(())
//! # }
//! ```

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod balanced;
pub use balanced::{compute_balanced_root, hash_sorted_pair};

mod codec;
pub use codec::{validate_shape, ProofShape, MAX_COUNT};

mod error;
pub use error::ProofError;

mod proof;
pub use proof::UnhingedProof;

mod unhinged;
pub use unhinged::{compute_root, create_unhinged_root, hash_link, verify};
