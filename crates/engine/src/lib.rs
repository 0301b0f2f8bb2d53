//! Permit3 verifier.
//!
//! The [`PermitEngine`] runs one chain's side of the protocol. A
//! [`SignedPermit`](permit3_types::SignedPermit) is accepted when
//!
//! - its deadline has not passed,
//! - its leaf and proof fold into an unhinged root the owner signed,
//! - its salt has not been used,
//! - none of the allowances it updates is locked down,
//!
//! in which case every transfer and allowance update in it is applied, or
//! none are.
//!
//! State lives in an injected store implementing [`NonceStore`] and
//! [`AllowanceLedger`]; [`MemoryStore`] is the in-memory implementation.
//! Token movements go through a [`TokenTransfers`] implementation, and
//! signature recovery through a [`SignatureAuthority`].

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

mod authority;
pub use authority::{Ecrecover, SignatureAuthority};

mod engine;
pub use engine::PermitEngine;

mod error;
pub use error::{AllowanceError, PermitError};

mod store;
pub use store::{spend, AllowanceLedger, MemoryStore, NonceStore};

mod transfer;
pub use transfer::{TokenTransfer, TokenTransfers};

mod verifier;
pub use verifier::ChainVerifier;
