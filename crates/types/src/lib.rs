//! Permit3 types used by clients and verifiers.
//!
//! - [`bindings`]: the EIP-712 structures that are signed, and the events a
//!   verifier emits.
//! - [`Allowance`]: the per (owner, token, spender) allowance record.
//! - Signing: [`UnsignedPermit`] and [`UnsignedCancel`] build the unhinged
//!   root over every participating chain, sign it once, and split the result
//!   into one [`SignedPermit`] or [`SignedCancel`] per chain.

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

mod allowance;
pub use allowance::Allowance;

pub mod bindings;
pub use bindings::{
    ChainPermits, NoncesToInvalidate, Permit3, SpendTransferPermit, UnhingedCancel,
    UnhingedPermit,
};

mod domain;
pub use domain::{domain_separator, permit3_domain, signing_digest};

mod signing;
pub use signing::{
    SignedCancel, SignedPermit, SigningError, UnsignedCancel, UnsignedPermit,
    DEFAULT_DEADLINE_OFFSET,
};
