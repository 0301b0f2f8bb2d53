//! Permit3 protocol constants.
//!
//! This crate contains the constants shared by every Permit3 verifier,
//! including the EIP-712 domain parameters, the allowance sentinels, and the
//! per-chain [`VerifierConfig`].
//!

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
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
pub use config::{env_utils, ConfigError, VerifierConfig};

mod protocol;
pub use protocol::{
    CROSS_CHAIN_DOMAIN_ID, LOCKED_EXPIRATION, MAX_ALLOWANCE, NO_EXPIRATION, PERMIT3_NAME,
    PERMIT3_VERSION, TRANSFER_MODE,
};

/// Test utilities.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
