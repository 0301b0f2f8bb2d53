//! Helpers for loading configuration values from the environment.

use crate::ConfigError;
use alloy::primitives::Address;
use std::env;

/// Load a variable from the environment, failing if it is unset.
pub fn load_string(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::missing(key))
}

/// Load a decimal `u64` from the environment.
pub fn load_u64(key: &str) -> Result<u64, ConfigError> {
    let val = load_string(key)?;
    val.parse::<u64>().map_err(Into::into)
}

/// Load a hex address from the environment.
pub fn load_address(key: &str) -> Result<Address, ConfigError> {
    load_string(key)?.parse().map_err(Into::into)
}
