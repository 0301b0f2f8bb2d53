use alloy::primitives::aliases::U160;

/// EIP-712 domain name.
pub const PERMIT3_NAME: &str = "Permit3";

/// EIP-712 domain version.
pub const PERMIT3_VERSION: &str = "1";

/// Chain id placed in the EIP-712 domain of every verifier.
///
/// The domain chain id is identical on every chain, so that one signature
/// over an unhinged root verifies everywhere. Each chain's slice is bound to
/// that chain by the `chainId` inside its leaf.
pub const CROSS_CHAIN_DOMAIN_ID: u64 = 1;

/// `transferOrExpiration` value requesting an immediate transfer.
pub const TRANSFER_MODE: u64 = 1;

/// Allowance expiration meaning "never expires".
pub const NO_EXPIRATION: u64 = 0;

/// Allowance expiration marking the entry as locked down. Never a reachable
/// block timestamp.
pub const LOCKED_EXPIRATION: u64 = 2;

/// Allowance amount treated as infinite. Spending against it never
/// decrements.
pub const MAX_ALLOWANCE: U160 = U160::MAX;
