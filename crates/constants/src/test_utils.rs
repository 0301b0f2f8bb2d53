use crate::VerifierConfig;
use alloy::primitives::Address;

/// Test chain id for the first chain.
pub const TEST_CHAIN_A_ID: u64 = 1;

/// Test chain id for the second chain.
pub const TEST_CHAIN_B_ID: u64 = 10;

/// Test chain id for the third chain.
pub const TEST_CHAIN_C_ID: u64 = 8453;

/// Test address for the Permit3 contract. Identical on every chain.
pub const TEST_PERMIT3_ADDRESS: Address = Address::repeat_byte(0x83);

/// Test address for a fungible token.
pub const USDC: Address = Address::repeat_byte(0x89);

/// Test address for a second fungible token.
pub const WETH: Address = Address::repeat_byte(0x8a);

/// Test address for a spender contract.
pub const ROUTER: Address = Address::repeat_byte(0x8b);

/// Test address for a second spender.
pub const VAULT: Address = Address::repeat_byte(0x8c);

/// Verifier config for chain A.
pub const TEST_CONFIG_A: VerifierConfig = VerifierConfig::new(TEST_CHAIN_A_ID, TEST_PERMIT3_ADDRESS);

/// Verifier config for chain B.
pub const TEST_CONFIG_B: VerifierConfig = VerifierConfig::new(TEST_CHAIN_B_ID, TEST_PERMIT3_ADDRESS);

/// Verifier config for chain C.
pub const TEST_CONFIG_C: VerifierConfig = VerifierConfig::new(TEST_CHAIN_C_ID, TEST_PERMIT3_ADDRESS);
