mod error;
pub use error::ConfigError;

pub mod env_utils;

use alloy::primitives::Address;

/// Environment variable holding the local chain id.
const CHAIN_ID_ENV: &str = "PERMIT3_CHAIN_ID";

/// Environment variable holding the Permit3 contract address.
const VERIFYING_CONTRACT_ENV: &str = "PERMIT3_VERIFYING_CONTRACT";

/// Configuration of a single chain's verifier.
///
/// The verifying contract is deployed at the same address on every chain, so
/// it is part of the shared EIP-712 domain. The chain id is local, and is
/// checked against the `chainId` of each submitted leaf.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifierConfig {
    /// The chain this verifier runs on.
    chain_id: u64,
    /// Address of the Permit3 contract.
    verifying_contract: Address,
}

impl VerifierConfig {
    /// Create a new verifier configuration.
    pub const fn new(chain_id: u64, verifying_contract: Address) -> Self {
        Self { chain_id, verifying_contract }
    }

    /// Load the configuration from the `PERMIT3_CHAIN_ID` and
    /// `PERMIT3_VERIFYING_CONTRACT` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let chain_id = env_utils::load_u64(CHAIN_ID_ENV)?;
        let verifying_contract = env_utils::load_address(VERIFYING_CONTRACT_ENV)?;
        Self::new(chain_id, verifying_contract).validated()
    }

    /// Load the configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<Self>(json)?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.verifying_contract.is_zero() {
            return Err(ConfigError::ZeroVerifyingContract);
        }
        Ok(self)
    }

    /// Get the local chain id.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the Permit3 contract address.
    pub const fn verifying_contract(&self) -> Address {
        self.verifying_contract
    }

    /// Get a copy of this configuration for another chain. The verifying
    /// contract is shared.
    pub const fn for_chain(self, chain_id: u64) -> Self {
        Self { chain_id, ..self }
    }
}
