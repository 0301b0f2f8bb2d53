//! Solidity bindings for the Permit3 signed structures and events.
#![allow(missing_docs)]

use alloy::primitives::{Address, B256, U160};
use alloy::sol_types::SolStruct;
use permit3_constants::{LOCKED_EXPIRATION, TRANSFER_MODE};

mod structs {
    alloy::sol!(
        /// A single allowance update or immediate transfer.
        #[derive(Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        struct SpendTransferPermit {
            uint64 transferOrExpiration;
            address token;
            address spender;
            uint160 amount;
        }

        /// The permits authorized on one chain. Its struct hash is the
        /// chain's leaf in the unhinged tree.
        #[derive(Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        struct ChainPermits {
            uint64 chainId;
            bytes32 salt;
            SpendTransferPermit[] permits;
        }

        /// The structure signed by the owner of a permit.
        #[derive(Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        struct UnhingedPermit {
            address owner;
            bytes32 salt;
            uint256 deadline;
            bytes32 unhingedRoot;
        }

        /// The salts cancelled on one chain. Its struct hash is the chain's
        /// leaf in the unhinged tree.
        #[derive(Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        struct NoncesToInvalidate {
            uint64 chainId;
            bytes32[] salts;
        }

        /// The structure signed by the owner of a cancellation.
        #[derive(Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        struct UnhingedCancel {
            address owner;
            uint256 deadline;
            bytes32 unhingedRoot;
        }
    );
}
pub use structs::{ChainPermits, NoncesToInvalidate, SpendTransferPermit, UnhingedCancel, UnhingedPermit};

mod events {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        interface Permit3 {
            event Permit(
                address indexed owner,
                address indexed token,
                address indexed spender,
                uint160 amount,
                uint64 expiration,
                uint64 timestamp
            );

            event Transfer(
                address indexed owner,
                address indexed token,
                address indexed to,
                uint160 amount
            );

            event Approval(
                address indexed owner,
                address indexed token,
                address indexed spender,
                uint160 amount,
                uint64 expiration
            );

            event Lockdown(address indexed owner, address indexed token, address indexed spender);

            event Unlock(address indexed owner, address indexed token, address indexed spender);

            event NonceUsed(address indexed owner, bytes32 indexed salt);

            event NonceInvalidated(address indexed owner, bytes32 indexed salt);
        }
    );

    impl Copy for Permit3::Permit {}
    impl Copy for Permit3::Transfer {}
    impl Copy for Permit3::Approval {}
    impl Copy for Permit3::Lockdown {}
    impl Copy for Permit3::Unlock {}
    impl Copy for Permit3::NonceUsed {}
    impl Copy for Permit3::NonceInvalidated {}
    impl Copy for Permit3::Permit3Events {}
}
pub use events::Permit3;

impl SpendTransferPermit {
    /// A permit that transfers `amount` of `token` to `to` immediately.
    pub const fn transfer(token: Address, to: Address, amount: U160) -> Self {
        Self { transferOrExpiration: TRANSFER_MODE, token, spender: to, amount }
    }

    /// A permit that sets the allowance of `spender` to `amount`, expiring at
    /// `expiration`. An expiration of `0` never expires.
    pub const fn allowance(token: Address, spender: Address, amount: U160, expiration: u64) -> Self {
        Self { transferOrExpiration: expiration, token, spender, amount }
    }

    /// A permit that locks the allowance of `spender` down.
    pub const fn lock(token: Address, spender: Address) -> Self {
        Self { transferOrExpiration: LOCKED_EXPIRATION, token, spender, amount: U160::ZERO }
    }

    /// True if this permit is an immediate transfer.
    pub const fn is_transfer(&self) -> bool {
        self.transferOrExpiration == TRANSFER_MODE
    }

    /// True if this permit locks the allowance down.
    pub const fn is_lock(&self) -> bool {
        self.transferOrExpiration == LOCKED_EXPIRATION
    }
}

impl ChainPermits {
    /// Create the permits for one chain.
    pub const fn new(chain_id: u64, salt: B256, permits: Vec<SpendTransferPermit>) -> Self {
        Self { chainId: chain_id, salt, permits }
    }

    /// The leaf committing to this chain's permits. Binds the chain id, the
    /// salt, and the hash of every contained permit.
    pub fn leaf(&self) -> B256 {
        self.eip712_hash_struct()
    }
}

impl NoncesToInvalidate {
    /// Create the cancellation for one chain.
    pub const fn new(chain_id: u64, salts: Vec<B256>) -> Self {
        Self { chainId: chain_id, salts }
    }

    /// The leaf committing to this chain's cancellation.
    pub fn leaf(&self) -> B256 {
        self.eip712_hash_struct()
    }
}
