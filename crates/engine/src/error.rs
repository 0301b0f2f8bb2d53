use alloy::primitives::{Address, SignatureError, B256, U160};
use permit3_proof::ProofError;

/// An error returned by the [`AllowanceLedger`](crate::AllowanceLedger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AllowanceError {
    /// The allowance is locked down.
    #[error("allowance is locked")]
    Locked,
    /// The allowance has expired.
    #[error("allowance expired at {expiration}, current time is {now}")]
    Expired {
        /// The allowance expiration.
        expiration: u64,
        /// The current timestamp.
        now: u64,
    },
    /// The allowance is too small.
    #[error("allowance of {available} is less than the {requested} requested")]
    Insufficient {
        /// The remaining allowance.
        available: U160,
        /// The amount requested.
        requested: U160,
    },
    /// The expiration is a reserved sentinel, not a timestamp.
    #[error("expiration {expiration} is reserved")]
    ReservedExpiration {
        /// The rejected expiration.
        expiration: u64,
    },
}

/// An error returned by the [`PermitEngine`](crate::PermitEngine). A request
/// that fails leaves no trace in the store.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PermitError {
    /// The signature deadline has passed.
    #[error("deadline has passed: current time is {now}, deadline was {deadline}")]
    Expired {
        /// The current timestamp.
        now: u64,
        /// The deadline of the request.
        deadline: u64,
    },
    /// The signature recovers to an account other than the owner.
    #[error("signature recovers to {recovered}, expected {expected}")]
    InvalidSignature {
        /// The claimed owner.
        expected: Address,
        /// The recovered signer.
        recovered: Address,
    },
    /// The signature could not be parsed or recovered.
    #[error("malformed signature: {0}")]
    BadSignature(#[from] SignatureError),
    /// The salt was already used or invalidated.
    #[error("salt {salt} already used by {owner}")]
    NonceAlreadyUsed {
        /// The owner of the salt.
        owner: Address,
        /// The salt.
        salt: B256,
    },
    /// The proof does not match its declared shape.
    #[error("malformed proof: {0}")]
    MalformedProof(#[from] ProofError),
    /// The allowance is locked down.
    #[error("allowance of {spender} for {token} owned by {owner} is locked")]
    AllowanceLocked {
        /// The owner.
        owner: Address,
        /// The token.
        token: Address,
        /// The spender.
        spender: Address,
    },
    /// The allowance has expired.
    #[error("allowance expired at {expiration}, current time is {now}")]
    AllowanceExpired {
        /// The allowance expiration.
        expiration: u64,
        /// The current timestamp.
        now: u64,
    },
    /// The allowance is too small.
    #[error("allowance of {available} is less than the {requested} requested")]
    InsufficientAllowance {
        /// The remaining allowance.
        available: U160,
        /// The amount requested.
        requested: U160,
    },
    /// An approval used a reserved expiration.
    #[error("expiration {expiration} is reserved")]
    ReservedExpiration {
        /// The rejected expiration.
        expiration: u64,
    },
    /// An owner, token, or spender is the zero address.
    #[error("zero address")]
    ZeroAddress,
    /// The request carries nothing to apply.
    #[error("empty batch")]
    EmptyBatch,
    /// The request targets another chain.
    #[error("request is for chain {actual}, this verifier runs on chain {expected}")]
    WrongChainId {
        /// This verifier's chain id.
        expected: u64,
        /// The chain id in the request.
        actual: u64,
    },
    /// The token transfer collaborator refused the transfers.
    #[error("token transfer failed: {0}")]
    Transfer(#[source] Box<dyn core::error::Error + Send + Sync>),
}

impl PermitError {
    /// Convert a ledger error for the given entry.
    pub const fn from_allowance(
        err: AllowanceError,
        owner: Address,
        token: Address,
        spender: Address,
    ) -> Self {
        match err {
            AllowanceError::Locked => Self::AllowanceLocked { owner, token, spender },
            AllowanceError::Expired { expiration, now } => Self::AllowanceExpired { expiration, now },
            AllowanceError::Insufficient { available, requested } => {
                Self::InsufficientAllowance { available, requested }
            }
            AllowanceError::ReservedExpiration { expiration } => {
                Self::ReservedExpiration { expiration }
            }
        }
    }
}
