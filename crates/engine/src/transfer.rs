use alloy::primitives::{Address, U160};

/// A fungible token movement out of a permit owner's account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenTransfer {
    /// The token contract.
    pub token: Address,
    /// The recipient.
    pub to: Address,
    /// The amount.
    pub amount: U160,
}

/// Moves tokens on behalf of the verifier.
///
/// Balance checks are the implementor's concern. A batch must be applied in
/// full or not at all, so that a failing permit leaves no partial effects.
pub trait TokenTransfers {
    /// The error type returned when a batch is refused.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Move every transfer out of `from`, or none of them.
    fn transfer_batch(&mut self, from: Address, transfers: &[TokenTransfer])
        -> Result<(), Self::Error>;
}
