//! An in-memory token balance book.

use alloy::primitives::{Address, U160};
use permit3_engine::{TokenTransfer, TokenTransfers};
use std::collections::HashMap;

/// A transfer refused by [`MemoryTokens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    /// The sender cannot cover the transfer.
    #[error("{holder} holds {balance} of {token}, cannot send {amount}")]
    InsufficientBalance {
        /// The token.
        token: Address,
        /// The sender.
        holder: Address,
        /// The sender's balance at that point in the batch.
        balance: U160,
        /// The amount requested.
        amount: U160,
    },
    /// The recipient balance would overflow.
    #[error("balance overflow for {holder} of {token}")]
    Overflow {
        /// The token.
        token: Address,
        /// The recipient.
        holder: Address,
    },
}

/// Balances keyed by (token, holder). Batches apply in full or not at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryTokens {
    balances: HashMap<(Address, Address), U160>,
}

impl MemoryTokens {
    /// Create an empty balance book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint `amount` of `token` to `holder`.
    pub fn with_balance(mut self, token: Address, holder: Address, amount: U160) -> Self {
        let balance = self.balances.entry((token, holder)).or_default();
        *balance = balance.saturating_add(amount);
        self
    }

    /// The balance of `holder` in `token`.
    pub fn balance_of(&self, token: Address, holder: Address) -> U160 {
        self.balances.get(&(token, holder)).copied().unwrap_or_default()
    }
}

impl TokenTransfers for MemoryTokens {
    type Error = TransferError;

    fn transfer_batch(
        &mut self,
        from: Address,
        transfers: &[TokenTransfer],
    ) -> Result<(), TransferError> {
        let mut staged = self.balances.clone();
        for &TokenTransfer { token, to, amount } in transfers {
            let balance = staged.get(&(token, from)).copied().unwrap_or_default();
            let remaining = balance.checked_sub(amount).ok_or(
                TransferError::InsufficientBalance { token, holder: from, balance, amount },
            )?;
            staged.insert((token, from), remaining);

            let credited = staged.entry((token, to)).or_default();
            *credited =
                credited.checked_add(amount).ok_or(TransferError::Overflow { token, holder: to })?;
        }
        self.balances = staged;
        Ok(())
    }
}
