use alloy::primitives::U160;
use permit3_constants::{LOCKED_EXPIRATION, MAX_ALLOWANCE, NO_EXPIRATION};
use serde::{Deserialize, Serialize};

/// The allowance an owner has granted a spender for one token.
///
/// - `amount` equal to [`MAX_ALLOWANCE`] is infinite and never decrements.
/// - `expiration` of [`NO_EXPIRATION`] never expires; [`LOCKED_EXPIRATION`]
///   marks the entry as locked down.
/// - `timestamp` is when the entry was last set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allowance {
    /// The amount the spender may still spend.
    pub amount: U160,
    /// The expiration timestamp, or a sentinel.
    pub expiration: u64,
    /// The time the entry was last set.
    pub timestamp: u64,
}

impl Allowance {
    /// Create a new allowance.
    pub const fn new(amount: U160, expiration: u64, timestamp: u64) -> Self {
        Self { amount, expiration, timestamp }
    }

    /// A locked down allowance.
    pub const fn locked(timestamp: u64) -> Self {
        Self { amount: U160::ZERO, expiration: LOCKED_EXPIRATION, timestamp }
    }

    /// True if the allowance is locked down.
    pub const fn is_locked(&self) -> bool {
        self.expiration == LOCKED_EXPIRATION
    }

    /// True if the allowance has expired at `now`. Locked allowances are not
    /// considered expired, see [`Self::is_locked`].
    pub const fn is_expired(&self, now: u64) -> bool {
        !self.is_locked() && self.expiration != NO_EXPIRATION && now > self.expiration
    }

    /// True if the amount is infinite.
    pub fn is_infinite(&self) -> bool {
        self.amount == MAX_ALLOWANCE
    }

    /// Decompose into `(amount, expiration, timestamp)`.
    pub const fn into_parts(self) -> (U160, u64, u64) {
        (self.amount, self.expiration, self.timestamp)
    }
}
