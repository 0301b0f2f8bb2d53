mod memory;
pub use memory::MemoryStore;

use crate::{AllowanceError, PermitError};
use alloy::primitives::{Address, B256, U160};
use permit3_constants::{LOCKED_EXPIRATION, NO_EXPIRATION, TRANSFER_MODE};
use permit3_types::Allowance;

/// Per-owner set of consumed salts.
///
/// A salt only ever moves from unused to used.
pub trait NonceStore {
    /// True if the salt has been used or invalidated.
    fn is_used(&self, owner: Address, salt: B256) -> bool;

    /// Mark the salt as used. Returns `false` if it already was.
    fn mark_used(&mut self, owner: Address, salt: B256) -> bool;

    /// Consume the salt, failing if it was already used.
    fn use_nonce(&mut self, owner: Address, salt: B256) -> Result<(), PermitError> {
        if !self.mark_used(owner, salt) {
            return Err(PermitError::NonceAlreadyUsed { owner, salt });
        }
        Ok(())
    }

    /// Mark every salt as used, returning those that were not used before.
    fn invalidate(&mut self, owner: Address, salts: &[B256]) -> Vec<B256> {
        salts.iter().copied().filter(|salt| self.mark_used(owner, *salt)).collect()
    }
}

/// Allowances keyed by (owner, token, spender).
///
/// Backends provide [`Self::allowance`] and [`Self::put_allowance`]; the
/// provided methods implement the ledger rules on top of them.
pub trait AllowanceLedger {
    /// Get the allowance. Missing entries are the default allowance of zero.
    fn allowance(&self, owner: Address, token: Address, spender: Address) -> Allowance;

    /// Overwrite the allowance without any checks.
    fn put_allowance(
        &mut self,
        owner: Address,
        token: Address,
        spender: Address,
        allowance: Allowance,
    );

    /// Set the amount and expiration. Refuses locked entries, and the
    /// transfer and lock sentinels as expirations; lockdown goes through
    /// [`Self::clear`].
    fn set(
        &mut self,
        owner: Address,
        token: Address,
        spender: Address,
        amount: U160,
        expiration: u64,
        now: u64,
    ) -> Result<(), AllowanceError> {
        if expiration == TRANSFER_MODE || expiration == LOCKED_EXPIRATION {
            return Err(AllowanceError::ReservedExpiration { expiration });
        }
        if self.allowance(owner, token, spender).is_locked() {
            return Err(AllowanceError::Locked);
        }
        self.put_allowance(owner, token, spender, Allowance::new(amount, expiration, now));
        Ok(())
    }

    /// Spend `amount` from the allowance. See [`spend`].
    fn consume(
        &mut self,
        owner: Address,
        token: Address,
        spender: Address,
        amount: U160,
        now: u64,
    ) -> Result<(), AllowanceError> {
        let updated = spend(self.allowance(owner, token, spender), amount, now)?;
        self.put_allowance(owner, token, spender, updated);
        Ok(())
    }

    /// Lock the allowance down: amount zero, expiration locked.
    fn clear(&mut self, owner: Address, token: Address, spender: Address, now: u64) {
        self.put_allowance(owner, token, spender, Allowance::locked(now));
    }

    /// Lift a lockdown, leaving an empty allowance. Returns `false` if the
    /// entry was not locked.
    fn unlock(&mut self, owner: Address, token: Address, spender: Address, now: u64) -> bool {
        if !self.allowance(owner, token, spender).is_locked() {
            return false;
        }
        self.put_allowance(owner, token, spender, Allowance::new(U160::ZERO, NO_EXPIRATION, now));
        true
    }
}

/// Compute the allowance left after spending `amount` at `now`.
///
/// Fails if the allowance is locked, expired, or smaller than `amount`, in
/// that order. Infinite allowances are returned unchanged.
pub fn spend(allowance: Allowance, amount: U160, now: u64) -> Result<Allowance, AllowanceError> {
    if allowance.is_locked() {
        return Err(AllowanceError::Locked);
    }
    if allowance.is_expired(now) {
        return Err(AllowanceError::Expired { expiration: allowance.expiration, now });
    }
    if allowance.is_infinite() {
        return Ok(allowance);
    }
    let remaining = allowance
        .amount
        .checked_sub(amount)
        .ok_or(AllowanceError::Insufficient { available: allowance.amount, requested: amount })?;
    Ok(Allowance { amount: remaining, ..allowance })
}
