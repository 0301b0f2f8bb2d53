use crate::{
    AllowanceLedger, Ecrecover, NonceStore, PermitEngine, PermitError, SignatureAuthority,
    TokenTransfers,
};
use alloy::primitives::{Address, B256};
use chrono::Utc;
use core::fmt;
use parking_lot::Mutex;
use permit3_types::{Allowance, Permit3, SignedCancel, SignedPermit};
use std::sync::Arc;

/// A shared handle to one chain's [`PermitEngine`].
///
/// Clones share the engine, and every request holds the lock for its whole
/// run, so requests on a chain apply one at a time in a single order. Entry
/// points without an explicit timestamp read the wall clock.
pub struct ChainVerifier<S, T, A = Ecrecover> {
    inner: Arc<Mutex<PermitEngine<S, T, A>>>,
}

impl<S, T, A> Clone for ChainVerifier<S, T, A> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<S, T, A> fmt::Debug for ChainVerifier<S, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainVerifier").finish_non_exhaustive()
    }
}

impl<S, T, A> From<PermitEngine<S, T, A>> for ChainVerifier<S, T, A> {
    fn from(engine: PermitEngine<S, T, A>) -> Self {
        Self { inner: Arc::new(Mutex::new(engine)) }
    }
}

fn now() -> u64 {
    Utc::now().timestamp().max(0) as u64
}

impl<S, T, A> ChainVerifier<S, T, A>
where
    S: NonceStore + AllowanceLedger,
    T: TokenTransfers,
    A: SignatureAuthority,
{
    /// Wrap an engine.
    pub fn new(engine: PermitEngine<S, T, A>) -> Self {
        engine.into()
    }

    /// The chain this verifier runs on.
    pub fn chain_id(&self) -> u64 {
        self.inner.lock().chain_id()
    }

    /// Apply a signed permit at the current time.
    pub fn permit(
        &self,
        signed: &SignedPermit,
    ) -> Result<Vec<Permit3::Permit3Events>, PermitError> {
        self.permit_at(signed, now())
    }

    /// Apply a signed permit at `now`.
    pub fn permit_at(
        &self,
        signed: &SignedPermit,
        now: u64,
    ) -> Result<Vec<Permit3::Permit3Events>, PermitError> {
        self.inner.lock().permit(signed, now)
    }

    /// Apply a signed cancellation at the current time.
    pub fn invalidate_nonces_signed(
        &self,
        signed: &SignedCancel,
    ) -> Result<Vec<Permit3::NonceInvalidated>, PermitError> {
        self.inner.lock().invalidate_nonces_signed(signed, now())
    }

    /// True if the owner has used or invalidated the salt.
    pub fn is_nonce_used(&self, owner: Address, salt: B256) -> bool {
        self.inner.lock().is_nonce_used(owner, salt)
    }

    /// The current allowance.
    pub fn allowance(&self, owner: Address, token: Address, spender: Address) -> Allowance {
        self.inner.lock().allowance(owner, token, spender)
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut PermitEngine<S, T, A>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
