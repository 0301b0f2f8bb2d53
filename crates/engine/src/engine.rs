use crate::{
    spend, AllowanceLedger, Ecrecover, NonceStore, PermitError, SignatureAuthority, TokenTransfer,
    TokenTransfers,
};
use alloy::{
    primitives::{Address, B256, U160},
    sol_types::SolStruct,
};
use permit3_constants::VerifierConfig;
use permit3_types::{
    domain_separator, Allowance, Permit3::{self, Permit3Events}, SignedCancel, SignedPermit,
};
use std::collections::HashMap;
use tracing::{debug, instrument, trace};

/// The verifier for one chain.
///
/// The engine owns the chain's store and token collaborator. Every entry
/// point runs to completion or fails without writing anything, and returns
/// the events describing what it changed.
///
/// All entry points take the current timestamp explicitly. See
/// [`ChainVerifier`](crate::ChainVerifier) for a shared, clock-driven
/// wrapper.
#[derive(Debug)]
pub struct PermitEngine<S, T, A = Ecrecover> {
    config: VerifierConfig,
    domain_separator: B256,
    store: S,
    tokens: T,
    authority: A,
}

impl<S, T> PermitEngine<S, T>
where
    S: NonceStore + AllowanceLedger,
    T: TokenTransfers,
{
    /// Create an engine recovering signatures with [`Ecrecover`].
    pub fn new(config: VerifierConfig, store: S, tokens: T) -> Self {
        Self::with_authority(config, store, tokens, Ecrecover)
    }
}

impl<S, T, A> PermitEngine<S, T, A>
where
    S: NonceStore + AllowanceLedger,
    T: TokenTransfers,
    A: SignatureAuthority,
{
    /// Create an engine with a custom signature authority.
    pub fn with_authority(config: VerifierConfig, store: S, tokens: T, authority: A) -> Self {
        let domain_separator = domain_separator(config.verifying_contract());
        Self { config, domain_separator, store, tokens, authority }
    }

    /// The verifier configuration.
    pub const fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// The chain this engine verifies for.
    pub const fn chain_id(&self) -> u64 {
        self.config.chain_id()
    }

    /// The cached EIP-712 domain separator.
    pub const fn domain_separator(&self) -> B256 {
        self.domain_separator
    }

    /// Get a reference to the store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the token collaborator.
    pub const fn tokens(&self) -> &T {
        &self.tokens
    }

    /// Get a mutable reference to the token collaborator.
    pub fn tokens_mut(&mut self) -> &mut T {
        &mut self.tokens
    }

    /// Decompose into the store and token collaborator.
    pub fn into_parts(self) -> (S, T) {
        (self.store, self.tokens)
    }

    /// True if the owner has used or invalidated the salt.
    pub fn is_nonce_used(&self, owner: Address, salt: B256) -> bool {
        self.store.is_used(owner, salt)
    }

    /// The current allowance.
    pub fn allowance(&self, owner: Address, token: Address, spender: Address) -> Allowance {
        self.store.allowance(owner, token, spender)
    }

    fn check_chain(&self, actual: u64) -> Result<(), PermitError> {
        let expected = self.chain_id();
        if actual != expected {
            return Err(PermitError::WrongChainId { expected, actual });
        }
        Ok(())
    }

    fn authenticate(
        &self,
        owner: Address,
        struct_hash: B256,
        signature: &[u8],
    ) -> Result<(), PermitError> {
        let recovered =
            self.authority.recover_signer(self.domain_separator, struct_hash, signature)?;
        if recovered != owner {
            return Err(PermitError::InvalidSignature { expected: owner, recovered });
        }
        Ok(())
    }

    /// Apply this chain's slice of a signed permit.
    ///
    /// A permit with an empty proof is a single-chain permit, whose leaf is
    /// the signed root. Returns the [`Permit3::NonceUsed`] event followed by
    /// one event per applied transfer or allowance update, in permit order.
    #[instrument(skip_all, fields(
        owner = %signed.owner,
        salt = %signed.salt(),
        chain_id = signed.chain_id(),
        permits = signed.chain_permits.permits.len(),
    ))]
    pub fn permit(
        &mut self,
        signed: &SignedPermit,
        now: u64,
    ) -> Result<Vec<Permit3Events>, PermitError> {
        self.permit_inner(signed, now).inspect_err(|e| debug!(%e, "permit rejected"))
    }

    fn permit_inner(
        &mut self,
        signed: &SignedPermit,
        now: u64,
    ) -> Result<Vec<Permit3Events>, PermitError> {
        let owner = signed.owner;
        let salt = signed.salt();
        let permits = &signed.chain_permits.permits;

        if owner.is_zero() {
            return Err(PermitError::ZeroAddress);
        }
        if permits.is_empty() {
            return Err(PermitError::EmptyBatch);
        }
        if permits.iter().any(|p| p.token.is_zero() || p.spender.is_zero()) {
            return Err(PermitError::ZeroAddress);
        }
        self.check_chain(signed.chain_id())?;
        if now > signed.deadline {
            return Err(PermitError::Expired { now, deadline: signed.deadline });
        }

        let root = signed.unhinged_root()?;
        trace!(%root, "computed unhinged root");
        self.authenticate(owner, signed.signed_struct(root).eip712_hash_struct(), &signed.signature)?;

        if self.store.is_used(owner, salt) {
            return Err(PermitError::NonceAlreadyUsed { owner, salt });
        }

        // Stage every effect before writing anything.
        let mut staged: HashMap<(Address, Address), Allowance> = HashMap::new();
        let mut transfers = Vec::new();
        let mut events = vec![Permit3Events::NonceUsed(Permit3::NonceUsed { owner, salt })];

        for permit in permits {
            let (token, spender) = (permit.token, permit.spender);

            if permit.is_transfer() {
                transfers.push(TokenTransfer { token, to: spender, amount: permit.amount });
                events.push(Permit3Events::Transfer(Permit3::Transfer {
                    owner,
                    token,
                    to: spender,
                    amount: permit.amount,
                }));
                continue;
            }

            if permit.is_lock() {
                staged.insert((token, spender), Allowance::locked(now));
                events.push(Permit3Events::Lockdown(Permit3::Lockdown { owner, token, spender }));
                continue;
            }

            let current = match staged.get(&(token, spender)) {
                Some(allowance) => *allowance,
                None => self.store.allowance(owner, token, spender),
            };
            if current.is_locked() {
                return Err(PermitError::AllowanceLocked { owner, token, spender });
            }
            let expiration = permit.transferOrExpiration;
            staged.insert((token, spender), Allowance::new(permit.amount, expiration, now));
            events.push(Permit3Events::Permit(Permit3::Permit {
                owner,
                token,
                spender,
                amount: permit.amount,
                expiration,
                timestamp: now,
            }));
        }

        if !transfers.is_empty() {
            self.tokens
                .transfer_batch(owner, &transfers)
                .map_err(|e| PermitError::Transfer(Box::new(e)))?;
        }

        self.store.use_nonce(owner, salt)?;
        for ((token, spender), allowance) in staged {
            self.store.put_allowance(owner, token, spender, allowance);
        }

        for event in &events {
            trace!(?event, "applied");
        }
        debug!(effects = events.len() - 1, "permit applied");
        Ok(events)
    }

    /// Set the caller's allowance for a spender directly. The transfer and
    /// lock sentinels are refused as expirations, see [`Self::lockdown`].
    #[instrument(skip_all, fields(owner = %caller, %token, %spender))]
    pub fn approve(
        &mut self,
        caller: Address,
        token: Address,
        spender: Address,
        amount: U160,
        expiration: u64,
        now: u64,
    ) -> Result<Permit3::Approval, PermitError> {
        if caller.is_zero() || token.is_zero() || spender.is_zero() {
            return Err(PermitError::ZeroAddress);
        }
        self.store
            .set(caller, token, spender, amount, expiration, now)
            .map_err(|e| PermitError::from_allowance(e, caller, token, spender))
            .inspect_err(|e| debug!(%e, "approval rejected"))?;

        trace!(%amount, expiration, "approved");
        Ok(Permit3::Approval { owner: caller, token, spender, amount, expiration })
    }

    /// Move `amount` of `token` from `owner` to `to`, spending the caller's
    /// allowance.
    #[instrument(skip_all, fields(spender = %caller, %owner, %token))]
    pub fn transfer_from(
        &mut self,
        caller: Address,
        owner: Address,
        to: Address,
        token: Address,
        amount: U160,
        now: u64,
    ) -> Result<Permit3::Transfer, PermitError> {
        if owner.is_zero() || to.is_zero() || token.is_zero() {
            return Err(PermitError::ZeroAddress);
        }
        let updated = spend(self.store.allowance(owner, token, caller), amount, now)
            .map_err(|e| PermitError::from_allowance(e, owner, token, caller))
            .inspect_err(|e| debug!(%e, "transfer rejected"))?;

        self.tokens
            .transfer_batch(owner, &[TokenTransfer { token, to, amount }])
            .map_err(|e| PermitError::Transfer(Box::new(e)))
            .inspect_err(|e| debug!(%e, "transfer rejected"))?;
        self.store.put_allowance(owner, token, caller, updated);

        trace!(%to, %amount, "transferred");
        Ok(Permit3::Transfer { owner, token, to, amount })
    }

    /// Lock down the caller's allowances for each `(token, spender)` pair.
    #[instrument(skip_all, fields(owner = %caller, pairs = pairs.len()))]
    pub fn lockdown(
        &mut self,
        caller: Address,
        pairs: &[(Address, Address)],
        now: u64,
    ) -> Result<Vec<Permit3::Lockdown>, PermitError> {
        if pairs.is_empty() {
            return Err(PermitError::EmptyBatch);
        }
        if caller.is_zero() || pairs.iter().any(|(t, s)| t.is_zero() || s.is_zero()) {
            return Err(PermitError::ZeroAddress);
        }
        Ok(pairs
            .iter()
            .map(|&(token, spender)| {
                self.store.clear(caller, token, spender, now);
                trace!(%token, %spender, "locked down");
                Permit3::Lockdown { owner: caller, token, spender }
            })
            .collect())
    }

    /// Lift the lockdown on the caller's allowances for each
    /// `(token, spender)` pair. Pairs that are not locked are skipped, and
    /// produce no event.
    #[instrument(skip_all, fields(owner = %caller, pairs = pairs.len()))]
    pub fn unlock(
        &mut self,
        caller: Address,
        pairs: &[(Address, Address)],
        now: u64,
    ) -> Result<Vec<Permit3::Unlock>, PermitError> {
        if pairs.is_empty() {
            return Err(PermitError::EmptyBatch);
        }
        if caller.is_zero() {
            return Err(PermitError::ZeroAddress);
        }
        Ok(pairs
            .iter()
            .filter(|&&(token, spender)| self.store.unlock(caller, token, spender, now))
            .map(|&(token, spender)| {
                trace!(%token, %spender, "unlocked");
                Permit3::Unlock { owner: caller, token, spender }
            })
            .collect())
    }

    /// Invalidate the caller's salts. Salts already used are skipped.
    #[instrument(skip_all, fields(owner = %caller, salts = salts.len()))]
    pub fn invalidate_nonces(
        &mut self,
        caller: Address,
        salts: &[B256],
    ) -> Result<Vec<Permit3::NonceInvalidated>, PermitError> {
        if salts.is_empty() {
            return Err(PermitError::EmptyBatch);
        }
        if caller.is_zero() {
            return Err(PermitError::ZeroAddress);
        }
        Ok(self.invalidate(caller, salts))
    }

    /// Apply this chain's slice of a signed cancellation.
    #[instrument(skip_all, fields(
        owner = %signed.owner,
        chain_id = signed.chain_id(),
        salts = signed.salts().len(),
    ))]
    pub fn invalidate_nonces_signed(
        &mut self,
        signed: &SignedCancel,
        now: u64,
    ) -> Result<Vec<Permit3::NonceInvalidated>, PermitError> {
        self.cancel_inner(signed, now).inspect_err(|e| debug!(%e, "cancellation rejected"))
    }

    fn cancel_inner(
        &mut self,
        signed: &SignedCancel,
        now: u64,
    ) -> Result<Vec<Permit3::NonceInvalidated>, PermitError> {
        if signed.owner.is_zero() {
            return Err(PermitError::ZeroAddress);
        }
        if signed.salts().is_empty() {
            return Err(PermitError::EmptyBatch);
        }
        self.check_chain(signed.chain_id())?;
        if now > signed.deadline {
            return Err(PermitError::Expired { now, deadline: signed.deadline });
        }

        let root = signed.unhinged_root()?;
        self.authenticate(
            signed.owner,
            signed.signed_struct(root).eip712_hash_struct(),
            &signed.signature,
        )?;

        Ok(self.invalidate(signed.owner, signed.salts()))
    }

    fn invalidate(&mut self, owner: Address, salts: &[B256]) -> Vec<Permit3::NonceInvalidated> {
        self.store
            .invalidate(owner, salts)
            .into_iter()
            .map(|salt| {
                trace!(%salt, "invalidated");
                Permit3::NonceInvalidated { owner, salt }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use alloy::primitives::Bytes;
    use permit3_constants::{
        test_utils::{ROUTER, TEST_CHAIN_A_ID, TEST_CHAIN_B_ID, TEST_CONFIG_A, USDC, VAULT, WETH},
        LOCKED_EXPIRATION, MAX_ALLOWANCE, TRANSFER_MODE,
    };
    use permit3_proof::{ProofError, UnhingedProof};
    use permit3_types::{ChainPermits, SpendTransferPermit};

    const OWNER: Address = Address::repeat_byte(0x0a);

    /// Recovers a fixed address for any signature.
    #[derive(Debug)]
    struct FixedAuthority(Address);

    impl SignatureAuthority for FixedAuthority {
        fn recover_signer(&self, _: B256, _: B256, _: &[u8]) -> Result<Address, PermitError> {
            Ok(self.0)
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("refused")]
    struct Refused;

    #[derive(Debug, Default)]
    struct Recorder {
        refuse: bool,
        moved: Vec<(Address, TokenTransfer)>,
    }

    impl TokenTransfers for Recorder {
        type Error = Refused;

        fn transfer_batch(
            &mut self,
            from: Address,
            transfers: &[TokenTransfer],
        ) -> Result<(), Refused> {
            if self.refuse {
                return Err(Refused);
            }
            self.moved.extend(transfers.iter().map(|t| (from, *t)));
            Ok(())
        }
    }

    type Engine = PermitEngine<MemoryStore, Recorder, FixedAuthority>;

    fn engine() -> Engine {
        PermitEngine::with_authority(
            TEST_CONFIG_A,
            MemoryStore::new(),
            Recorder::default(),
            FixedAuthority(OWNER),
        )
    }

    fn permit(salt: u8, permits: Vec<SpendTransferPermit>) -> SignedPermit {
        SignedPermit {
            owner: OWNER,
            deadline: 1_000,
            chain_permits: ChainPermits::new(TEST_CHAIN_A_ID, B256::repeat_byte(salt), permits),
            proof: UnhingedProof::empty(),
            signature: Bytes::from_static(&[0u8; 65]),
        }
    }

    #[test]
    fn applies_permits_in_order() {
        let mut engine = engine();
        let signed = permit(
            1,
            vec![
                SpendTransferPermit::allowance(USDC, ROUTER, U160::from(1000), 500),
                SpendTransferPermit::transfer(WETH, VAULT, U160::from(7)),
                SpendTransferPermit::allowance(USDC, ROUTER, U160::from(50), 0),
            ],
        );

        let events = engine.permit(&signed, 100).unwrap();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], Permit3Events::NonceUsed(_)));
        assert!(matches!(events[2], Permit3Events::Transfer(_)));

        // The later update wins.
        assert_eq!(engine.allowance(OWNER, USDC, ROUTER), Allowance::new(U160::from(50), 0, 100));
        assert_eq!(
            engine.tokens().moved,
            vec![(OWNER, TokenTransfer { token: WETH, to: VAULT, amount: U160::from(7) })]
        );
        assert!(engine.is_nonce_used(OWNER, B256::repeat_byte(1)));
    }

    #[test]
    fn replay_is_rejected() {
        let mut engine = engine();
        let signed = permit(1, vec![SpendTransferPermit::transfer(WETH, VAULT, U160::from(7))]);
        engine.permit(&signed, 100).unwrap();

        let err = engine.permit(&signed, 101).unwrap_err();
        assert!(matches!(err, PermitError::NonceAlreadyUsed { owner, .. } if owner == OWNER));
        assert_eq!(engine.tokens().moved.len(), 1);
    }

    #[test]
    fn replay_leaves_ledger_untouched() {
        let mut engine = engine();
        let signed = permit(
            1,
            vec![
                SpendTransferPermit::allowance(USDC, ROUTER, U160::from(1000), 0),
                SpendTransferPermit::transfer(WETH, VAULT, U160::from(7)),
            ],
        );
        engine.permit(&signed, 100).unwrap();
        engine.transfer_from(ROUTER, OWNER, VAULT, USDC, U160::from(250), 101).unwrap();

        let store = engine.store().clone();
        let moved = engine.tokens().moved.len();
        assert!(matches!(
            engine.permit(&signed, 102).unwrap_err(),
            PermitError::NonceAlreadyUsed { .. }
        ));

        // The partial spend is not reset by the replayed allowance update.
        assert_eq!(engine.store(), &store);
        assert_eq!(engine.allowance(OWNER, USDC, ROUTER).amount, U160::from(750));
        assert_eq!(engine.tokens().moved.len(), moved);
    }

    #[test]
    fn approve_refuses_sentinel_expirations() {
        let mut engine = engine();

        assert!(matches!(
            engine
                .approve(OWNER, USDC, ROUTER, U160::from(1000), LOCKED_EXPIRATION, 10)
                .unwrap_err(),
            PermitError::ReservedExpiration { expiration: LOCKED_EXPIRATION }
        ));
        assert!(matches!(
            engine
                .approve(OWNER, WETH, ROUTER, U160::from(1000), TRANSFER_MODE, 10)
                .unwrap_err(),
            PermitError::ReservedExpiration { expiration: TRANSFER_MODE }
        ));
        assert_eq!(engine.store(), &MemoryStore::new());

        // Neither refusal left an entry behind that blocks a real approval.
        engine.approve(OWNER, USDC, ROUTER, U160::from(5), 0, 11).unwrap();
        engine.approve(OWNER, WETH, ROUTER, U160::from(5), 20, 11).unwrap();
        engine.transfer_from(ROUTER, OWNER, VAULT, WETH, U160::from(5), 12).unwrap();
    }

    #[test]
    fn input_validation() {
        let mut engine = engine();

        let err = engine.permit(&permit(1, vec![]), 0).unwrap_err();
        assert!(matches!(err, PermitError::EmptyBatch));

        let zero_token = permit(1, vec![SpendTransferPermit::lock(Address::ZERO, ROUTER)]);
        assert!(matches!(engine.permit(&zero_token, 0).unwrap_err(), PermitError::ZeroAddress));

        let zero_owner = SignedPermit { owner: Address::ZERO, ..permit(1, vec![]) };
        assert!(matches!(engine.permit(&zero_owner, 0).unwrap_err(), PermitError::ZeroAddress));

        let mut other_chain = permit(1, vec![SpendTransferPermit::lock(USDC, ROUTER)]);
        other_chain.chain_permits.chainId = TEST_CHAIN_B_ID;
        assert!(matches!(
            engine.permit(&other_chain, 0).unwrap_err(),
            PermitError::WrongChainId { expected: TEST_CHAIN_A_ID, actual: TEST_CHAIN_B_ID }
        ));

        let late = permit(1, vec![SpendTransferPermit::lock(USDC, ROUTER)]);
        assert!(matches!(
            engine.permit(&late, 1_001).unwrap_err(),
            PermitError::Expired { now: 1_001, deadline: 1_000 }
        ));

        assert_eq!(engine.store(), &MemoryStore::new());
    }

    #[test]
    fn malformed_proof() {
        let mut engine = engine();
        let mut signed = permit(1, vec![SpendTransferPermit::lock(USDC, ROUTER)]);
        signed.proof.nodes.push(B256::repeat_byte(3));

        let err = engine.permit(&signed, 0).unwrap_err();
        assert!(matches!(err, PermitError::MalformedProof(ProofError::NodeCountMismatch { .. })));
    }

    #[test]
    fn wrong_signer() {
        let mut engine = PermitEngine::with_authority(
            TEST_CONFIG_A,
            MemoryStore::new(),
            Recorder::default(),
            FixedAuthority(ROUTER),
        );
        let err = engine
            .permit(&permit(1, vec![SpendTransferPermit::lock(USDC, ROUTER)]), 0)
            .unwrap_err();
        assert!(matches!(
            err,
            PermitError::InvalidSignature { expected, recovered }
                if expected == OWNER && recovered == ROUTER
        ));
    }

    #[test]
    fn refused_transfer_rolls_back() {
        let mut engine = engine();
        engine.tokens_mut().refuse = true;
        let signed = permit(
            1,
            vec![
                SpendTransferPermit::allowance(USDC, ROUTER, U160::from(1000), 0),
                SpendTransferPermit::transfer(WETH, VAULT, U160::from(7)),
            ],
        );

        assert!(matches!(engine.permit(&signed, 0).unwrap_err(), PermitError::Transfer(_)));
        assert!(!engine.is_nonce_used(OWNER, B256::repeat_byte(1)));
        assert_eq!(engine.allowance(OWNER, USDC, ROUTER), Allowance::default());
    }

    #[test]
    fn locked_entries_refuse_updates() {
        let mut engine = engine();
        engine.lockdown(OWNER, &[(USDC, ROUTER)], 10).unwrap();

        let signed = permit(
            1,
            vec![
                SpendTransferPermit::allowance(WETH, ROUTER, U160::from(5), 0),
                SpendTransferPermit::allowance(USDC, ROUTER, U160::from(5), 0),
            ],
        );
        assert!(matches!(
            engine.permit(&signed, 20).unwrap_err(),
            PermitError::AllowanceLocked { token, .. } if token == USDC
        ));
        // Nothing from the batch landed.
        assert_eq!(engine.allowance(OWNER, WETH, ROUTER), Allowance::default());
        assert!(!engine.is_nonce_used(OWNER, B256::repeat_byte(1)));

        assert!(matches!(
            engine.approve(OWNER, USDC, ROUTER, U160::from(1), 0, 21).unwrap_err(),
            PermitError::AllowanceLocked { .. }
        ));
        assert!(matches!(
            engine.transfer_from(ROUTER, OWNER, VAULT, USDC, U160::ZERO, 22).unwrap_err(),
            PermitError::AllowanceLocked { .. }
        ));

        let unlocked = engine.unlock(OWNER, &[(USDC, ROUTER), (WETH, ROUTER)], 30).unwrap();
        assert_eq!(unlocked.len(), 1);
        engine.permit(&signed, 31).unwrap();
        assert_eq!(engine.allowance(OWNER, USDC, ROUTER).amount, U160::from(5));
    }

    #[test]
    fn signed_lock() {
        let mut engine = engine();
        engine.approve(OWNER, USDC, ROUTER, MAX_ALLOWANCE, 0, 1).unwrap();

        let signed = permit(1, vec![SpendTransferPermit::lock(USDC, ROUTER)]);
        let events = engine.permit(&signed, 2).unwrap();
        assert!(matches!(events[1], Permit3Events::Lockdown(_)));
        assert_eq!(engine.allowance(OWNER, USDC, ROUTER).expiration, LOCKED_EXPIRATION);
    }

    #[test]
    fn transfer_from_spends_allowance() {
        let mut engine = engine();
        engine.approve(OWNER, USDC, ROUTER, U160::from(1000), 0, 1).unwrap();

        engine.transfer_from(ROUTER, OWNER, VAULT, USDC, U160::from(300), 2).unwrap();
        engine.transfer_from(ROUTER, OWNER, VAULT, USDC, U160::from(400), 3).unwrap();
        assert!(matches!(
            engine.transfer_from(ROUTER, OWNER, VAULT, USDC, U160::from(400), 4).unwrap_err(),
            PermitError::InsufficientAllowance { .. }
        ));
        assert_eq!(engine.allowance(OWNER, USDC, ROUTER).amount, U160::from(300));
        assert_eq!(engine.tokens().moved.len(), 2);

        // A refused transfer leaves the allowance alone.
        engine.tokens_mut().refuse = true;
        assert!(engine.transfer_from(ROUTER, OWNER, VAULT, USDC, U160::from(1), 5).is_err());
        assert_eq!(engine.allowance(OWNER, USDC, ROUTER).amount, U160::from(300));
    }

    #[test]
    fn unsigned_invalidation() {
        let mut engine = engine();
        let salts = [B256::repeat_byte(1), B256::repeat_byte(2)];

        assert_eq!(engine.invalidate_nonces(OWNER, &salts).unwrap().len(), 2);
        assert_eq!(engine.invalidate_nonces(OWNER, &salts).unwrap().len(), 0);
        assert!(matches!(
            engine.invalidate_nonces(OWNER, &[]).unwrap_err(),
            PermitError::EmptyBatch
        ));

        let err = engine
            .permit(&permit(1, vec![SpendTransferPermit::lock(USDC, ROUTER)]), 0)
            .unwrap_err();
        assert!(matches!(err, PermitError::NonceAlreadyUsed { .. }));
    }
}
