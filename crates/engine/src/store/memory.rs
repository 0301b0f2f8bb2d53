use crate::{AllowanceLedger, NonceStore};
use alloy::primitives::{Address, B256};
use permit3_types::Allowance;
use std::collections::{HashMap, HashSet};

/// An in-memory store of salts and allowances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    nonces: HashSet<(Address, B256)>,
    allowances: HashMap<(Address, Address, Address), Allowance>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of used salts across all owners.
    pub fn used_nonces(&self) -> usize {
        self.nonces.len()
    }
}

impl NonceStore for MemoryStore {
    fn is_used(&self, owner: Address, salt: B256) -> bool {
        self.nonces.contains(&(owner, salt))
    }

    fn mark_used(&mut self, owner: Address, salt: B256) -> bool {
        self.nonces.insert((owner, salt))
    }
}

impl AllowanceLedger for MemoryStore {
    fn allowance(&self, owner: Address, token: Address, spender: Address) -> Allowance {
        self.allowances.get(&(owner, token, spender)).copied().unwrap_or_default()
    }

    fn put_allowance(
        &mut self,
        owner: Address,
        token: Address,
        spender: Address,
        allowance: Allowance,
    ) {
        self.allowances.insert((owner, token, spender), allowance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AllowanceError;
    use alloy::primitives::U160;
    use permit3_constants::{
        test_utils::{ROUTER, USDC},
        LOCKED_EXPIRATION, MAX_ALLOWANCE, TRANSFER_MODE,
    };

    const OWNER: Address = Address::repeat_byte(0x01);

    #[test]
    fn nonce_moves_once() {
        let mut store = MemoryStore::new();
        let salt = B256::repeat_byte(0x42);

        assert!(!store.is_used(OWNER, salt));
        store.use_nonce(OWNER, salt).unwrap();
        assert!(store.is_used(OWNER, salt));
        assert!(store.use_nonce(OWNER, salt).is_err());

        // Salts are scoped to the owner.
        assert!(!store.is_used(ROUTER, salt));
    }

    #[test]
    fn invalidate_reports_new_salts() {
        let mut store = MemoryStore::new();
        let (a, b) = (B256::repeat_byte(1), B256::repeat_byte(2));
        store.use_nonce(OWNER, a).unwrap();

        assert_eq!(store.invalidate(OWNER, &[a, b]), vec![b]);
        assert!(store.is_used(OWNER, b));
        assert!(store.invalidate(OWNER, &[a, b]).is_empty());
        assert_eq!(store.used_nonces(), 2);
    }

    #[test]
    fn allowance_depletes() {
        let mut store = MemoryStore::new();
        store.set(OWNER, USDC, ROUTER, U160::from(1000), 0, 10).unwrap();

        store.consume(OWNER, USDC, ROUTER, U160::from(300), 11).unwrap();
        store.consume(OWNER, USDC, ROUTER, U160::from(400), 12).unwrap();
        assert_eq!(store.allowance(OWNER, USDC, ROUTER).amount, U160::from(300));

        assert_eq!(
            store.consume(OWNER, USDC, ROUTER, U160::from(400), 13),
            Err(AllowanceError::Insufficient {
                available: U160::from(300),
                requested: U160::from(400)
            })
        );
        assert_eq!(store.allowance(OWNER, USDC, ROUTER).amount, U160::from(300));
        // The timestamp records the last set, not the last spend.
        assert_eq!(store.allowance(OWNER, USDC, ROUTER).timestamp, 10);
    }

    #[test]
    fn infinite_allowance_does_not_decrement() {
        let mut store = MemoryStore::new();
        store.set(OWNER, USDC, ROUTER, MAX_ALLOWANCE, 0, 0).unwrap();
        store.consume(OWNER, USDC, ROUTER, U160::from(1_000_000), 1).unwrap();
        assert_eq!(store.allowance(OWNER, USDC, ROUTER).amount, MAX_ALLOWANCE);
    }

    #[test]
    fn expired_allowance() {
        let mut store = MemoryStore::new();
        store.set(OWNER, USDC, ROUTER, U160::from(1000), 100, 0).unwrap();

        store.consume(OWNER, USDC, ROUTER, U160::from(1), 100).unwrap();
        assert_eq!(
            store.consume(OWNER, USDC, ROUTER, U160::from(1), 101),
            Err(AllowanceError::Expired { expiration: 100, now: 101 })
        );
        assert_eq!(store.allowance(OWNER, USDC, ROUTER).amount, U160::from(999));
    }

    #[test]
    fn sentinel_expirations_are_not_set() {
        let mut store = MemoryStore::new();
        for expiration in [TRANSFER_MODE, LOCKED_EXPIRATION] {
            assert_eq!(
                store.set(OWNER, USDC, ROUTER, U160::from(1000), expiration, 10),
                Err(AllowanceError::ReservedExpiration { expiration })
            );
        }
        assert_eq!(store, MemoryStore::new());
    }

    #[test]
    fn lockdown() {
        let mut store = MemoryStore::new();
        store.set(OWNER, USDC, ROUTER, MAX_ALLOWANCE, 0, 0).unwrap();
        store.clear(OWNER, USDC, ROUTER, 5);

        let locked = store.allowance(OWNER, USDC, ROUTER);
        assert_eq!(locked.expiration, LOCKED_EXPIRATION);
        assert_eq!(locked.amount, U160::ZERO);

        assert_eq!(
            store.set(OWNER, USDC, ROUTER, U160::from(10), 0, 6),
            Err(AllowanceError::Locked)
        );
        assert_eq!(
            store.consume(OWNER, USDC, ROUTER, U160::ZERO, 7),
            Err(AllowanceError::Locked)
        );

        assert!(store.unlock(OWNER, USDC, ROUTER, 8));
        assert!(!store.unlock(OWNER, USDC, ROUTER, 9));
        store.set(OWNER, USDC, ROUTER, U160::from(10), 0, 10).unwrap();
        store.consume(OWNER, USDC, ROUTER, U160::from(10), 11).unwrap();
    }
}
