use crate::{
    permit3_domain,
    signing::{chain_proofs, default_deadline, default_salt},
    ChainPermits, SigningError, SpendTransferPermit, UnhingedPermit,
};
use alloy::{
    primitives::{Address, Bytes, B256, U256},
    signers::Signer,
    sol_types::SolStruct,
};
use permit3_proof::{compute_root, create_unhinged_root, ProofError, UnhingedProof};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A SignedPermit is one chain's slice of a signed permit.
///
/// It carries everything a verifier on that chain needs: the chain's permits,
/// the proof linking their leaf to the signed unhinged root, and the owner's
/// signature over that root. The root itself is not transmitted, verifiers
/// recompute it from the leaf and proof.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedPermit {
    /// The account granting the permits.
    pub owner: Address,
    /// Timestamp after which the permit can no longer be used.
    pub deadline: u64,
    /// This chain's permits.
    pub chain_permits: ChainPermits,
    /// Proof from this chain's leaf to the unhinged root.
    pub proof: UnhingedProof,
    /// The owner's signature over the [`UnhingedPermit`].
    pub signature: Bytes,
}

impl SignedPermit {
    /// The salt consumed when this permit is applied.
    pub const fn salt(&self) -> B256 {
        self.chain_permits.salt
    }

    /// The chain this slice targets.
    pub const fn chain_id(&self) -> u64 {
        self.chain_permits.chainId
    }

    /// The leaf committing to this chain's permits.
    pub fn leaf(&self) -> B256 {
        self.chain_permits.leaf()
    }

    /// Recompute the unhinged root from the leaf and proof.
    pub fn unhinged_root(&self) -> Result<B256, ProofError> {
        compute_root(self.leaf(), &self.proof)
    }

    /// The structure the owner signed, given the recomputed root.
    pub fn signed_struct(&self, unhinged_root: B256) -> UnhingedPermit {
        UnhingedPermit {
            owner: self.owner,
            salt: self.salt(),
            deadline: U256::from(self.deadline),
            unhingedRoot: unhinged_root,
        }
    }
}

/// An UnsignedPermit collects permits for one or more chains, and signs them
/// all with a single signature.
///
/// Chains are ordered by first insertion. That order is the canonical chain
/// order of the unhinged root, so every verifier receives a proof consistent
/// with it.
///
/// ```no_run
/// # use alloy::{primitives::{Address, U160}, signers::local::PrivateKeySigner};
/// # use permit3_types::{SpendTransferPermit, UnsignedPermit};
/// # async fn example(signer: PrivateKeySigner, usdc: Address, router: Address) -> Result<(), Box<dyn std::error::Error>> {
/// let permits = UnsignedPermit::new()
///     .with_verifying_contract(Address::repeat_byte(0x83))
///     .with_permit(1, SpendTransferPermit::allowance(usdc, router, U160::from(100), 0))
///     .with_permit(10, SpendTransferPermit::transfer(usdc, router, U160::from(5)))
///     .sign(&signer)
///     .await?;
/// assert_eq!(permits.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnsignedPermit {
    chains: Vec<(u64, Vec<SpendTransferPermit>)>,
    salt: Option<B256>,
    deadline: Option<u64>,
    verifying_contract: Option<Address>,
}

impl UnsignedPermit {
    /// Get a new, empty UnsignedPermit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a permit for a chain.
    pub fn with_permit(mut self, chain_id: u64, permit: SpendTransferPermit) -> Self {
        match self.chains.iter_mut().find(|(id, _)| *id == chain_id) {
            Some((_, permits)) => permits.push(permit),
            None => self.chains.push((chain_id, vec![permit])),
        }
        self
    }

    /// Add several permits for a chain.
    pub fn with_permits<I>(self, chain_id: u64, permits: I) -> Self
    where
        I: IntoIterator<Item = SpendTransferPermit>,
    {
        permits.into_iter().fold(self, |this, permit| this.with_permit(chain_id, permit))
    }

    /// Set the salt. If unset, the current time in microseconds is used.
    pub fn with_salt(self, salt: B256) -> Self {
        Self { salt: Some(salt), ..self }
    }

    /// Set the deadline. If unset, the permit expires
    /// [`DEFAULT_DEADLINE_OFFSET`](crate::DEFAULT_DEADLINE_OFFSET) seconds
    /// after signing.
    pub fn with_deadline(self, deadline: u64) -> Self {
        Self { deadline: Some(deadline), ..self }
    }

    /// Set the Permit3 contract address.
    /// MUST call this before signing, cannot be inferred.
    pub fn with_verifying_contract(self, verifying_contract: Address) -> Self {
        Self { verifying_contract: Some(verifying_contract), ..self }
    }

    /// Chain ids in canonical order.
    pub fn chain_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.chains.iter().map(|(id, _)| *id)
    }

    /// Sign the permits, producing one [`SignedPermit`] per chain.
    pub async fn sign<S: Signer>(
        &self,
        signer: &S,
    ) -> Result<HashMap<u64, SignedPermit>, SigningError> {
        let verifying_contract =
            self.verifying_contract.ok_or(SigningError::MissingVerifyingContract)?;
        let salt = self.salt.unwrap_or_else(default_salt);
        let deadline = self.deadline.unwrap_or_else(default_deadline);

        let chain_permits: Vec<ChainPermits> = self
            .chains
            .iter()
            .map(|(chain_id, permits)| ChainPermits::new(*chain_id, salt, permits.clone()))
            .collect();
        let leaves: Vec<B256> = chain_permits.iter().map(ChainPermits::leaf).collect();
        let unhinged_root =
            create_unhinged_root(leaves.iter().copied()).ok_or(SigningError::NoChains)?;
        let proofs = chain_proofs(&leaves)?;

        let owner = signer.address();
        let signing_hash = UnhingedPermit {
            owner,
            salt,
            deadline: U256::from(deadline),
            unhingedRoot: unhinged_root,
        }
        .eip712_signing_hash(&permit3_domain(verifying_contract));

        let signature: Bytes = signer.sign_hash(&signing_hash).await?.as_bytes().into();

        Ok(chain_permits
            .into_iter()
            .zip(proofs)
            .map(|(chain_permits, proof)| {
                (
                    chain_permits.chainId,
                    SignedPermit {
                        owner,
                        deadline,
                        chain_permits,
                        proof,
                        signature: signature.clone(),
                    },
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        primitives::U160,
        signers::local::PrivateKeySigner,
    };
    use permit3_constants::test_utils::{
        ROUTER, TEST_CHAIN_A_ID, TEST_CHAIN_B_ID, TEST_CHAIN_C_ID, TEST_PERMIT3_ADDRESS, USDC,
        WETH,
    };

    fn signer() -> PrivateKeySigner {
        PrivateKeySigner::from_bytes(&B256::repeat_byte(1)).unwrap()
    }

    #[test]
    fn permits_group_by_chain() {
        let unsigned = UnsignedPermit::new()
            .with_permit(TEST_CHAIN_B_ID, SpendTransferPermit::lock(USDC, ROUTER))
            .with_permit(TEST_CHAIN_A_ID, SpendTransferPermit::lock(WETH, ROUTER))
            .with_permit(TEST_CHAIN_B_ID, SpendTransferPermit::lock(WETH, ROUTER));
        assert_eq!(unsigned.chain_ids().collect::<Vec<_>>(), vec![TEST_CHAIN_B_ID, TEST_CHAIN_A_ID]);
    }

    #[tokio::test]
    async fn missing_contract() {
        let err = UnsignedPermit::new()
            .with_permit(TEST_CHAIN_A_ID, SpendTransferPermit::lock(USDC, ROUTER))
            .sign(&signer())
            .await
            .unwrap_err();
        assert!(matches!(err, SigningError::MissingVerifyingContract));
    }

    #[tokio::test]
    async fn no_chains() {
        let err = UnsignedPermit::new()
            .with_verifying_contract(TEST_PERMIT3_ADDRESS)
            .sign(&signer())
            .await
            .unwrap_err();
        assert!(matches!(err, SigningError::NoChains));
    }

    #[tokio::test]
    async fn signs_one_root_for_all_chains() {
        let signer = signer();
        let signed = UnsignedPermit::new()
            .with_verifying_contract(TEST_PERMIT3_ADDRESS)
            .with_salt(B256::repeat_byte(0x5a))
            .with_deadline(1_000)
            .with_permit(
                TEST_CHAIN_A_ID,
                SpendTransferPermit::allowance(USDC, ROUTER, U160::from(100), 0),
            )
            .with_permit(TEST_CHAIN_B_ID, SpendTransferPermit::transfer(WETH, ROUTER, U160::from(1)))
            .with_permit(TEST_CHAIN_C_ID, SpendTransferPermit::lock(USDC, ROUTER))
            .sign(&signer)
            .await
            .unwrap();

        assert_eq!(signed.len(), 3);
        let roots: Vec<B256> =
            signed.values().map(|permit| permit.unhinged_root().unwrap()).collect();
        assert!(roots.windows(2).all(|pair| pair[0] == pair[1]));

        let domain = permit3_domain(TEST_PERMIT3_ADDRESS);
        for permit in signed.values() {
            assert_eq!(permit.owner, signer.address());
            assert_eq!(permit.deadline, 1_000);
            assert_eq!(permit.salt(), B256::repeat_byte(0x5a));

            let hash = permit.signed_struct(roots[0]).eip712_signing_hash(&domain);
            let signature = alloy::primitives::Signature::from_raw(&permit.signature).unwrap();
            assert_eq!(signature.recover_address_from_prehash(&hash).unwrap(), signer.address());
        }
    }

    #[tokio::test]
    async fn serde_round_trip() {
        let signed = UnsignedPermit::new()
            .with_verifying_contract(TEST_PERMIT3_ADDRESS)
            .with_permit(TEST_CHAIN_A_ID, SpendTransferPermit::lock(USDC, ROUTER))
            .sign(&signer())
            .await
            .unwrap()
            .remove(&TEST_CHAIN_A_ID)
            .unwrap();

        let json = serde_json::to_string(&signed).unwrap();
        let back: SignedPermit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, signed);
        assert!(back.proof.is_empty());
    }
}
