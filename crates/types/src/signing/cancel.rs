use crate::{
    permit3_domain,
    signing::{chain_proofs, default_deadline},
    NoncesToInvalidate, SigningError, UnhingedCancel,
};
use alloy::{
    primitives::{Address, Bytes, B256, U256},
    signers::Signer,
    sol_types::SolStruct,
};
use permit3_proof::{compute_root, create_unhinged_root, ProofError, UnhingedProof};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One chain's slice of a signed cancellation. Mirrors
/// [`SignedPermit`](crate::SignedPermit), but marks salts as used instead of
/// applying permits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedCancel {
    /// The account whose salts are cancelled.
    pub owner: Address,
    /// Timestamp after which the cancellation can no longer be used.
    pub deadline: u64,
    /// This chain's salts.
    pub invalidations: NoncesToInvalidate,
    /// Proof from this chain's leaf to the unhinged root.
    pub proof: UnhingedProof,
    /// The owner's signature over the [`UnhingedCancel`].
    pub signature: Bytes,
}

impl SignedCancel {
    /// The chain this slice targets.
    pub const fn chain_id(&self) -> u64 {
        self.invalidations.chainId
    }

    /// The salts cancelled on this chain.
    pub fn salts(&self) -> &[B256] {
        &self.invalidations.salts
    }

    /// Recompute the unhinged root from the leaf and proof.
    pub fn unhinged_root(&self) -> Result<B256, ProofError> {
        compute_root(self.invalidations.leaf(), &self.proof)
    }

    /// The structure the owner signed, given the recomputed root.
    pub fn signed_struct(&self, unhinged_root: B256) -> UnhingedCancel {
        UnhingedCancel {
            owner: self.owner,
            deadline: U256::from(self.deadline),
            unhingedRoot: unhinged_root,
        }
    }
}

/// An UnsignedCancel collects salts to cancel on one or more chains, and
/// signs them with a single signature.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnsignedCancel {
    chains: Vec<(u64, Vec<B256>)>,
    deadline: Option<u64>,
    verifying_contract: Option<Address>,
}

impl UnsignedCancel {
    /// Get a new, empty UnsignedCancel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel a salt on a chain.
    pub fn with_salt(mut self, chain_id: u64, salt: B256) -> Self {
        match self.chains.iter_mut().find(|(id, _)| *id == chain_id) {
            Some((_, salts)) => salts.push(salt),
            None => self.chains.push((chain_id, vec![salt])),
        }
        self
    }

    /// Set the deadline.
    pub fn with_deadline(self, deadline: u64) -> Self {
        Self { deadline: Some(deadline), ..self }
    }

    /// Set the Permit3 contract address.
    pub fn with_verifying_contract(self, verifying_contract: Address) -> Self {
        Self { verifying_contract: Some(verifying_contract), ..self }
    }

    /// Sign the cancellation, producing one [`SignedCancel`] per chain.
    pub async fn sign<S: Signer>(
        &self,
        signer: &S,
    ) -> Result<HashMap<u64, SignedCancel>, SigningError> {
        let verifying_contract =
            self.verifying_contract.ok_or(SigningError::MissingVerifyingContract)?;
        let deadline = self.deadline.unwrap_or_else(default_deadline);

        let invalidations: Vec<NoncesToInvalidate> = self
            .chains
            .iter()
            .map(|(chain_id, salts)| NoncesToInvalidate::new(*chain_id, salts.clone()))
            .collect();
        let leaves: Vec<B256> = invalidations.iter().map(NoncesToInvalidate::leaf).collect();
        let unhinged_root =
            create_unhinged_root(leaves.iter().copied()).ok_or(SigningError::NoChains)?;
        let proofs = chain_proofs(&leaves)?;

        let owner = signer.address();
        let signing_hash =
            UnhingedCancel { owner, deadline: U256::from(deadline), unhingedRoot: unhinged_root }
                .eip712_signing_hash(&permit3_domain(verifying_contract));
        let signature: Bytes = signer.sign_hash(&signing_hash).await?.as_bytes().into();

        Ok(invalidations
            .into_iter()
            .zip(proofs)
            .map(|(invalidations, proof)| {
                (
                    invalidations.chainId,
                    SignedCancel {
                        owner,
                        deadline,
                        invalidations,
                        proof,
                        signature: signature.clone(),
                    },
                )
            })
            .collect())
    }
}
