use permit3_proof::ProofError;

/// An error that can occur when signing a permit or a cancellation.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// Missing verifying contract.
    #[error(
        "Verifying contract is missing. Populate it by calling with_verifying_contract before attempting to sign"
    )]
    MissingVerifyingContract,
    /// Nothing to sign.
    #[error("No chains to sign for. Add at least one chain before attempting to sign")]
    NoChains,
    /// Error assembling a chain's proof.
    #[error(transparent)]
    Proof(#[from] ProofError),
    /// Error signing the unhinged root.
    #[error(transparent)]
    Signer(#[from] alloy::signers::Error),
}
