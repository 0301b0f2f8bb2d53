use crate::PermitError;
use alloy::primitives::{Address, Signature, B256};
use permit3_types::signing_digest;

/// Recovers the account that signed an EIP-712 structure.
///
/// Implementors build the final digest from the domain separator and struct
/// hash, and return the signer. Comparing the signer against the expected
/// owner is left to the caller.
pub trait SignatureAuthority {
    /// Recover the signer of `struct_hash` under `domain_separator`.
    fn recover_signer(
        &self,
        domain_separator: B256,
        struct_hash: B256,
        signature: &[u8],
    ) -> Result<Address, PermitError>;
}

/// secp256k1 recovery over 65-byte `r || s || v` signatures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ecrecover;

impl SignatureAuthority for Ecrecover {
    fn recover_signer(
        &self,
        domain_separator: B256,
        struct_hash: B256,
        signature: &[u8],
    ) -> Result<Address, PermitError> {
        let digest = signing_digest(domain_separator, struct_hash);
        let signature = Signature::from_raw(signature)?;
        Ok(signature.recover_address_from_prehash(&digest)?)
    }
}
