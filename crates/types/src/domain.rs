use alloy::{
    primitives::{keccak256, Address, B256, U256},
    sol_types::Eip712Domain,
};
use permit3_constants::{CROSS_CHAIN_DOMAIN_ID, PERMIT3_NAME, PERMIT3_VERSION};

/// The EIP-712 domain of a Permit3 deployment.
///
/// The domain chain id is [`CROSS_CHAIN_DOMAIN_ID`] on every chain, so the
/// same signature verifies on each of them.
pub fn permit3_domain(verifying_contract: Address) -> Eip712Domain {
    Eip712Domain {
        name: Some(PERMIT3_NAME.into()),
        version: Some(PERMIT3_VERSION.into()),
        chain_id: Some(U256::from(CROSS_CHAIN_DOMAIN_ID)),
        verifying_contract: Some(verifying_contract),
        salt: None,
    }
}

/// The EIP-712 domain separator of a Permit3 deployment.
pub fn domain_separator(verifying_contract: Address) -> B256 {
    permit3_domain(verifying_contract).hash_struct()
}

/// The final EIP-712 digest: `keccak256(0x1901 || domainSeparator || structHash)`.
pub fn signing_digest(domain_separator: B256, struct_hash: B256) -> B256 {
    let mut buf = [0u8; 66];
    buf[0] = 0x19;
    buf[1] = 0x01;
    buf[2..34].copy_from_slice(domain_separator.as_slice());
    buf[34..].copy_from_slice(struct_hash.as_slice());
    keccak256(buf)
}
