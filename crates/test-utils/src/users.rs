use alloy::{
    primitives::{Address, B256},
    signers::local::PrivateKeySigner,
};
use std::sync::LazyLock;

/// Make a wallet with a deterministic keypair.
pub fn make_wallet(i: u8) -> PrivateKeySigner {
    PrivateKeySigner::from_bytes(&B256::repeat_byte(i)).unwrap()
}

/// Test signers.
pub static TEST_SIGNERS: LazyLock<[PrivateKeySigner; 4]> =
    LazyLock::new(|| [make_wallet(1), make_wallet(2), make_wallet(3), make_wallet(4)]);

/// Addresses of the [`TEST_SIGNERS`].
pub static TEST_USERS: LazyLock<[Address; 4]> =
    LazyLock::new(|| TEST_SIGNERS.each_ref().map(|signer| signer.address()));
