pub mod tokens;
pub mod tree;
pub mod users;

pub use permit3_constants::test_utils as test_constants;

use permit3_constants::VerifierConfig;
use permit3_engine::{MemoryStore, PermitEngine};
use tokens::MemoryTokens;
use tracing_subscriber::EnvFilter;

/// An engine over in-memory state, recovering real signatures.
pub type TestEngine = PermitEngine<MemoryStore, MemoryTokens>;

/// Make an engine for `config`, with `tokens` as the starting balances.
pub fn test_engine(config: VerifierConfig, tokens: MemoryTokens) -> TestEngine {
    PermitEngine::new(config, MemoryStore::new(), tokens)
}

/// Install a fmt subscriber filtered by `RUST_LOG`. Safe to call from
/// several tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
