//! Username Forge - styled username generation and availability checking
//!
//! Generates username candidates in a requested style and verifies them
//! against a remote validation authority, degrading to heuristic verdicts
//! when the authority is slow, rate-limiting, or inconsistent.

pub mod error;
pub mod generate;
pub mod oracle;
pub mod search;
pub mod sequencer;
pub mod types;

// Re-export commonly used types
pub use error::{Result, UsernameForgeError};
pub use types::{
    CheckConfig, CheckMethod, CheckResult, ProgressSnapshot, SearchCompletion, SearchConfig,
    SearchOutcome, Style,
};

// Re-export main functionality
pub use generate::UsernameGenerator;
pub use oracle::{AvailabilityOracle, RemoteAuthority};
pub use search::{CancelHandle, SearchContext, SearchOrchestrator};
pub use sequencer::Sequencer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
