//! Availability oracle module
//!
//! One remote verification path plus two heuristic fallback tiers. A
//! check never fails outright: the basic heuristic is the terminal
//! fallback and always produces a verdict.

pub mod authority;
pub mod checker;
pub mod heuristic;

// Re-export main functionality
pub use authority::HttpAuthority;
pub use checker::AvailabilityOracle;
pub use heuristic::Heuristics;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for the remote validation authority
///
/// Returns `Ok(true)` when the authority reports the username available,
/// `Ok(false)` when taken. Any transport or interpretation failure is
/// surfaced as an error so the oracle can pick a fallback tier.
#[async_trait]
pub trait RemoteAuthority: Send + Sync {
    /// Ask the authority whether a username is available
    async fn validate(&self, username: &str) -> Result<bool>;
}
