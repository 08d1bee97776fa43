//! Availability oracle: remote check with tiered heuristic degradation

use std::sync::Arc;

use chrono::Utc;

use super::heuristic::Heuristics;
use super::{HttpAuthority, RemoteAuthority};
use crate::types::{CheckConfig, CheckMethod, CheckResult};

/// Availability oracle for a single remote authority.
///
/// `check` always resolves: a remote failure degrades to a heuristic
/// verdict instead of propagating. Escalation happens instead of
/// retrying the same remote call.
pub struct AvailabilityOracle {
    authority: Arc<dyn RemoteAuthority>,
    heuristics: Heuristics,
}

impl AvailabilityOracle {
    /// Create an oracle backed by the HTTP validation authority
    pub fn new(config: CheckConfig) -> Self {
        Self::with_authority(Arc::new(HttpAuthority::new(config)))
    }

    /// Create an oracle with an explicit authority (mockable seam)
    pub fn with_authority(authority: Arc<dyn RemoteAuthority>) -> Self {
        Self {
            authority,
            heuristics: Heuristics::new(),
        }
    }

    /// Check one candidate for availability
    pub async fn check(&self, candidate: &str) -> CheckResult {
        match self.authority.validate(candidate).await {
            Ok(available) => {
                tracing::debug!(
                    username = %candidate,
                    available = %available,
                    method = "remote",
                    "Availability check completed"
                );
                CheckResult {
                    candidate: candidate.to_string(),
                    available,
                    verified: true,
                    method: CheckMethod::Remote,
                    checked_at: Utc::now(),
                }
            }
            Err(e) => {
                let method = e.fallback_method();
                tracing::warn!(
                    username = %candidate,
                    error = %e,
                    tier = %method,
                    "Remote validation failed, degrading to heuristic"
                );

                let mut rng = rand::thread_rng();
                let available = match method {
                    CheckMethod::BasicHeuristic => self.heuristics.basic(candidate, &mut rng),
                    _ => self.heuristics.smart(candidate, &mut rng),
                };

                CheckResult {
                    candidate: candidate.to_string(),
                    available,
                    verified: false,
                    method,
                    checked_at: Utc::now(),
                }
            }
        }
    }
}

impl Default for AvailabilityOracle {
    fn default() -> Self {
        Self::new(CheckConfig::default())
    }
}
