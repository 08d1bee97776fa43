//! Search orchestrator: generate, dedup, check, repeat until satisfied

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use super::state::SearchState;
use super::CancelHandle;
use crate::error::{Result, UsernameForgeError};
use crate::generate::UsernameGenerator;
use crate::oracle::AvailabilityOracle;
use crate::sequencer::Sequencer;
use crate::types::{
    CheckConfig, CheckMethod, CheckResult, ProgressSnapshot, SearchCompletion, SearchConfig,
    SearchOutcome, Style,
};

/// Upper bound on the requested count for the inbound trigger
pub const MAX_REQUEST_COUNT: usize = 10;

/// Shared wiring for search runs: the generator plus the process-wide
/// sequencer/oracle pair. Cheap to clone; concurrent runs sharing one
/// context interleave on the same remote-call budget.
#[derive(Clone)]
pub struct SearchContext {
    generator: UsernameGenerator,
    sequencer: Arc<Sequencer>,
    config: SearchConfig,
}

impl SearchContext {
    /// Build a context wired to the HTTP validation authority
    pub fn new(check: CheckConfig, config: SearchConfig) -> Self {
        let min_interval = check.min_interval;
        let oracle = Arc::new(AvailabilityOracle::new(check));
        Self::with_oracle(oracle, min_interval, config)
    }

    /// Build a context around an explicit oracle (mockable seam)
    pub fn with_oracle(
        oracle: Arc<AvailabilityOracle>,
        min_interval: Duration,
        config: SearchConfig,
    ) -> Self {
        Self {
            generator: UsernameGenerator::new(),
            sequencer: Sequencer::new(oracle, min_interval),
            config,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new(CheckConfig::default(), SearchConfig::default())
    }
}

/// Orchestrator for one search run
pub struct SearchOrchestrator {
    context: SearchContext,
    cancel: CancelHandle,
}

impl SearchOrchestrator {
    pub fn new(context: SearchContext) -> Self {
        Self {
            context,
            cancel: CancelHandle::new(),
        }
    }

    /// Handle for cancelling this run from another task
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Inbound trigger: validate the requested count, then search.
    pub async fn request_usernames<F>(
        &self,
        style: Style,
        count: usize,
        on_progress: F,
    ) -> Result<SearchOutcome>
    where
        F: Fn(&ProgressSnapshot) -> Result<()> + Send + Sync,
    {
        if count < 1 || count > MAX_REQUEST_COUNT {
            return Err(UsernameForgeError::validation(format!(
                "count must be between 1 and {}, got {}",
                MAX_REQUEST_COUNT, count
            )));
        }
        self.search(style, count, on_progress).await
    }

    /// Run the search loop until `target` available names are found, the
    /// attempt ceiling is hit, or the run is cancelled.
    ///
    /// A single-candidate failure never aborts the run: the oracle has
    /// already degraded anticipated failures to heuristic verdicts, and
    /// anything unexpected past that is recorded fail-open as available
    /// with an unverified-error marker.
    pub async fn search<F>(
        &self,
        style: Style,
        target: usize,
        on_progress: F,
    ) -> Result<SearchOutcome>
    where
        F: Fn(&ProgressSnapshot) -> Result<()> + Send + Sync,
    {
        let started_at = Utc::now();
        let config = &self.context.config;
        let mut state = SearchState::new(target);

        tracing::info!(style = %style, target = %target, "Starting username search");

        let completion = loop {
            if state.satisfied() {
                break SearchCompletion::Satisfied;
            }
            if self.cancel.is_cancelled() {
                break SearchCompletion::Cancelled;
            }
            if let Some(max) = config.max_attempts {
                if state.attempts() >= max {
                    break SearchCompletion::Exhausted;
                }
            }

            let candidate = self.context.generator.generate(style);
            state.bump_attempts();

            // Already checked this run: retry without re-checking
            if state.already_checked(&candidate) {
                continue;
            }

            let result = match self.context.sequencer.enqueue(&candidate).await {
                Ok(result) => result,
                Err(e) => {
                    // Fail open: count the candidate as available but
                    // mark that no verdict backs it.
                    tracing::error!(
                        username = %candidate,
                        error = %e,
                        "Check failed past the oracle, recording fail-open"
                    );
                    CheckResult {
                        candidate: candidate.clone(),
                        available: true,
                        verified: false,
                        method: CheckMethod::ErrorFallback,
                        checked_at: Utc::now(),
                    }
                }
            };
            state.record(result);

            if state.attempts() % config.progress_interval == 0 {
                let snapshot = ProgressSnapshot {
                    found: state.available_count(),
                    target,
                    total_checked: state.total_checked(),
                    attempts: state.attempts(),
                };
                // Best-effort delivery; a failed snapshot never aborts the search
                if let Err(e) = on_progress(&snapshot) {
                    tracing::warn!(error = %e, "Failed to deliver progress snapshot");
                }
            }
        };

        let outcome = SearchOutcome {
            style,
            target,
            available: state.available(),
            taken_sample: state.taken_sample(config.taken_sample_size),
            total_checked: state.total_checked(),
            attempts: state.attempts(),
            completion,
            started_at,
            finished_at: Utc::now(),
        };

        tracing::info!(
            style = %style,
            found = %outcome.available.len(),
            total_checked = %outcome.total_checked,
            attempts = %outcome.attempts,
            completion = %outcome.completion,
            "Username search finished"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::RemoteAuthority;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    /// Authority that reports availability for candidates containing a digit
    struct DigitAuthority;

    #[async_trait]
    impl RemoteAuthority for DigitAuthority {
        async fn validate(&self, username: &str) -> crate::error::Result<bool> {
            Ok(username.chars().any(|c| c.is_ascii_digit()))
        }
    }

    /// Authority that always rejects with a rate-limit error
    struct RateLimitedAuthority;

    #[async_trait]
    impl RemoteAuthority for RateLimitedAuthority {
        async fn validate(&self, _username: &str) -> crate::error::Result<bool> {
            Err(UsernameForgeError::rate_limit("try again later", None))
        }
    }

    fn context_with(authority: Arc<dyn RemoteAuthority>, config: SearchConfig) -> SearchContext {
        let oracle = Arc::new(AvailabilityOracle::with_authority(authority));
        SearchContext::with_oracle(oracle, Duration::from_millis(1), config)
    }

    #[tokio::test]
    async fn test_search_reaches_exact_target() {
        let context = context_with(Arc::new(DigitAuthority), SearchConfig::default());
        let orchestrator = SearchOrchestrator::new(context);

        let outcome = orchestrator
            .search(Style::FiveChar, 4, |_| Ok(()))
            .await
            .unwrap();

        assert_eq!(outcome.completion, SearchCompletion::Satisfied);
        assert_eq!(outcome.available.len(), 4);
        assert!(outcome.total_checked >= 4);
        assert!(outcome.attempts >= outcome.total_checked);
        // Available-subset size never exceeds the target
        assert!(outcome.available.iter().all(|r| r.available));
    }

    #[tokio::test]
    async fn test_request_usernames_validates_count() {
        let context = context_with(Arc::new(DigitAuthority), SearchConfig::default());
        let orchestrator = SearchOrchestrator::new(context);

        let err = orchestrator
            .request_usernames(Style::Mixed, 0, |_| Ok(()))
            .await
            .unwrap_err();
        assert!(matches!(err, UsernameForgeError::Validation { .. }));

        let err = orchestrator
            .request_usernames(Style::Mixed, 11, |_| Ok(()))
            .await
            .unwrap_err();
        assert!(matches!(err, UsernameForgeError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_progress_snapshots_every_tenth_attempt() {
        let config = SearchConfig {
            max_attempts: Some(35),
            ..Default::default()
        };
        let context = context_with(Arc::new(RateLimitedAuthority), config);
        let orchestrator = SearchOrchestrator::new(context);

        let attempts_seen: Mutex<Vec<u64>> = Mutex::new(Vec::new());
        let outcome = orchestrator
            .search(Style::Gaming, 1000, |snapshot| {
                attempts_seen.lock().push(snapshot.attempts);
                Ok(())
            })
            .await
            .unwrap();

        assert_eq!(outcome.completion, SearchCompletion::Exhausted);
        let seen = attempts_seen.lock();
        assert!(!seen.is_empty());
        assert!(seen.iter().all(|a| a % 10 == 0));
    }

    #[tokio::test]
    async fn test_progress_failure_does_not_abort_search() {
        let context = context_with(Arc::new(DigitAuthority), SearchConfig::default());
        let orchestrator = SearchOrchestrator::new(context);

        let outcome = orchestrator
            .search(Style::Mixed, 3, |_| {
                Err(UsernameForgeError::progress("sink closed"))
            })
            .await
            .unwrap();

        assert_eq!(outcome.completion, SearchCompletion::Satisfied);
        assert_eq!(outcome.available.len(), 3);
    }

    #[tokio::test]
    async fn test_exhaustion_returns_partial_results() {
        let config = SearchConfig {
            max_attempts: Some(5),
            ..Default::default()
        };
        let context = context_with(Arc::new(RateLimitedAuthority), config);
        let orchestrator = SearchOrchestrator::new(context);

        let outcome = orchestrator
            .search(Style::Random, 1000, |_| Ok(()))
            .await
            .unwrap();

        assert_eq!(outcome.completion, SearchCompletion::Exhausted);
        assert!(outcome.attempts <= 5 + 1);
        assert!(outcome.available.len() < 1000);
        // Degraded checks are all unverified
        for result in outcome.available.iter().chain(outcome.taken_sample.iter()) {
            assert!(!result.verified);
        }
    }

    #[tokio::test]
    async fn test_cancellation_stops_the_loop() {
        let context = context_with(Arc::new(RateLimitedAuthority), SearchConfig::default());
        let orchestrator = SearchOrchestrator::new(context);

        // Cancel before starting; the loop observes the flag first thing
        orchestrator.cancel_handle().cancel();
        let outcome = orchestrator
            .search(Style::Cool, 1000, |_| Ok(()))
            .await
            .unwrap();

        assert_eq!(outcome.completion, SearchCompletion::Cancelled);
        assert_eq!(outcome.attempts, 0);
    }

    #[tokio::test]
    async fn test_zero_target_is_trivially_satisfied() {
        let context = context_with(Arc::new(DigitAuthority), SearchConfig::default());
        let orchestrator = SearchOrchestrator::new(context);

        let outcome = orchestrator.search(Style::FiveChar, 0, |_| Ok(())).await.unwrap();
        assert_eq!(outcome.completion, SearchCompletion::Satisfied);
        assert!(outcome.is_empty());
    }
}
