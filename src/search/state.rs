//! Per-run search state: results in check order, dedup set, counters

use std::collections::HashSet;

use crate::types::CheckResult;

/// State owned by exactly one search run. Mutated only by its
/// orchestrator and discarded when the run completes.
#[derive(Debug, Default)]
pub struct SearchState {
    /// All results seen this run, in check order
    results: Vec<CheckResult>,
    /// Candidate strings already checked
    checked: HashSet<String>,
    /// Attempts including duplicate skips
    attempts: u64,
    /// Target count of available names
    target: usize,
}

impl SearchState {
    pub fn new(target: usize) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }

    /// Count an attempt (duplicate skips included)
    pub fn bump_attempts(&mut self) -> u64 {
        self.attempts += 1;
        self.attempts
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Whether this candidate was already checked this run
    pub fn already_checked(&self, candidate: &str) -> bool {
        self.checked.contains(candidate)
    }

    /// Record a check result. Returns false for a duplicate candidate,
    /// which is never recorded twice.
    pub fn record(&mut self, result: CheckResult) -> bool {
        if !self.checked.insert(result.candidate.clone()) {
            return false;
        }
        self.results.push(result);
        true
    }

    pub fn total_checked(&self) -> u64 {
        self.results.len() as u64
    }

    pub fn available_count(&self) -> usize {
        self.results.iter().filter(|r| r.available).count()
    }

    pub fn satisfied(&self) -> bool {
        self.available_count() >= self.target
    }

    /// Available results in discovery order
    pub fn available(&self) -> Vec<CheckResult> {
        self.results.iter().filter(|r| r.available).cloned().collect()
    }

    /// First `n` taken results encountered, for user context
    pub fn taken_sample(&self, n: usize) -> Vec<CheckResult> {
        self.results
            .iter()
            .filter(|r| !r.available)
            .take(n)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CheckMethod;
    use chrono::Utc;

    fn result(candidate: &str, available: bool) -> CheckResult {
        CheckResult {
            candidate: candidate.to_string(),
            available,
            verified: true,
            method: CheckMethod::Remote,
            checked_at: Utc::now(),
        }
    }

    #[test]
    fn test_no_duplicate_candidates() {
        let mut state = SearchState::new(3);
        assert!(state.record(result("abc12", true)));
        assert!(!state.record(result("abc12", false)));
        assert_eq!(state.total_checked(), 1);
        assert!(state.already_checked("abc12"));
        assert!(!state.already_checked("xyz34"));
    }

    #[test]
    fn test_satisfied_counts_only_available() {
        let mut state = SearchState::new(2);
        state.record(result("one11", true));
        state.record(result("two22", false));
        assert!(!state.satisfied());
        state.record(result("tri33", true));
        assert!(state.satisfied());
        assert_eq!(state.available_count(), 2);
        assert_eq!(state.total_checked(), 3);
    }

    #[test]
    fn test_discovery_order_preserved() {
        let mut state = SearchState::new(5);
        state.record(result("b2222", true));
        state.record(result("a1111", false));
        state.record(result("c3333", true));
        let available = state.available();
        assert_eq!(available[0].candidate, "b2222");
        assert_eq!(available[1].candidate, "c3333");
    }

    #[test]
    fn test_taken_sample_is_first_encountered() {
        let mut state = SearchState::new(1);
        for i in 0..6 {
            state.record(result(&format!("tkn{:02}", i), false));
        }
        let sample = state.taken_sample(3);
        assert_eq!(sample.len(), 3);
        assert_eq!(sample[0].candidate, "tkn00");
        assert_eq!(sample[2].candidate, "tkn02");
    }

    #[test]
    fn test_attempts_counter() {
        let mut state = SearchState::new(1);
        assert_eq!(state.bump_attempts(), 1);
        assert_eq!(state.bump_attempts(), 2);
        assert_eq!(state.attempts(), 2);
    }
}
