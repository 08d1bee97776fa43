//! Remote-call sequencer
//!
//! The remote authority's rate budget is a process-wide resource, so all
//! checks funnel through one FIFO queue drained by a single task, with a
//! minimum gap enforced between the completion of one check and the
//! start of the next. Heuristic-only work performs no outbound call and
//! is not throttled beyond its place in the queue.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tokio::sync::oneshot;

use crate::error::{Result, UsernameForgeError};
use crate::oracle::AvailabilityOracle;
use crate::types::CheckResult;

struct Job {
    candidate: String,
    done: oneshot::Sender<CheckResult>,
}

/// FIFO sequencer over a shared availability oracle
pub struct Sequencer {
    oracle: Arc<AvailabilityOracle>,
    min_interval: Duration,
    queue: Mutex<VecDeque<Job>>,
    draining: Mutex<bool>,
    last_completed: Mutex<Option<Instant>>,
}

impl Sequencer {
    /// Create a new sequencer draining into the given oracle
    pub fn new(oracle: Arc<AvailabilityOracle>, min_interval: Duration) -> Arc<Self> {
        Arc::new(Self {
            oracle,
            min_interval,
            queue: Mutex::new(VecDeque::new()),
            draining: Mutex::new(false),
            last_completed: Mutex::new(None),
        })
    }

    /// Queue a candidate for checking and wait for its result.
    ///
    /// Callable concurrently; checks are issued strictly one at a time
    /// in enqueue order. A failed check resolves only its own caller,
    /// the rest of the queue keeps draining.
    pub async fn enqueue(self: &Arc<Self>, candidate: &str) -> Result<CheckResult> {
        let (tx, rx) = oneshot::channel();
        {
            let mut queue = self.queue.lock();
            queue.push_back(Job {
                candidate: candidate.to_string(),
                done: tx,
            });
        }
        self.spawn_drain();

        rx.await
            .map_err(|_| UsernameForgeError::internal("sequencer dropped a pending check"))
    }

    /// Start the drain task unless one is already running
    fn spawn_drain(self: &Arc<Self>) {
        let mut draining = self.draining.lock();
        if *draining {
            return;
        }
        *draining = true;

        let sequencer = Arc::clone(self);
        tokio::spawn(async move {
            sequencer.drain().await;
        });
    }

    async fn drain(self: Arc<Self>) {
        loop {
            let job = {
                let mut queue = self.queue.lock();
                queue.pop_front()
            };

            let Some(job) = job else {
                // Re-check under the drain flag so an enqueue racing with
                // shutdown is not left without a drain task.
                let mut draining = self.draining.lock();
                if self.queue.lock().is_empty() {
                    *draining = false;
                    return;
                }
                continue;
            };

            self.pace().await;

            let result = self.oracle.check(&job.candidate).await;
            *self.last_completed.lock() = Some(Instant::now());

            // The caller may have stopped awaiting; that only drops this job
            if job.done.send(result).is_err() {
                tracing::debug!(username = %job.candidate, "Check result dropped by caller");
            }
        }
    }

    /// Sleep out the remainder of the minimum inter-call gap
    async fn pace(&self) {
        let wait = {
            let last = self.last_completed.lock();
            (*last).map(|t| self.min_interval.saturating_sub(t.elapsed()))
        };
        if let Some(wait) = wait {
            if !wait.is_zero() {
                tokio::time::sleep(wait).await;
            }
        }
    }

    /// Number of checks currently waiting in the queue
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }
}
