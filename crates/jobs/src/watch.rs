//! Client-side polling loop.
//!
//! An explicit state machine driven by a fixed delay and torn down through
//! a [`CancellationToken`], instead of rescheduling callbacks and hoping
//! the runtime collects them. Cancelling has no effect on server-side
//! state: the job keeps running and its result record, if any, stays put.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::job::{JobError, JobId, PollOutcome};
use crate::poll::Poller;

/// Fixed delay between polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

// ---------------------------------------------------------------------------
// WatchState
// ---------------------------------------------------------------------------

/// Observable states of a polling session:
/// `Submitted → (Processing)* → Completed | Cancelled`.
#[derive(Debug, Clone, PartialEq)]
pub enum WatchState {
    /// No poll has answered yet.
    Submitted,
    /// At least one poll answered `processing`; another poll is scheduled.
    Processing,
    /// A terminal outcome was observed. The session is over.
    Completed(PollOutcome),
    /// The token was cancelled before a terminal outcome. The session is
    /// over; server-side state is untouched.
    Cancelled,
}

impl WatchState {
    pub fn is_final(&self) -> bool {
        matches!(self, WatchState::Completed(_) | WatchState::Cancelled)
    }
}

// ---------------------------------------------------------------------------
// JobWatcher
// ---------------------------------------------------------------------------

/// A polling session for one job.
///
/// No retry ceiling is enforced here: the protocol leaves timeout policy to
/// the caller, and the cancellation token is how a caller expresses it.
/// A session whose `step` fails (store unreachable) keeps its state and can
/// be stepped again once the caller decides to retry.
pub struct JobWatcher {
    poller: Arc<Poller>,
    job_id: JobId,
    interval: Duration,
    cancel: CancellationToken,
    state: WatchState,
}

impl JobWatcher {
    /// Create a session in the `Submitted` state with the default interval
    /// and a fresh cancellation token.
    pub fn new(poller: Arc<Poller>, job_id: JobId) -> Self {
        Self {
            poller,
            job_id,
            interval: DEFAULT_POLL_INTERVAL,
            cancel: CancellationToken::new(),
            state: WatchState::Submitted,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Handle for tearing the session down from elsewhere (e.g. the caller
    /// abandoning the page that started it).
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn state(&self) -> &WatchState {
        &self.state
    }

    /// Advance the state machine by one transition.
    ///
    /// From `Submitted`/`Processing`: poll once; a terminal outcome moves
    /// to `Completed`, a `processing` answer waits out the interval (or
    /// the token) and moves to `Processing`/`Cancelled`. Final states are
    /// absorbing.
    pub async fn step(&mut self) -> Result<&WatchState, JobError> {
        if self.state.is_final() {
            return Ok(&self.state);
        }

        if self.cancel.is_cancelled() {
            self.state = WatchState::Cancelled;
            return Ok(&self.state);
        }

        self.state = match self.poller.poll(&self.job_id).await? {
            PollOutcome::Processing => {
                tokio::select! {
                    () = self.cancel.cancelled() => WatchState::Cancelled,
                    () = tokio::time::sleep(self.interval) => WatchState::Processing,
                }
            }
            outcome => WatchState::Completed(outcome),
        };

        Ok(&self.state)
    }

    /// Run `step` until the session reaches a final state.
    ///
    /// Returns `Some(outcome)` on completion, `None` on cancellation.
    /// Errors propagate without consuming the session.
    pub async fn run(&mut self) -> Result<Option<PollOutcome>, JobError> {
        loop {
            match self.step().await? {
                WatchState::Completed(outcome) => return Ok(Some(outcome.clone())),
                WatchState::Cancelled => return Ok(None),
                WatchState::Submitted | WatchState::Processing => {}
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::memory::InMemoryResultStore;

    fn watcher(job_id: &str) -> (JobWatcher, Arc<InMemoryResultStore>) {
        let store = Arc::new(InMemoryResultStore::new());
        let poller = Arc::new(Poller::new(store.clone()));
        let watcher = JobWatcher::new(poller, JobId::from(job_id.to_string()))
            .with_interval(Duration::from_millis(5));
        (watcher, store)
    }

    #[tokio::test]
    async fn completes_immediately_when_record_exists() {
        let (mut watcher, store) = watcher("abc123");
        let outcome = PollOutcome::Success {
            result: json!({ "parcela": 2500 }),
        };
        store.complete(&JobId::from("abc123".to_string()), &outcome);

        let result = watcher.run().await.unwrap();

        assert_eq!(result, Some(outcome.clone()));
        assert_eq!(watcher.state(), &WatchState::Completed(outcome));
    }

    #[tokio::test]
    async fn transitions_through_processing_to_terminal() {
        let (mut watcher, store) = watcher("abc123");

        assert_eq!(watcher.state(), &WatchState::Submitted);

        // First poll: no record yet.
        watcher.step().await.unwrap();
        assert_eq!(watcher.state(), &WatchState::Processing);

        // The worker finishes between polls.
        store.complete(
            &JobId::from("abc123".to_string()),
            &PollOutcome::Error {
                error: "timeout".to_string(),
            },
        );

        watcher.step().await.unwrap();
        assert_eq!(
            watcher.state(),
            &WatchState::Completed(PollOutcome::Error {
                error: "timeout".to_string()
            })
        );
    }

    #[tokio::test]
    async fn cancellation_tears_the_session_down() {
        let (mut watcher, _store) = watcher("pending-forever");
        let token = watcher.cancellation_token();

        let handle = tokio::spawn(async move {
            let result = watcher.run().await.unwrap();
            (result, watcher.state().clone())
        });

        tokio::time::sleep(Duration::from_millis(10)).await;
        token.cancel();

        let (result, state) = handle.await.unwrap();
        assert_eq!(result, None);
        assert_eq!(state, WatchState::Cancelled);
    }

    #[tokio::test]
    async fn final_states_are_absorbing() {
        let (mut watcher, _store) = watcher("whatever");
        watcher.cancellation_token().cancel();

        watcher.step().await.unwrap();
        assert_eq!(watcher.state(), &WatchState::Cancelled);

        // Further steps do not resurrect the session.
        watcher.step().await.unwrap();
        assert_eq!(watcher.state(), &WatchState::Cancelled);
    }
}
