//! Result polling: one point lookup per call, no consumption semantics.

use std::sync::Arc;

use crate::channel::ResultStore;
use crate::job::{JobError, JobId, PollOutcome};

/// Reads terminal outcomes back from the result store.
pub struct Poller {
    store: Arc<dyn ResultStore>,
}

impl Poller {
    pub fn new(store: Arc<dyn ResultStore>) -> Self {
        Self { store }
    }

    /// Poll for the outcome of `job_id`.
    ///
    /// Performs a single lookup of `result:{jobId}`. Absence reads as
    /// [`PollOutcome::Processing`] — a job id that was never issued is
    /// indistinguishable from one still in flight, because no existence
    /// check is made against the channel. That ambiguity is part of the
    /// protocol and deliberately kept.
    ///
    /// Idempotent and non-mutating: once a terminal record exists, every
    /// subsequent call returns the same outcome, and concurrent pollers
    /// all see the same answer.
    pub async fn poll(&self, job_id: &JobId) -> Result<PollOutcome, JobError> {
        if job_id.as_str().is_empty() {
            return Err(JobError::Validation("Job id must not be empty".into()));
        }

        let key = job_id.result_key();
        let Some(raw) = self.store.fetch(&key).await? else {
            return Ok(PollOutcome::Processing);
        };

        let outcome: PollOutcome =
            serde_json::from_str(&raw).map_err(|e| JobError::CorruptResult {
                job_id: job_id.to_string(),
                reason: e.to_string(),
            })?;

        // The worker only ever writes terminal records; a stored
        // "processing" means the producer is broken, not the job pending.
        if !outcome.is_terminal() {
            return Err(JobError::CorruptResult {
                job_id: job_id.to_string(),
                reason: "stored record is not a terminal state".into(),
            });
        }

        Ok(outcome)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::memory::InMemoryResultStore;

    fn poller() -> (Poller, Arc<InMemoryResultStore>) {
        let store = Arc::new(InMemoryResultStore::new());
        (Poller::new(store.clone()), store)
    }

    #[tokio::test]
    async fn absent_record_reads_as_processing() {
        let (poller, _store) = poller();
        let id = JobId::generate();

        let outcome = poller.poll(&id).await.unwrap();

        assert_eq!(outcome, PollOutcome::Processing);
    }

    #[tokio::test]
    async fn never_issued_id_reads_as_processing_not_error() {
        let (poller, _store) = poller();
        let id = JobId::from("never-issued".to_string());

        assert_eq!(poller.poll(&id).await.unwrap(), PollOutcome::Processing);
    }

    #[tokio::test]
    async fn success_record_is_returned() {
        let (poller, store) = poller();
        let id = JobId::from("abc123".to_string());
        store.insert(
            "result:abc123",
            r#"{"status":"success","result":{"parcela":2500}}"#,
        );

        let outcome = poller.poll(&id).await.unwrap();

        assert_eq!(
            outcome,
            PollOutcome::Success {
                result: json!({ "parcela": 2500 })
            }
        );
    }

    #[tokio::test]
    async fn error_record_is_returned_verbatim() {
        let (poller, store) = poller();
        let id = JobId::from("xyz".to_string());
        store.insert("result:xyz", r#"{"status":"error","error":"timeout"}"#);

        let outcome = poller.poll(&id).await.unwrap();

        assert_eq!(
            outcome,
            PollOutcome::Error {
                error: "timeout".to_string()
            }
        );
    }

    #[tokio::test]
    async fn repeated_polls_after_terminal_state_are_identical() {
        let (poller, store) = poller();
        let id = JobId::from("abc123".to_string());
        store.insert(
            "result:abc123",
            r#"{"status":"success","result":{"parcela":2500}}"#,
        );

        let first = poller.poll(&id).await.unwrap();
        let second = poller.poll(&id).await.unwrap();
        let third = poller.poll(&id).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[tokio::test]
    async fn unparseable_record_is_corrupt() {
        let (poller, store) = poller();
        let id = JobId::from("bad".to_string());
        store.insert("result:bad", "not json at all");

        let err = poller.poll(&id).await.unwrap_err();

        assert_matches!(err, JobError::CorruptResult { .. });
    }

    #[tokio::test]
    async fn stored_processing_record_is_corrupt() {
        let (poller, store) = poller();
        let id = JobId::from("odd".to_string());
        store.insert("result:odd", r#"{"status":"processing"}"#);

        let err = poller.poll(&id).await.unwrap_err();

        assert_matches!(err, JobError::CorruptResult { .. });
    }

    #[tokio::test]
    async fn empty_id_fails_validation() {
        let (poller, _store) = poller();
        let id = JobId::from(String::new());

        let err = poller.poll(&id).await.unwrap_err();

        assert_matches!(err, JobError::Validation(_));
    }
}
