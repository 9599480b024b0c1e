//! In-memory channel and result store.
//!
//! Test and local-development substitutes for the Redis implementations in
//! [`crate::broker`]. Not durable — everything is lost when the process
//! exits — but they honor the same ordering and lookup semantics.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::channel::{JobChannel, ResultStore};
use crate::job::{Job, JobError, JobId, PollOutcome};

// ---------------------------------------------------------------------------
// InMemoryChannel
// ---------------------------------------------------------------------------

/// FIFO queue backed by a `VecDeque`.
#[derive(Default)]
pub struct InMemoryChannel {
    jobs: Mutex<VecDeque<Job>>,
}

impl InMemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of jobs currently waiting in the channel.
    pub fn len(&self) -> usize {
        self.jobs.lock().expect("channel lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pop the head of the queue, as the external worker would.
    pub fn consume(&self) -> Option<Job> {
        self.jobs.lock().expect("channel lock poisoned").pop_front()
    }
}

#[async_trait]
impl JobChannel for InMemoryChannel {
    async fn append(&self, job: &Job) -> Result<(), JobError> {
        self.jobs
            .lock()
            .expect("channel lock poisoned")
            .push_back(job.clone());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// InMemoryResultStore
// ---------------------------------------------------------------------------

/// Key-value map of raw serialized records.
#[derive(Default)]
pub struct InMemoryResultStore {
    records: Mutex<HashMap<String, String>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a raw record, exactly as the external worker would.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.records
            .lock()
            .expect("store lock poisoned")
            .insert(key.into(), value.into());
    }

    /// Convenience for tests: store a terminal outcome under the
    /// `result:{jobId}` key for `job_id`.
    pub fn complete(&self, job_id: &JobId, outcome: &PollOutcome) {
        let raw = serde_json::to_string(outcome).expect("outcome serializes");
        self.insert(job_id.result_key(), raw);
    }
}

#[async_trait]
impl ResultStore for InMemoryResultStore {
    async fn fetch(&self, key: &str) -> Result<Option<String>, JobError> {
        Ok(self
            .records
            .lock()
            .expect("store lock poisoned")
            .get(key)
            .cloned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn channel_preserves_append_order() {
        let channel = InMemoryChannel::new();

        for n in 0..3 {
            let job = Job {
                id: JobId::generate(),
                payload: json!({ "n": n }),
                created_at: Utc::now(),
            };
            channel.append(&job).await.unwrap();
        }

        for n in 0..3 {
            let job = channel.consume().unwrap();
            assert_eq!(job.payload, json!({ "n": n }));
        }
        assert!(channel.is_empty());
    }

    #[tokio::test]
    async fn store_fetch_returns_inserted_record() {
        let store = InMemoryResultStore::new();
        store.insert("result:abc", "{}");

        assert_eq!(store.fetch("result:abc").await.unwrap(), Some("{}".into()));
        assert_eq!(store.fetch("result:other").await.unwrap(), None);
    }
}
