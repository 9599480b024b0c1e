//! Collaborator traits for the job channel and the result store.
//!
//! Both are external, multi-writer services; these traits keep the
//! submit/poll protocol independent of the backing technology and let tests
//! substitute the in-memory implementations in [`crate::memory`].

use async_trait::async_trait;

use crate::job::{Job, JobError};

/// A durable, ordered, append-only queue used to hand jobs to the external
/// worker.
///
/// Each job is consumed exactly once by some worker process; this
/// application only ever appends.
#[async_trait]
pub trait JobChannel: Send + Sync {
    /// Append a job to the tail of the channel.
    ///
    /// The append must be atomic — either the whole record is enqueued or
    /// nothing is. Fails with [`JobError::Infrastructure`] when the channel
    /// is unreachable, leaving no partial state behind.
    async fn append(&self, job: &Job) -> Result<(), JobError>;
}

/// Key-value store holding terminal job outcomes.
///
/// Keys follow the `result:{jobId}` contract; values are serialized
/// terminal records written exactly once by the external worker. Expiry is
/// owned by the store's own configuration, not by this application.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Point lookup of the raw record at `key`.
    ///
    /// `None` means no record has been written yet. Never mutates the
    /// record — any number of concurrent readers see the same answer.
    async fn fetch(&self, key: &str) -> Result<Option<String>, JobError>;
}
