//! Job and result-record types shared with the external worker contract.

use std::fmt;

use serde::{Deserialize, Serialize};
use vca_core::types::Timestamp;

// ---------------------------------------------------------------------------
// JobId
// ---------------------------------------------------------------------------

/// Opaque unique identifier for a submitted job.
///
/// Backed by a UUID v4 (122 random bits), so collisions are negligible and
/// an identifier is never reused. Treat the contents as opaque: the only
/// operations are display, comparison, and deriving the result-store key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

impl JobId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The result-store key the external worker writes the terminal record
    /// to: `result:{jobId}`.
    pub fn result_key(&self) -> String {
        format!("result:{}", self.0)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for JobId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

// ---------------------------------------------------------------------------
// Job
// ---------------------------------------------------------------------------

/// A unit of work handed off to the external worker via the channel.
///
/// Immutable once enqueued; the channel owns the record until the worker
/// consumes it. The payload is domain data passed through verbatim — this
/// crate never inspects it beyond submission-time validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub payload: serde_json::Value,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// PollOutcome
// ---------------------------------------------------------------------------

/// Outcome of polling the result store for a job.
///
/// The serialized shape is the wire contract on both sides: the worker
/// writes terminal records in this format, and `GET /jobs/{jobId}` returns
/// it to clients unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PollOutcome {
    /// No result record exists yet. Also what an unknown id reads as — the
    /// two are indistinguishable by design.
    Processing,
    /// The worker finished and stored a result payload.
    Success { result: serde_json::Value },
    /// The worker failed and stored an error message.
    Error { error: String },
}

impl PollOutcome {
    /// `success` and `error` are terminal; once reached they never change
    /// for a given job id.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PollOutcome::Processing)
    }
}

// ---------------------------------------------------------------------------
// JobError
// ---------------------------------------------------------------------------

/// Failure taxonomy for the submit/poll protocol.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    /// Malformed caller input. Recoverable by correcting the request.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The channel or result store is unreachable. Never retried here;
    /// retry policy belongs to the caller.
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    /// A stored result record failed to parse. Indicates a worker-side bug.
    #[error("Corrupt result record for job {job_id}: {reason}")]
    CorruptResult { job_id: String, reason: String },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
