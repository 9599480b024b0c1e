//! Job submission: validate, identify, timestamp, enqueue.

use std::sync::Arc;

use chrono::Utc;

use crate::channel::JobChannel;
use crate::job::{Job, JobError, JobId};

/// Accepts simulation requests and hands them to the external worker
/// through the channel.
///
/// Fire-and-forget: `submit` returns the job id as soon as the append is
/// acknowledged. The id can be polled immediately and reads as
/// `processing` until the worker writes a terminal record.
pub struct Submitter {
    channel: Arc<dyn JobChannel>,
}

impl Submitter {
    pub fn new(channel: Arc<dyn JobChannel>) -> Self {
        Self { channel }
    }

    /// Submit a payload for asynchronous processing.
    ///
    /// The payload must be a non-empty JSON object; anything else fails
    /// with [`JobError::Validation`] and nothing is enqueued. On success
    /// the job has been durably appended to the tail of the channel — it
    /// survives this process crashing right after the call returns.
    pub async fn submit(&self, payload: serde_json::Value) -> Result<JobId, JobError> {
        validate_payload(&payload)?;

        let job = Job {
            id: JobId::generate(),
            payload,
            created_at: Utc::now(),
        };

        self.channel.append(&job).await?;

        tracing::info!(job_id = %job.id, "Job enqueued");

        Ok(job.id)
    }
}

/// A payload must be present, an object, and non-empty.
fn validate_payload(payload: &serde_json::Value) -> Result<(), JobError> {
    match payload {
        serde_json::Value::Object(fields) if !fields.is_empty() => Ok(()),
        serde_json::Value::Object(_) => {
            Err(JobError::Validation("Payload must not be empty".into()))
        }
        _ => Err(JobError::Validation("Payload must be a JSON object".into())),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
