//! Redis-backed channel and result store.
//!
//! The channel is a Redis list: `RPUSH` appends to the tail atomically and
//! the external worker pops from the head, giving first-in-first-out
//! ordering and durability across restarts of this process. The result
//! store is plain keys (`result:{jobId}`) written once by the worker and
//! read here with `GET`; expiry belongs to the Redis configuration.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use async_trait::async_trait;

use crate::channel::{JobChannel, ResultStore};
use crate::job::{Job, JobError};

/// Default Redis list jobs are appended to.
pub const DEFAULT_QUEUE_KEY: &str = "vca:jobs:simulation";

/// Open an auto-reconnecting connection to Redis.
///
/// The returned manager is cheap to clone and safe to share between the
/// channel and the result store.
pub async fn connect(redis_url: &str) -> Result<ConnectionManager, JobError> {
    let client = Client::open(redis_url)
        .map_err(|e| JobError::Infrastructure(format!("Invalid Redis URL: {e}")))?;

    client
        .get_connection_manager()
        .await
        .map_err(|e| JobError::Infrastructure(format!("Failed to connect to Redis: {e}")))
}

// ---------------------------------------------------------------------------
// RedisJobChannel
// ---------------------------------------------------------------------------

/// [`JobChannel`] over a Redis list.
pub struct RedisJobChannel {
    conn: ConnectionManager,
    queue_key: String,
}

impl RedisJobChannel {
    pub fn new(conn: ConnectionManager, queue_key: impl Into<String>) -> Self {
        Self {
            conn,
            queue_key: queue_key.into(),
        }
    }

    pub fn queue_key(&self) -> &str {
        &self.queue_key
    }
}

#[async_trait]
impl JobChannel for RedisJobChannel {
    async fn append(&self, job: &Job) -> Result<(), JobError> {
        let record = serde_json::to_string(job)
            .map_err(|e| JobError::Infrastructure(format!("Failed to serialize job: {e}")))?;

        let mut conn = self.conn.clone();
        let depth: i64 = conn.rpush(&self.queue_key, record).await.map_err(|e| {
            JobError::Infrastructure(format!("Failed to append job to channel: {e}"))
        })?;

        tracing::debug!(job_id = %job.id, queue = %self.queue_key, depth, "Job appended to channel");

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// RedisResultStore
// ---------------------------------------------------------------------------

/// [`ResultStore`] over plain Redis keys.
pub struct RedisResultStore {
    conn: ConnectionManager,
}

impl RedisResultStore {
    pub fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ResultStore for RedisResultStore {
    async fn fetch(&self, key: &str) -> Result<Option<String>, JobError> {
        let mut conn = self.conn.clone();
        conn.get(key)
            .await
            .map_err(|e| JobError::Infrastructure(format!("Failed to read result store: {e}")))
    }
}
