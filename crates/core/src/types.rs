/// Primary keys are PostgreSQL BIGSERIAL throughout the portal schema.
pub type DbId = i64;

/// Timestamps are always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
