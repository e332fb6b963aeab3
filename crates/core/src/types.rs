/// Server-generated primary keys (signals) are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// User identifiers are opaque, client-supplied strings.
pub type UserId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
