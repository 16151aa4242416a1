/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Account id of an app user.
pub type UserId = DbId;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
