/// All entity primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Lookup-table primary keys are PostgreSQL SMALLSERIAL.
pub type LookupId = i16;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (certificate issue/expiry) carry no time zone.
pub type Date = chrono::NaiveDate;
