use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;

/// A channel the throughput store keeps counters for.
#[derive(FromRow, Debug, Clone, PartialEq)]
pub struct ThroughputChannelDB {
    pub id: i32,
    pub name: String,
}

/// Message count for one time bucket, `timestamp` being the bucket start.
#[derive(FromRow, Debug, Clone, PartialEq)]
pub struct ThroughputSample {
    pub timestamp: DateTime<Utc>,
    pub amount: i64,
}
