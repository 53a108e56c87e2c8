use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    errors::AppError,
    models::throughput::{ThroughputChannelDB, ThroughputSample},
};

#[async_trait]
pub trait ThroughputSource: Send + Sync {
    async fn list_channels(&self) -> Result<Vec<ThroughputChannelDB>, AppError>;
    /// Per-minute counts over the last hour.
    async fn last_hour(&self, channel_id: i32) -> Result<Vec<ThroughputSample>, AppError>;
    /// Per-hour counts over the last day.
    async fn last_day(&self, channel_id: i32) -> Result<Vec<ThroughputSample>, AppError>;
    /// Per-day counts over the last month.
    async fn last_month(&self, channel_id: i32) -> Result<Vec<ThroughputSample>, AppError>;
}

pub struct PgThroughputSource {
    database: Pool<Postgres>,
}

impl PgThroughputSource {
    pub fn new(database: Pool<Postgres>) -> Self {
        Self { database }
    }

    async fn bucketed(
        &self,
        channel_id: i32,
        bucket: &str,
        window: &str,
    ) -> Result<Vec<ThroughputSample>, AppError> {
        let samples = sqlx::query_as::<_, ThroughputSample>(
            "select date_trunc($2, bucket_start) as timestamp, sum(amount)::bigint as amount \
             from message_throughput \
             where channel_id = $1 and bucket_start >= now() - $3::interval \
             group by 1 order by 1",
        )
        .bind(channel_id)
        .bind(bucket)
        .bind(window)
        .fetch_all(&self.database)
        .await?;

        Ok(samples)
    }
}

#[async_trait]
impl ThroughputSource for PgThroughputSource {
    async fn list_channels(&self) -> Result<Vec<ThroughputChannelDB>, AppError> {
        let channels =
            sqlx::query_as::<_, ThroughputChannelDB>("select id, name from channel order by id")
                .fetch_all(&self.database)
                .await?;

        Ok(channels)
    }

    async fn last_hour(&self, channel_id: i32) -> Result<Vec<ThroughputSample>, AppError> {
        self.bucketed(channel_id, "minute", "1 hour").await
    }

    async fn last_day(&self, channel_id: i32) -> Result<Vec<ThroughputSample>, AppError> {
        self.bucketed(channel_id, "hour", "1 day").await
    }

    async fn last_month(&self, channel_id: i32) -> Result<Vec<ThroughputSample>, AppError> {
        self.bucketed(channel_id, "day", "1 month").await
    }
}
