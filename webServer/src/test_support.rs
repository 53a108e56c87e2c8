//! In-memory stand-ins for the data store, the throughput store and the
//! upstream directory, used by unit and handler tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use actix_web::web;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use crate::{
    activity::cache::{CachePolicy, ChannelActivityCache},
    dbcalls::{
        authors::{AuthorFilter, AuthorRepository},
        throughput::ThroughputSource,
    },
    errors::AppError,
    models::{
        author::{AuthorDB, AuthorDetail, AuthorTrackDB},
        directory_channel::DirectoryChannel,
        throughput::{ThroughputChannelDB, ThroughputSample},
    },
    upstream::channel_directory::ChannelDirectory,
    AppState,
};

pub struct FakeAuthors {
    details: Vec<AuthorDetail>,
    failing: bool,
}

impl FakeAuthors {
    pub fn new(details: Vec<AuthorDetail>) -> Self {
        Self {
            details,
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            details: Vec::new(),
            failing: true,
        }
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing {
            return Err(AppError::Internal("connection refused".to_string()));
        }
        Ok(())
    }
}

fn matches_filter(author: &AuthorDB, filter: &AuthorFilter) -> bool {
    let field_matches = |wanted: &Option<String>, actual: Option<&str>| match wanted {
        Some(wanted) => actual == Some(wanted.as_str()),
        None => true,
    };

    field_matches(&filter.country, author.country.as_deref())
        && field_matches(&filter.name, Some(author.name.as_str()))
        && field_matches(&filter.normalized_name, Some(author.normalized_name.as_str()))
}

#[async_trait]
impl AuthorRepository for FakeAuthors {
    async fn list(&self) -> Result<Vec<AuthorDB>, AppError> {
        self.check()?;
        Ok(self.details.iter().map(|d| d.author.clone()).collect())
    }

    async fn search(&self, filter: &AuthorFilter) -> Result<Vec<AuthorDB>, AppError> {
        self.check()?;
        Ok(self
            .details
            .iter()
            .map(|d| d.author.clone())
            .filter(|author| matches_filter(author, filter))
            .collect())
    }

    async fn get(&self, id: i32) -> Result<Option<AuthorDetail>, AppError> {
        self.check()?;
        Ok(self.details.iter().find(|d| d.author.id == id).cloned())
    }
}

pub fn author(id: i32, name: &str, country: Option<&str>) -> AuthorDB {
    AuthorDB {
        id,
        name: name.to_string(),
        normalized_name: name.to_lowercase().replace(' ', "_"),
        country: country.map(str::to_string),
        notes: None,
        added_by: 1,
        added_on: Utc.with_ymd_and_hms(2019, 3, 14, 15, 9, 26).unwrap(),
        last_edit: None,
        aliases: None,
    }
}

pub fn sample_authors() -> Vec<AuthorDetail> {
    let mut first = author(1, "Kevin MacLeod", Some("US"));
    first.aliases = Some(vec!["incompetech".to_string()]);
    first.last_edit = Some(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap());

    vec![
        AuthorDetail {
            author: first,
            tracks: vec![AuthorTrackDB {
                role: "Author".to_string(),
                id: 42,
                name: "Monkeys Spinning Monkeys".to_string(),
                published: Some(Utc.with_ymd_and_hms(2013, 5, 1, 0, 0, 0).unwrap()),
            }],
        },
        AuthorDetail {
            author: author(2, "Jane Doe", Some("CZ")),
            tracks: Vec::new(),
        },
        AuthorDetail {
            author: author(3, "Kevin MacLeod", None),
            tracks: Vec::new(),
        },
    ]
}

pub struct FakeThroughput {
    channels: Vec<ThroughputChannelDB>,
    month_queries: AtomicUsize,
    failing_last_month: bool,
}

impl FakeThroughput {
    pub fn with_channels(channels: &[(i32, &str)]) -> Self {
        Self {
            channels: channels
                .iter()
                .map(|(id, name)| ThroughputChannelDB {
                    id: *id,
                    name: name.to_string(),
                })
                .collect(),
            month_queries: AtomicUsize::new(0),
            failing_last_month: false,
        }
    }

    pub fn failing_last_month(mut self) -> Self {
        self.failing_last_month = true;
        self
    }

    pub fn month_queries(&self) -> usize {
        self.month_queries.load(Ordering::SeqCst)
    }
}

/// `points` are `(steps after start, amount)` pairs; skipped steps are quiet buckets.
fn series(start: DateTime<Utc>, step: TimeDelta, points: &[(i32, i64)]) -> Vec<ThroughputSample> {
    points
        .iter()
        .map(|(offset, amount)| ThroughputSample {
            timestamp: start + step * *offset,
            amount: *amount,
        })
        .collect()
}

#[async_trait]
impl ThroughputSource for FakeThroughput {
    async fn list_channels(&self) -> Result<Vec<ThroughputChannelDB>, AppError> {
        Ok(self.channels.clone())
    }

    async fn last_hour(&self, _channel_id: i32) -> Result<Vec<ThroughputSample>, AppError> {
        let start = Utc.with_ymd_and_hms(2024, 2, 5, 12, 56, 0).unwrap();
        Ok(series(start, TimeDelta::minutes(1), &[(0, 1), (2, 2), (3, 3)]))
    }

    async fn last_day(&self, _channel_id: i32) -> Result<Vec<ThroughputSample>, AppError> {
        let start = Utc.with_ymd_and_hms(2024, 2, 5, 9, 0, 0).unwrap();
        Ok(series(start, TimeDelta::hours(1), &[(0, 10), (3, 20)]))
    }

    async fn last_month(&self, _channel_id: i32) -> Result<Vec<ThroughputSample>, AppError> {
        if self.failing_last_month {
            return Err(AppError::Internal("throughput table missing".to_string()));
        }

        // every real query sees fresher data than the last one
        let previous = self.month_queries.fetch_add(1, Ordering::SeqCst) as i64;
        let start = Utc.with_ymd_and_hms(2024, 2, 5, 0, 0, 0).unwrap() + TimeDelta::days(previous);
        Ok(series(
            start,
            TimeDelta::days(1),
            &[(0, 100 + previous), (1, 101 + previous)],
        ))
    }
}

pub struct FakeDirectory {
    channels: Vec<DirectoryChannel>,
    failing: bool,
}

impl FakeDirectory {
    pub fn new(channels: Vec<DirectoryChannel>) -> Self {
        Self {
            channels,
            failing: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            channels: Vec::new(),
            failing: true,
        }
    }
}

#[async_trait]
impl ChannelDirectory for FakeDirectory {
    async fn fetch_channels(&self) -> Result<Vec<DirectoryChannel>, AppError> {
        if self.failing {
            return Err(AppError::UpstreamFailure("503 Service Unavailable".to_string()));
        }
        Ok(self.channels.clone())
    }
}

pub fn directory_channel(
    id: i64,
    name: &str,
    platform: &str,
    description: Option<&str>,
) -> DirectoryChannel {
    DirectoryChannel {
        id,
        name: name.to_string(),
        platform_name: platform.to_string(),
        description: description.map(str::to_string),
        mode: "Write".to_string(),
        line_count: Some(1_234_567),
        byte_length: Some(2_500_000),
    }
}

pub struct StateBuilder {
    authors: Arc<dyn AuthorRepository>,
    throughput: Arc<dyn ThroughputSource>,
    directory: Arc<dyn ChannelDirectory>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            authors: Arc::new(FakeAuthors::new(sample_authors())),
            throughput: Arc::new(FakeThroughput::with_channels(&[])),
            directory: Arc::new(FakeDirectory::new(Vec::new())),
        }
    }

    pub fn authors(mut self, authors: impl AuthorRepository + 'static) -> Self {
        self.authors = Arc::new(authors);
        self
    }

    pub fn throughput(mut self, throughput: Arc<dyn ThroughputSource>) -> Self {
        self.throughput = throughput;
        self
    }

    pub fn directory(mut self, directory: impl ChannelDirectory + 'static) -> Self {
        self.directory = Arc::new(directory);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            authors: self.authors,
            throughput: self.throughput,
            directory: self.directory,
            activity_cache: Arc::new(ChannelActivityCache::new(CachePolicy::ProcessLifetime)),
        })
    }
}
