//! Memoization of the "last month" activity series, keyed by channel ID.
//!
//! With [`CachePolicy::ProcessLifetime`] an entry is computed once and then
//! served until the process restarts, even if the underlying counters move on.
//! [`CachePolicy::ExpireAfter`] bounds that staleness instead.
//!
//! Writes are plain inserts: concurrent misses for one channel may both query
//! and both store, the last write wins and the values are equal.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use log::debug;

use crate::models::throughput::ThroughputSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    ProcessLifetime,
    ExpireAfter(Duration),
}

#[derive(Debug)]
struct CacheEntry {
    samples: Vec<ThroughputSample>,
    stored_at: Instant,
}

#[derive(Debug)]
pub struct ChannelActivityCache {
    policy: CachePolicy,
    entries: DashMap<i32, CacheEntry>,
}

impl ChannelActivityCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entries: DashMap::new(),
        }
    }

    pub fn get(&self, channel_id: i32) -> Option<Vec<ThroughputSample>> {
        self.get_at(channel_id, Instant::now())
    }

    fn get_at(&self, channel_id: i32, now: Instant) -> Option<Vec<ThroughputSample>> {
        let entry = self.entries.get(&channel_id)?;
        let hit = self
            .is_fresh(&entry, now)
            .then(|| entry.samples.clone());
        // the shard lock must be released before `remove_if` below
        drop(entry);

        match hit {
            Some(samples) => {
                debug!("Activity cache hit for channel {}", channel_id);
                Some(samples)
            }
            None => {
                debug!("Activity cache entry for channel {} expired", channel_id);
                self.entries
                    .remove_if(&channel_id, |_, entry| !self.is_fresh(entry, now));
                None
            }
        }
    }

    pub fn insert(&self, channel_id: i32, samples: Vec<ThroughputSample>) {
        self.insert_at(channel_id, samples, Instant::now());
    }

    fn insert_at(&self, channel_id: i32, samples: Vec<ThroughputSample>, now: Instant) {
        self.entries.insert(
            channel_id,
            CacheEntry {
                samples,
                stored_at: now,
            },
        );
        debug!(
            "Cached activity for channel {} ({} channels cached)",
            channel_id,
            self.len()
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_fresh(&self, entry: &CacheEntry, now: Instant) -> bool {
        match self.policy {
            CachePolicy::ProcessLifetime => true,
            CachePolicy::ExpireAfter(ttl) => now.saturating_duration_since(entry.stored_at) < ttl,
        }
    }
}
