use log::debug;

use crate::{
    activity::cache::ChannelActivityCache,
    dbcalls::throughput::ThroughputSource,
    errors::AppError,
    models::throughput::{ThroughputChannelDB, ThroughputSample},
};

const MINUTE_LABEL_FORMAT: &str = "%H:%M";
const HOUR_LABEL_FORMAT: &str = "%a %H:%M";
const DAY_LABEL_FORMAT: &str = "%a %-d.%-m.%Y";

/// Chart-ready series for one channel. Buckets without messages are absent
/// from the store, so every point carries a label taken from its timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelActivity {
    pub channel_name: String,
    pub minute_data: Vec<i64>,
    pub minute_labels: Vec<String>,
    pub hour_data: Vec<i64>,
    pub hour_labels: Vec<String>,
    pub day_data: Vec<i64>,
    pub day_labels: Vec<String>,
}

/// Splits a `{name}-{id}` path segment at its first dash.
pub fn split_channel_segment(segment: &str) -> Option<(&str, &str)> {
    segment.split_once('-')
}

/// Finds the throughput channel whose ID and lowercased name both match.
pub async fn resolve_channel(
    throughput: &dyn ThroughputSource,
    name: &str,
    raw_id: &str,
) -> Result<ThroughputChannelDB, AppError> {
    let not_found = || AppError::NotFound("Target channel has no activity data".to_string());

    let channel_id: i32 = raw_id.trim().parse().map_err(|_| not_found())?;
    let channel_name = name.to_lowercase();

    throughput
        .list_channels()
        .await?
        .into_iter()
        .find(|channel| channel.id == channel_id && channel.name == channel_name)
        .ok_or_else(not_found)
}

pub async fn aggregate_channel_activity(
    throughput: &dyn ThroughputSource,
    cache: &ChannelActivityCache,
    name: &str,
    raw_id: &str,
) -> Result<ChannelActivity, AppError> {
    let channel = resolve_channel(throughput, name, raw_id).await?;

    let last_month = async {
        if let Some(samples) = cache.get(channel.id) {
            return Ok(samples);
        }

        debug!("Loading last month of activity for channel {}", channel.id);
        let samples = throughput.last_month(channel.id).await?;
        cache.insert(channel.id, samples.clone());
        Ok::<_, AppError>(samples)
    };

    let (last_hour, last_day, last_month) = futures_util::try_join!(
        throughput.last_hour(channel.id),
        throughput.last_day(channel.id),
        last_month
    )?;

    Ok(ChannelActivity {
        channel_name: channel.name,
        minute_data: amounts(&last_hour),
        minute_labels: labels(&last_hour, MINUTE_LABEL_FORMAT),
        hour_data: amounts(&last_day),
        hour_labels: labels(&last_day, HOUR_LABEL_FORMAT),
        day_data: amounts(&last_month),
        day_labels: labels(&last_month, DAY_LABEL_FORMAT),
    })
}

fn amounts(samples: &[ThroughputSample]) -> Vec<i64> {
    samples.iter().map(|sample| sample.amount).collect()
}

fn labels(samples: &[ThroughputSample], format: &str) -> Vec<String> {
    samples
        .iter()
        .map(|sample| sample.timestamp.format(format).to_string())
        .collect()
}
