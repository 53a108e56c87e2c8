use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    errors::AppError,
    models::directory_channel::{DirectoryChannel, DirectoryListResponse},
};

/// The channel directory kept by the bot's own API.
#[async_trait]
pub trait ChannelDirectory: Send + Sync {
    async fn fetch_channels(&self) -> Result<Vec<DirectoryChannel>, AppError>;
}

pub struct HttpChannelDirectory {
    client: Client,
    list_url: String,
}

impl HttpChannelDirectory {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            list_url: list_url(base_url),
        })
    }
}

fn list_url(base_url: &str) -> String {
    format!("{}/bot/channel/list", base_url.trim_end_matches('/'))
}

#[async_trait]
impl ChannelDirectory for HttpChannelDirectory {
    async fn fetch_channels(&self) -> Result<Vec<DirectoryChannel>, AppError> {
        let response = self
            .client
            .get(&self.list_url)
            .send()
            .await?
            .error_for_status()?;

        let body: DirectoryListResponse = response.json().await?;
        Ok(body.data)
    }
}
