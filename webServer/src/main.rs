use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

pub mod activity;
pub mod config;
pub mod dbcalls;
pub mod errors;
pub mod models;
pub mod responses;
pub mod routes;
pub mod upstream;
pub mod views;

#[cfg(test)]
mod test_support;

use activity::cache::ChannelActivityCache;
use dbcalls::{
    authors::{AuthorRepository, PgAuthorRepository},
    throughput::{PgThroughputSource, ThroughputSource},
};
use upstream::channel_directory::{ChannelDirectory, HttpChannelDirectory};

pub struct AppState {
    pub authors: Arc<dyn AuthorRepository>,
    pub throughput: Arc<dyn ThroughputSource>,
    pub directory: Arc<dyn ChannelDirectory>,
    pub activity_cache: Arc<ChannelActivityCache>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let app_config = config::AppConfig::from_env()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

    env_logger::Builder::new()
        .parse_filters(&app_config.log_filter)
        .init();

    let pool = PgPoolOptions::new()
        .max_connections(app_config.database_max_connections)
        .connect(&app_config.database_url)
        .await
        .map_err(std::io::Error::other)?;

    let directory =
        HttpChannelDirectory::new(&app_config.directory_api_url, app_config.directory_timeout)
            .map_err(std::io::Error::other)?;

    let cache_policy = app_config.cache_policy();
    info!("Channel activity cache policy: {:?}", cache_policy);

    // shared by every worker, the cache must not be rebuilt per worker
    let app_state = web::Data::new(AppState {
        authors: Arc::new(PgAuthorRepository::new(pool.clone())),
        throughput: Arc::new(PgThroughputSource::new(pool)),
        directory: Arc::new(directory),
        activity_cache: Arc::new(ChannelActivityCache::new(cache_policy)),
    });

    info!(
        "Starting Actix Web server on {}:{}...",
        app_config.host, app_config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(routes::configure_routes)
    })
    .bind((app_config.host.as_str(), app_config.port))?
    .run()
    .await
}
