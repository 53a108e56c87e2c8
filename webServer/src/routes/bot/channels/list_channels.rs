use actix_web::{http::StatusCode, web, Responder};
use log::error;

use crate::{
    views::{
        channel_table::{channel_rows, render_channel_table},
        error_page::error_page,
        layout::html_response,
    },
    AppState,
};

pub async fn list_channels(app_state: web::Data<AppState>) -> impl Responder {
    match app_state.directory.fetch_channels().await {
        Ok(channels) => {
            let rows = channel_rows(&channels);
            html_response(StatusCode::OK, render_channel_table(&rows))
        }
        Err(err) => {
            error!("Issue fetching the channel directory: {}", err);
            error_page(StatusCode::BAD_GATEWAY, "Could not load the channel list")
        }
    }
}
