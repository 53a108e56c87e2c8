use actix_web::{http::StatusCode, web, Responder};
use log::error;

use crate::{
    activity::aggregator::{aggregate_channel_activity, split_channel_segment},
    errors::AppError,
    views::{
        channel_activity::render_channel_activity, error_page::error_page,
        layout::html_response,
    },
    AppState,
};

const NO_ACTIVITY: &str = "Target channel has no activity data";

/// `GET /bot/channels/{name}-{id}/activity`
pub async fn channel_activity(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let Some((name, raw_id)) = split_channel_segment(&path) else {
        return error_page(StatusCode::NOT_FOUND, NO_ACTIVITY);
    };

    let activity = aggregate_channel_activity(
        app_state.throughput.as_ref(),
        &app_state.activity_cache,
        name,
        raw_id,
    )
    .await;

    match activity {
        Ok(activity) => match render_channel_activity(&activity) {
            Ok(html) => html_response(StatusCode::OK, html),
            Err(err) => {
                error!(
                    "Issue serializing activity of {}: {}",
                    activity.channel_name, err
                );
                error_page(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not render channel activity",
                )
            }
        },
        Err(AppError::NotFound(_)) => error_page(StatusCode::NOT_FOUND, NO_ACTIVITY),
        Err(err) => {
            error!("Issue loading activity for {}: {}", path.as_str(), err);
            let status = if err.is_internal() {
                StatusCode::INTERNAL_SERVER_ERROR
            } else {
                StatusCode::BAD_GATEWAY
            };
            error_page(status, "Could not load channel activity")
        }
    }
}
