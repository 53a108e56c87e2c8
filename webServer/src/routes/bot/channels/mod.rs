use actix_web::web;

pub mod channel_activity;
pub mod list_channels;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_channels::list_channels))
        .route("/", web::get().to(list_channels::list_channels))
        .route(
            "/{channel}/activity",
            web::get().to(channel_activity::channel_activity),
        );
}
