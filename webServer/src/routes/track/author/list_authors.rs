use actix_web::{http::StatusCode, web, Responder};
use log::error;

use crate::{
    responses::{
        api_response::{api_error, api_success},
        author_response::author_list,
    },
    AppState,
};

pub async fn list_authors(app_state: web::Data<AppState>) -> impl Responder {
    match app_state.authors.list().await {
        Ok(authors) => api_success(author_list(authors)),
        Err(err) => {
            error!("Issue listing authors: {}", err);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Cannot load authors")
        }
    }
}
