use actix_web::{http::StatusCode, web, Responder};
use log::error;

use crate::{
    dbcalls::authors::AuthorRepository,
    errors::AppError,
    models::author::AuthorDetail,
    responses::{
        api_response::{api_error, api_success},
        author_response::AuthorDetailResponse,
    },
    AppState,
};

pub fn parse_author_id(raw: &str) -> Result<i32, AppError> {
    match raw.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidInput(format!("{raw:?} is not an author ID"))),
    }
}

pub async fn load_author_detail(
    authors: &dyn AuthorRepository,
    raw_id: &str,
) -> Result<AuthorDetail, AppError> {
    let id = parse_author_id(raw_id)?;
    authors
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {id}")))
}

// every failure answers with 500, client mistakes included
pub async fn get_author(app_state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match load_author_detail(app_state.authors.as_ref(), &path).await {
        Ok(detail) => api_success(AuthorDetailResponse::from(detail)),
        Err(AppError::InvalidInput(_)) => {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "No ID provided")
        }
        Err(AppError::NotFound(_)) => {
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "No data for given ID")
        }
        Err(err) => {
            error!("Issue loading author {}: {}", path.as_str(), err);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Cannot load ID")
        }
    }
}
