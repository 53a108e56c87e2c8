use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSuccess<T: Serialize> {
    pub status_code: u16,
    pub data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub status_code: u16,
    pub error: String,
}

pub fn api_success<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiSuccess {
        status_code: StatusCode::OK.as_u16(),
        data,
    })
}

pub fn api_error(status: StatusCode, error: &str) -> HttpResponse {
    HttpResponse::build(status).json(ApiError {
        status_code: status.as_u16(),
        error: error.to_string(),
    })
}
