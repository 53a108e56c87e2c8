use actix_web::{http::StatusCode, HttpResponse};

use super::layout::{html_escape, html_response, page};

pub fn render_error_page(status: StatusCode, message: &str) -> String {
    let code = status.as_u16();
    let body = format!(
        "<h1>{code}</h1>\n<p class=\"error-message\">{}</p>",
        html_escape(message)
    );
    page(&format!("Error {code}"), "", &body)
}

pub fn error_page(status: StatusCode, message: &str) -> HttpResponse {
    html_response(status, render_error_page(status, message))
}
