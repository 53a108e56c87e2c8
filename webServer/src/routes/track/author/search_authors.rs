use actix_web::{http::StatusCode, web, Responder};
use log::error;

use crate::{
    dbcalls::authors::AuthorFilter,
    responses::{
        api_response::{api_error, api_success},
        author_response::author_list,
    },
    AppState,
};

#[derive(serde::Deserialize, Debug)]
pub struct AuthorSearchQuery {
    pub country: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "normalizedName")]
    pub normalized_name: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

impl From<AuthorSearchQuery> for AuthorFilter {
    fn from(query: AuthorSearchQuery) -> Self {
        Self {
            country: non_empty(query.country),
            name: non_empty(query.name),
            normalized_name: non_empty(query.normalized_name),
        }
    }
}

pub async fn search_authors(
    app_state: web::Data<AppState>,
    query: web::Query<AuthorSearchQuery>,
) -> impl Responder {
    let filter = AuthorFilter::from(query.into_inner());

    match app_state.authors.search(&filter).await {
        Ok(authors) => api_success(author_list(authors)),
        Err(err) => {
            error!("Issue searching authors with {:?}: {}", filter, err);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Cannot search authors")
        }
    }
}
