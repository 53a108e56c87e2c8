use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;

#[derive(FromRow, Debug, Clone, PartialEq)]
pub struct AuthorDB {
    pub id: i32,
    pub name: String,
    pub normalized_name: String,
    pub country: Option<String>,
    pub notes: Option<String>,
    pub added_by: i32,
    pub added_on: DateTime<Utc>,
    pub last_edit: Option<DateTime<Utc>>,
    pub aliases: Option<Vec<String>>,
}

#[derive(FromRow, Debug, Clone, PartialEq)]
pub struct AuthorTrackDB {
    pub role: String,
    pub id: i32,
    pub name: String,
    pub published: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthorDetail {
    pub author: AuthorDB,
    pub tracks: Vec<AuthorTrackDB>,
}
