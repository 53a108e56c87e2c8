//! API-facing shapes of the author tables.
//!
//! Storage rows use snake_case columns, the API uses camelCase with an upper
//! case `ID`. Each mapping is a plain `From` impl so a renamed column breaks
//! the build instead of silently dropping a field.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::models::author::{AuthorDB, AuthorDetail, AuthorTrackDB};

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    pub normalized_name: String,
    pub country: Option<String>,
    pub notes: Option<String>,
    pub added_by: i32,
    pub added_on: String,
    pub last_edit: Option<String>,
    pub aliases: Option<Vec<String>>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct TrackResponse {
    pub role: String,
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    pub published: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct AuthorDetailResponse {
    #[serde(flatten)]
    pub author: AuthorResponse,
    pub tracks: Vec<TrackResponse>,
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2020-01-02T03:04:05.000Z`.
pub fn iso_string(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<AuthorDB> for AuthorResponse {
    fn from(author: AuthorDB) -> Self {
        Self {
            id: author.id,
            name: author.name,
            normalized_name: author.normalized_name,
            country: author.country,
            notes: author.notes,
            added_by: author.added_by,
            added_on: iso_string(&author.added_on),
            last_edit: author.last_edit.as_ref().map(iso_string),
            aliases: author.aliases,
        }
    }
}

impl From<AuthorTrackDB> for TrackResponse {
    fn from(track: AuthorTrackDB) -> Self {
        Self {
            role: track.role,
            id: track.id,
            name: track.name,
            published: track.published.as_ref().map(iso_string),
        }
    }
}

impl From<AuthorDetail> for AuthorDetailResponse {
    fn from(detail: AuthorDetail) -> Self {
        Self {
            author: detail.author.into(),
            tracks: detail.tracks.into_iter().map(TrackResponse::from).collect(),
        }
    }
}

pub fn author_list(authors: Vec<AuthorDB>) -> Vec<AuthorResponse> {
    authors.into_iter().map(AuthorResponse::from).collect()
}
