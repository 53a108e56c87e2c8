use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    errors::AppError,
    models::author::{AuthorDB, AuthorDetail, AuthorTrackDB},
};

/// Every supplied field must match exactly; `None` leaves the field unconstrained.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AuthorFilter {
    pub country: Option<String>,
    pub name: Option<String>,
    pub normalized_name: Option<String>,
}

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<AuthorDB>, AppError>;
    async fn search(&self, filter: &AuthorFilter) -> Result<Vec<AuthorDB>, AppError>;
    async fn get(&self, id: i32) -> Result<Option<AuthorDetail>, AppError>;
}

const AUTHOR_SELECT: &str = "select a.id, a.name, a.normalized_name, a.country, a.notes, \
     a.added_by, a.added_on, a.last_edit, \
     case when count(al.name) = 0 then null else array_agg(al.name order by al.name) end as aliases \
     from author a left join author_alias al on al.author_id = a.id";

pub struct PgAuthorRepository {
    database: Pool<Postgres>,
}

impl PgAuthorRepository {
    pub fn new(database: Pool<Postgres>) -> Self {
        Self { database }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn list(&self) -> Result<Vec<AuthorDB>, AppError> {
        let authors = sqlx::query_as::<_, AuthorDB>(&format!(
            "{AUTHOR_SELECT} group by a.id order by a.id"
        ))
        .fetch_all(&self.database)
        .await?;

        Ok(authors)
    }

    async fn search(&self, filter: &AuthorFilter) -> Result<Vec<AuthorDB>, AppError> {
        let authors = sqlx::query_as::<_, AuthorDB>(&format!(
            "{AUTHOR_SELECT} \
             where ($1::text is null or a.country = $1) \
             and ($2::text is null or a.name = $2) \
             and ($3::text is null or a.normalized_name = $3) \
             group by a.id order by a.id"
        ))
        .bind(&filter.country)
        .bind(&filter.name)
        .bind(&filter.normalized_name)
        .fetch_all(&self.database)
        .await?;

        Ok(authors)
    }

    async fn get(&self, id: i32) -> Result<Option<AuthorDetail>, AppError> {
        let author = sqlx::query_as::<_, AuthorDB>(&format!(
            "{AUTHOR_SELECT} where a.id = $1 group by a.id"
        ))
        .bind(id)
        .fetch_optional(&self.database)
        .await?;

        let Some(author) = author else {
            return Ok(None);
        };

        let tracks = sqlx::query_as::<_, AuthorTrackDB>(
            "select ta.role, t.id, t.name, t.published from track_author ta \
             join track t on t.id = ta.track_id where ta.author_id = $1 order by t.id",
        )
        .bind(id)
        .fetch_all(&self.database)
        .await?;

        Ok(Some(AuthorDetail { author, tracks }))
    }
}
