//! `SQLite` implementation of [`PosterRepository`].

use std::future::Future;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use affiche_app::ports::PosterRepository;
use affiche_domain::error::AfficheError;
use affiche_domain::id::PosterId;
use affiche_domain::image::ImageData;
use affiche_domain::poster::Poster;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Poster`].
struct Wrapper(Poster);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Poster> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let date: String = row.try_get("date")?;
        let location: String = row.try_get("location")?;
        let image: String = row.try_get("image")?;
        let created_at: String = row.try_get("created_at")?;

        let id = PosterId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .with_timezone(&Utc);

        Ok(Self(Poster {
            id,
            title,
            date,
            location,
            image: ImageData::new(image),
            created_at,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO posters (id, title, date, location, image, created_at) VALUES (?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM posters WHERE id = ?";
// YYYY-MM-DD TEXT sorts lexicographically as chronologically; ties between
// same-date posters are left in unspecified order.
const SELECT_ALL: &str = "SELECT * FROM posters ORDER BY date ASC";
const UPDATE: &str = "UPDATE posters SET title = ?, date = ?, location = ?, image = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM posters WHERE id = ?";

/// `SQLite`-backed poster repository.
pub struct SqlitePosterRepository {
    pool: SqlitePool,
}

impl SqlitePosterRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PosterRepository for SqlitePosterRepository {
    fn create(&self, poster: Poster) -> impl Future<Output = Result<Poster, AfficheError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(poster.id.to_string())
                .bind(&poster.title)
                .bind(poster.date.to_string())
                .bind(&poster.location)
                .bind(poster.image.as_str())
                .bind(poster.created_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(poster)
        }
    }

    fn get_by_id(
        &self,
        id: PosterId,
    ) -> impl Future<Output = Result<Option<Poster>, AfficheError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Poster>, AfficheError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        poster: Poster,
    ) -> impl Future<Output = Result<Option<Poster>, AfficheError>> + Send {
        let pool = self.pool.clone();
        async move {
            // created_at is server-assigned and never replaced.
            let result = sqlx::query(UPDATE)
                .bind(&poster.title)
                .bind(poster.date.to_string())
                .bind(&poster.location)
                .bind(poster.image.as_str())
                .bind(poster.id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Ok(None);
            }

            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(poster.id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete(&self, id: PosterId) -> impl Future<Output = Result<bool, AfficheError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
