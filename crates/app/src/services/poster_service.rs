//! Poster service — use-cases for the poster collection.

use affiche_domain::error::{AfficheError, NotFoundError};
use affiche_domain::id::PosterId;
use affiche_domain::poster::Poster;

use crate::ports::PosterRepository;

/// Application service for poster CRUD operations.
pub struct PosterService<R> {
    repo: R,
}

impl<R: PosterRepository> PosterService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new poster after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AfficheError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_poster(&self, poster: Poster) -> Result<Poster, AfficheError> {
        poster.validate()?;
        let created = self.repo.create(poster).await?;
        tracing::debug!(id = %created.id, date = %created.date, "poster created");
        Ok(created)
    }

    /// Look up a poster by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AfficheError::NotFound`] when no poster with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_poster(&self, id: PosterId) -> Result<Poster, AfficheError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Poster",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all posters, sorted ascending by date.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_posters(&self) -> Result<Vec<Poster>, AfficheError> {
        self.repo.get_all().await
    }

    /// Replace an existing poster (full-record update).
    ///
    /// # Errors
    ///
    /// Returns [`AfficheError::Validation`] if invariants fail,
    /// [`AfficheError::NotFound`] when the target does not exist, or a
    /// storage error from the repository.
    pub async fn update_poster(&self, poster: Poster) -> Result<Poster, AfficheError> {
        poster.validate()?;
        let id = poster.id;
        let updated = self.repo.update(poster).await?.ok_or(NotFoundError {
            entity: "Poster",
            id: id.to_string(),
        })?;
        tracing::debug!(id = %updated.id, "poster replaced");
        Ok(updated)
    }

    /// Delete a poster by id.
    ///
    /// # Errors
    ///
    /// Returns [`AfficheError::NotFound`] when no poster with `id` exists,
    /// or a storage error propagated from the repository.
    pub async fn delete_poster(&self, id: PosterId) -> Result<(), AfficheError> {
        if self.repo.delete(id).await? {
            tracing::debug!(id = %id, "poster deleted");
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "Poster",
                id: id.to_string(),
            }
            .into())
        }
    }
}
