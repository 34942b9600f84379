//! Storage port — repository trait for poster persistence.

use std::future::Future;

use affiche_domain::error::AfficheError;
use affiche_domain::id::PosterId;
use affiche_domain::poster::Poster;

/// Persistence boundary for the poster collection.
///
/// `get_all` returns the collection sorted ascending by `date`; same-date
/// order is unspecified (no secondary key). `update` replaces the full
/// record and reports a missing target as `None`; `delete` reports whether
/// a record was removed.
pub trait PosterRepository {
    fn create(&self, poster: Poster) -> impl Future<Output = Result<Poster, AfficheError>> + Send;

    fn get_by_id(
        &self,
        id: PosterId,
    ) -> impl Future<Output = Result<Option<Poster>, AfficheError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Poster>, AfficheError>> + Send;

    fn update(
        &self,
        poster: Poster,
    ) -> impl Future<Output = Result<Option<Poster>, AfficheError>> + Send;

    fn delete(&self, id: PosterId) -> impl Future<Output = Result<bool, AfficheError>> + Send;
}
