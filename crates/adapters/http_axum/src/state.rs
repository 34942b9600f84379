//! Shared application state for axum handlers.

use std::sync::Arc;

use affiche_app::ports::{DateExtractor, PosterRepository};
use affiche_app::services::extraction_service::ExtractionService;
use affiche_app::services::poster_service::PosterService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository and extractor types to avoid dynamic
/// dispatch. `Clone` is implemented manually so the underlying types
/// themselves do not need to be `Clone` — only the `Arc` wrappers are
/// cloned.
pub struct AppState<PR, DX> {
    /// Poster CRUD service.
    pub poster_service: Arc<PosterService<PR>>,
    /// Best-effort date extraction service.
    pub extraction_service: Arc<ExtractionService<DX>>,
}

impl<PR, DX> Clone for AppState<PR, DX> {
    fn clone(&self) -> Self {
        Self {
            poster_service: Arc::clone(&self.poster_service),
            extraction_service: Arc::clone(&self.extraction_service),
        }
    }
}

impl<PR, DX> AppState<PR, DX>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        poster_service: PosterService<PR>,
        extraction_service: ExtractionService<DX>,
    ) -> Self {
        Self {
            poster_service: Arc::new(poster_service),
            extraction_service: Arc::new(extraction_service),
        }
    }
}
