//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod extract;
#[allow(clippy::missing_errors_doc)]
pub mod posters;

use axum::Json;
use axum::Router;
use axum::routing::{get, post};
use serde::Serialize;

use affiche_app::ports::{DateExtractor, PosterRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<PR, DX>() -> Router<AppState<PR, DX>>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(root))
        // Posters
        .route(
            "/posters",
            get(posters::list::<PR, DX>).post(posters::create::<PR, DX>),
        )
        .route(
            "/posters/{id}",
            get(posters::get::<PR, DX>)
                .put(posters::update::<PR, DX>)
                .delete(posters::delete::<PR, DX>),
        )
        // Extraction
        .route("/extract-date", post(extract::extract_date::<PR, DX>))
}

#[derive(Serialize)]
struct Banner {
    message: &'static str,
}

/// `GET /api/` — service banner.
async fn root() -> Json<Banner> {
    Json(Banner {
        message: "Poster Collection API",
    })
}
