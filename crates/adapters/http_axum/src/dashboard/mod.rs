//! Server-side rendered HTML dashboard (no JavaScript).

#[allow(clippy::missing_errors_doc)]
pub mod calendar;
pub mod home;
#[allow(clippy::missing_errors_doc)]
pub mod posters;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};

use affiche_app::ports::{DateExtractor, PosterRepository};
use affiche_domain::error::AfficheError;

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<PR, DX>() -> Router<AppState<PR, DX>>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<PR, DX>))
        .route("/posters", get(posters::list::<PR, DX>))
        .route(
            "/posters/new",
            get(posters::new_form).post(posters::create::<PR, DX>),
        )
        .route(
            "/posters/{id}/edit",
            get(posters::edit_form::<PR, DX>).post(posters::update::<PR, DX>),
        )
        .route("/posters/{id}/delete", post(posters::delete::<PR, DX>))
        .route("/calendar", get(calendar::month::<PR, DX>))
        .route("/calendar/{date}", get(calendar::day::<PR, DX>))
}

/// Maps [`AfficheError`] to a minimal HTML error page.
pub struct DashboardError(AfficheError);

impl From<AfficheError> for DashboardError {
    fn from(err: AfficheError) -> Self {
        Self(err)
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AfficheError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AfficheError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            AfficheError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = format!(
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
             <title>Error — Affiche</title></head><body><h1>Something went wrong</h1>\
             <p>{message}</p><p><a href=\"/\">Back to the dashboard</a></p></body></html>"
        );
        (status, Html(body)).into_response()
    }
}
