//! Dashboard home page — overview of the collection.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use affiche_app::ports::{DateExtractor, PosterRepository};

use super::DashboardError;
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    poster_count: usize,
    upcoming_count: usize,
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — collection overview.
pub async fn index<PR, DX>(
    State(state): State<AppState<PR, DX>>,
) -> Result<HomeTemplate, DashboardError>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    let posters = state.poster_service.list_posters().await?;
    let today = affiche_domain::time::now().date_naive();

    let upcoming_count = posters.iter().filter(|p| p.date >= today).count();

    Ok(HomeTemplate {
        poster_count: posters.len(),
        upcoming_count,
    })
}
