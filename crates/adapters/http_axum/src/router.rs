//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use affiche_app::ports::{DateExtractor, PosterRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api` and dashboard routes at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<PR, DX>(state: AppState<PR, DX>) -> Router
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use affiche_app::services::extraction_service::ExtractionService;
    use affiche_app::services::poster_service::PosterService;
    use affiche_domain::error::AfficheError;
    use affiche_domain::id::PosterId;
    use affiche_domain::image::ImageData;
    use affiche_domain::poster::Poster;
    use chrono::NaiveDate;
    use tower::ServiceExt;

    struct StubPosterRepo;
    struct StubExtractor;

    impl affiche_app::ports::PosterRepository for StubPosterRepo {
        async fn create(&self, poster: Poster) -> Result<Poster, AfficheError> {
            Ok(poster)
        }
        async fn get_by_id(&self, _id: PosterId) -> Result<Option<Poster>, AfficheError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Poster>, AfficheError> {
            Ok(vec![])
        }
        async fn update(&self, _poster: Poster) -> Result<Option<Poster>, AfficheError> {
            Ok(None)
        }
        async fn delete(&self, _id: PosterId) -> Result<bool, AfficheError> {
            Ok(false)
        }
    }

    impl affiche_app::ports::DateExtractor for StubExtractor {
        async fn extract(&self, _image: &ImageData) -> Result<Option<NaiveDate>, AfficheError> {
            Ok(None)
        }
    }

    fn test_state() -> AppState<StubPosterRepo, StubExtractor> {
        AppState::new(
            PosterService::new(StubPosterRepo),
            ExtractionService::new(StubExtractor),
        )
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_serve_api_banner() {
        let app = build(test_state());

        let response = app
            .oneshot(Request::builder().uri("/api/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Poster Collection API");
    }

    #[tokio::test]
    async fn should_return_not_found_for_missing_poster() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/posters/{}", PosterId::new()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_bad_request_for_malformed_id() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/posters/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("invalid identifier")
        );
    }

    #[tokio::test]
    async fn should_render_empty_list_page() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/posters")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
