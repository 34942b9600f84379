//! JSON REST handler for best-effort date extraction.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use affiche_app::ports::{DateExtractor, PosterRepository};
use affiche_domain::image::ImageData;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for date extraction.
#[derive(Deserialize)]
pub struct ExtractDateRequest {
    pub image: String,
}

/// Extraction outcome. `date` is omitted when nothing was found.
#[derive(Serialize)]
pub struct ExtractDateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// `POST /api/extract-date`
///
/// Finding no date is a normal outcome (`success: false`), not an error;
/// only an empty payload is rejected.
pub async fn extract_date<PR, DX>(
    State(state): State<AppState<PR, DX>>,
    Json(request): Json<ExtractDateRequest>,
) -> Result<Json<ExtractDateResponse>, ApiError>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    let image = ImageData::new(request.image);
    let found = state.extraction_service.extract_date(&image).await?;

    Ok(Json(ExtractDateResponse {
        success: found.is_some(),
        date: found.map(|date| date.to_string()),
    }))
}
