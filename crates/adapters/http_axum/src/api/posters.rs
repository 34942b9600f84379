//! JSON REST handlers for posters.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use affiche_app::ports::{DateExtractor, PosterRepository};
use affiche_domain::error::{AfficheError, ValidationError};
use affiche_domain::id::PosterId;
use affiche_domain::poster::{Poster, parse_date};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a poster.
#[derive(Deserialize)]
pub struct PosterPayload {
    pub title: String,
    pub date: String,
    pub location: String,
    pub image: String,
}

impl PosterPayload {
    /// Build a domain [`Poster`] from the payload.
    fn into_poster(self, id: Option<PosterId>) -> Result<Poster, AfficheError> {
        let date = parse_date(&self.date)?;
        let mut builder = Poster::builder()
            .title(self.title)
            .date(date)
            .location(self.location)
            .image(self.image);
        if let Some(id) = id {
            builder = builder.id(id);
        }
        builder.build()
    }
}

/// Confirmation body returned after a delete.
#[derive(Serialize)]
pub struct DeleteConfirmation {
    pub message: &'static str,
    pub id: String,
}

fn parse_id(raw: &str) -> Result<PosterId, ApiError> {
    PosterId::from_str(raw).map_err(|_| {
        ApiError::from(AfficheError::Validation(ValidationError::InvalidId(
            raw.to_string(),
        )))
    })
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Poster>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Poster>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Poster>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Poster>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<DeleteConfirmation>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/posters` — all posters, ascending by date.
pub async fn list<PR, DX>(State(state): State<AppState<PR, DX>>) -> Result<ListResponse, ApiError>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    let posters = state.poster_service.list_posters().await?;
    Ok(ListResponse::Ok(Json(posters)))
}

/// `GET /api/posters/:id`
pub async fn get<PR, DX>(
    State(state): State<AppState<PR, DX>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    let poster_id = parse_id(&id)?;
    let poster = state.poster_service.get_poster(poster_id).await?;
    Ok(GetResponse::Ok(Json(poster)))
}

/// `POST /api/posters`
pub async fn create<PR, DX>(
    State(state): State<AppState<PR, DX>>,
    Json(payload): Json<PosterPayload>,
) -> Result<CreateResponse, ApiError>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    let poster = payload.into_poster(None)?;
    let created = state.poster_service.create_poster(poster).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/posters/:id` — full-record replace.
pub async fn update<PR, DX>(
    State(state): State<AppState<PR, DX>>,
    Path(id): Path<String>,
    Json(payload): Json<PosterPayload>,
) -> Result<UpdateResponse, ApiError>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    let poster_id = parse_id(&id)?;
    let poster = payload.into_poster(Some(poster_id))?;
    let updated = state.poster_service.update_poster(poster).await?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /api/posters/:id`
pub async fn delete<PR, DX>(
    State(state): State<AppState<PR, DX>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    let poster_id = parse_id(&id)?;
    state.poster_service.delete_poster(poster_id).await?;
    Ok(DeleteResponse::Ok(Json(DeleteConfirmation {
        message: "poster deleted",
        id: poster_id.to_string(),
    })))
}
