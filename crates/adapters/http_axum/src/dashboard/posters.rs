//! Dashboard pages for the poster list and the add/edit/delete forms.

use std::str::FromStr;

use askama::Template;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use affiche_app::ports::{DateExtractor, PosterRepository};
use affiche_domain::error::{AfficheError, ValidationError};
use affiche_domain::grouping::{MonthGroup, group_by_month};
use affiche_domain::id::PosterId;
use affiche_domain::poster::{Poster, parse_date};

use super::DashboardError;
use crate::state::AppState;

/// Poster list page template — posters grouped by "Month YYYY".
#[derive(Template)]
#[template(path = "poster_list.html")]
pub struct PosterListTemplate {
    groups: Vec<MonthGroup>,
}

impl IntoResponse for PosterListTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Add/edit form page template.
#[derive(Template)]
#[template(path = "poster_form.html")]
pub struct PosterFormTemplate {
    heading: &'static str,
    action: String,
    error: Option<String>,
    title: String,
    date: String,
    location: String,
    image: String,
}

impl IntoResponse for PosterFormTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Submitted form fields for creating or replacing a poster.
#[derive(Deserialize)]
pub struct PosterForm {
    pub title: String,
    pub date: String,
    pub location: String,
    pub image: String,
}

impl PosterForm {
    /// Build a domain [`Poster`] from the submitted fields.
    fn to_poster(&self, id: Option<PosterId>) -> Result<Poster, AfficheError> {
        let date = parse_date(&self.date)?;
        let mut builder = Poster::builder()
            .title(self.title.clone())
            .date(date)
            .location(self.location.clone())
            .image(self.image.clone());
        if let Some(id) = id {
            builder = builder.id(id);
        }
        builder.build()
    }

    /// Re-render the form with a validation message and the entered values.
    fn re_render(self, heading: &'static str, action: String, err: &ValidationError) -> Response {
        let template = PosterFormTemplate {
            heading,
            action,
            error: Some(err.to_string()),
            title: self.title,
            date: self.date,
            location: self.location,
            image: self.image,
        };
        (StatusCode::BAD_REQUEST, template).into_response()
    }
}

fn parse_id(raw: &str) -> Result<PosterId, DashboardError> {
    PosterId::from_str(raw).map_err(|_| {
        DashboardError::from(AfficheError::Validation(ValidationError::InvalidId(
            raw.to_string(),
        )))
    })
}

/// `GET /posters` — chronological list grouped by month.
pub async fn list<PR, DX>(
    State(state): State<AppState<PR, DX>>,
) -> Result<PosterListTemplate, DashboardError>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    let posters = state.poster_service.list_posters().await?;
    Ok(PosterListTemplate {
        groups: group_by_month(posters),
    })
}

/// `GET /posters/new` — empty add form.
pub async fn new_form() -> PosterFormTemplate {
    PosterFormTemplate {
        heading: "Add poster",
        action: "/posters/new".to_string(),
        error: None,
        title: String::new(),
        date: String::new(),
        location: String::new(),
        image: String::new(),
    }
}

/// `POST /posters/new` — create a poster, redirect to the list.
pub async fn create<PR, DX>(
    State(state): State<AppState<PR, DX>>,
    Form(form): Form<PosterForm>,
) -> Result<Response, DashboardError>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    let result = match form.to_poster(None) {
        Ok(poster) => state.poster_service.create_poster(poster).await.map(|_| ()),
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => Ok(Redirect::to("/posters").into_response()),
        Err(AfficheError::Validation(err)) => {
            Ok(form.re_render("Add poster", "/posters/new".to_string(), &err))
        }
        Err(err) => Err(err.into()),
    }
}

/// `GET /posters/:id/edit` — edit form pre-filled with the current record.
pub async fn edit_form<PR, DX>(
    State(state): State<AppState<PR, DX>>,
    Path(id): Path<String>,
) -> Result<PosterFormTemplate, DashboardError>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    let poster_id = parse_id(&id)?;
    let poster = state.poster_service.get_poster(poster_id).await?;

    Ok(PosterFormTemplate {
        heading: "Edit poster",
        action: format!("/posters/{poster_id}/edit"),
        error: None,
        title: poster.title,
        date: poster.date.to_string(),
        location: poster.location,
        image: poster.image.as_str().to_string(),
    })
}

/// `POST /posters/:id/edit` — full-record replace, redirect to the list.
pub async fn update<PR, DX>(
    State(state): State<AppState<PR, DX>>,
    Path(id): Path<String>,
    Form(form): Form<PosterForm>,
) -> Result<Response, DashboardError>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    let poster_id = parse_id(&id)?;

    let result = match form.to_poster(Some(poster_id)) {
        Ok(poster) => state.poster_service.update_poster(poster).await.map(|_| ()),
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => Ok(Redirect::to("/posters").into_response()),
        Err(AfficheError::Validation(err)) => Ok(form.re_render(
            "Edit poster",
            format!("/posters/{poster_id}/edit"),
            &err,
        )),
        Err(err) => Err(err.into()),
    }
}

/// `POST /posters/:id/delete` — delete, redirect to the list.
pub async fn delete<PR, DX>(
    State(state): State<AppState<PR, DX>>,
    Path(id): Path<String>,
) -> Result<Redirect, DashboardError>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    let poster_id = parse_id(&id)?;
    state.poster_service.delete_poster(poster_id).await?;
    Ok(Redirect::to("/posters"))
}
