//! Dashboard pages for the calendar view.

use std::collections::HashSet;

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Response};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use affiche_app::ports::{DateExtractor, PosterRepository};
use affiche_domain::calendar::{CalendarDay, MonthView};
use affiche_domain::error::AfficheError;
use affiche_domain::poster::{Poster, parse_date};

use super::DashboardError;
use crate::state::AppState;

/// Month grid page template.
#[derive(Template)]
#[template(path = "calendar.html")]
pub struct CalendarTemplate {
    title: String,
    prev_year: i32,
    prev_month: u32,
    next_year: i32,
    next_month: u32,
    weeks: Vec<Vec<Option<CalendarDay>>>,
}

impl IntoResponse for CalendarTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Day detail page template — posters for one date.
#[derive(Template)]
#[template(path = "day.html")]
pub struct DayTemplate {
    date: String,
    posters: Vec<Poster>,
}

impl IntoResponse for DayTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Query parameters for the month view; defaults to the current month.
#[derive(Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// `GET /calendar?year=&month=` — month grid with marked days.
pub async fn month<PR, DX>(
    State(state): State<AppState<PR, DX>>,
    Query(query): Query<CalendarQuery>,
) -> Result<CalendarTemplate, DashboardError>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    let today = affiche_domain::time::now().date_naive();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());

    let posters = state.poster_service.list_posters().await?;
    let marked: HashSet<NaiveDate> = posters.iter().map(|p| p.date).collect();

    let view = MonthView::build(year, month, &marked).map_err(AfficheError::from)?;
    let (prev_year, prev_month) = view.prev();
    let (next_year, next_month) = view.next();

    Ok(CalendarTemplate {
        title: view.title(),
        prev_year,
        prev_month,
        next_year,
        next_month,
        weeks: view.weeks,
    })
}

/// `GET /calendar/:date` — posters on one day.
pub async fn day<PR, DX>(
    State(state): State<AppState<PR, DX>>,
    Path(date): Path<String>,
) -> Result<DayTemplate, DashboardError>
where
    PR: PosterRepository + Send + Sync + 'static,
    DX: DateExtractor + Send + Sync + 'static,
{
    let date = parse_date(&date).map_err(AfficheError::from)?;

    let posters = state.poster_service.list_posters().await?;
    let posters: Vec<Poster> = posters.into_iter().filter(|p| p.date == date).collect();

    Ok(DayTemplate {
        date: date.to_string(),
        posters,
    })
}
