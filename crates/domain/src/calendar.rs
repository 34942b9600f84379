//! Calendar month grids with marked days for the calendar view.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::error::ValidationError;

/// One day cell in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    /// Day of month, 1-based.
    pub day: u32,
    pub date: NaiveDate,
    /// Whether at least one poster exists for this date.
    pub marked: bool,
}

/// A month laid out as Monday-first weeks of seven optional cells.
///
/// Leading and trailing `None` cells pad the first and last week so every
/// row renders with seven columns.
#[derive(Debug)]
pub struct MonthView {
    pub year: i32,
    /// Month of year, 1-based.
    pub month: u32,
    pub weeks: Vec<Vec<Option<CalendarDay>>>,
}

impl MonthView {
    /// Lay out `year`/`month`, marking the days present in `marked`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDate`] when the year/month pair is
    /// not a valid calendar month.
    pub fn build(
        year: i32,
        month: u32,
        marked: &HashSet<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| ValidationError::InvalidDate(format!("{year}-{month:02}")))?;
        let len = days_in_month(first);

        let mut weeks = Vec::new();
        let mut week: Vec<Option<CalendarDay>> =
            vec![None; first.weekday().num_days_from_monday() as usize];

        for day in 1..=len {
            // Safe by construction, day is within the month length.
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                continue;
            };
            week.push(Some(CalendarDay {
                day,
                date,
                marked: marked.contains(&date),
            }));
            if week.len() == 7 {
                weeks.push(std::mem::take(&mut week));
            }
        }
        if !week.is_empty() {
            week.resize(7, None);
            weeks.push(week);
        }

        Ok(Self { year, month, weeks })
    }

    /// Display title, e.g. `March 2024`.
    #[must_use]
    pub fn title(&self) -> String {
        // First of the month always exists once `build` succeeded.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|date| date.format("%B %Y").to_string())
            .unwrap_or_default()
    }

    /// Year/month of the previous month.
    #[must_use]
    pub fn prev(&self) -> (i32, u32) {
        if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        }
    }

    /// Year/month of the following month.
    #[must_use]
    pub fn next(&self) -> (i32, u32) {
        if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        }
    }
}

/// Number of days in the month containing `date`.
fn days_in_month(date: NaiveDate) -> u32 {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}
