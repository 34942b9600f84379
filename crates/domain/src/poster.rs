//! Poster — the sole persisted entity: title, date, location, embedded image.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AfficheError, ValidationError};
use crate::id::PosterId;
use crate::image::ImageData;
use crate::time::Timestamp;

/// An event poster captured by the user.
///
/// `date` is the event date and doubles as the sort/group key; it is
/// serialized as a `YYYY-MM-DD` string. `created_at` is assigned by the
/// server on creation and never user-editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poster {
    pub id: PosterId,
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    pub image: ImageData,
    #[serde(rename = "createdAt")]
    pub created_at: Timestamp,
}

impl Poster {
    /// Create a builder for constructing a [`Poster`].
    #[must_use]
    pub fn builder() -> PosterBuilder {
        PosterBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AfficheError::Validation`] when `title`, `location`, or
    /// `image` is empty.
    pub fn validate(&self) -> Result<(), AfficheError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if self.location.is_empty() {
            return Err(ValidationError::EmptyLocation.into());
        }
        if self.image.is_empty() {
            return Err(ValidationError::MissingImage.into());
        }
        Ok(())
    }
}

/// Parse a `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] when `value` is not a valid
/// calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

/// Step-by-step builder for [`Poster`].
#[derive(Debug, Default)]
pub struct PosterBuilder {
    id: Option<PosterId>,
    title: Option<String>,
    date: Option<NaiveDate>,
    location: Option<String>,
    image: Option<ImageData>,
    created_at: Option<Timestamp>,
}

impl PosterBuilder {
    #[must_use]
    pub fn id(mut self, id: PosterId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn image(mut self, image: impl Into<ImageData>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Consume the builder, validate, and return a [`Poster`].
    ///
    /// # Errors
    ///
    /// Returns [`AfficheError::Validation`] if `date` is missing or any
    /// invariant fails.
    pub fn build(self) -> Result<Poster, AfficheError> {
        let Some(date) = self.date else {
            return Err(ValidationError::InvalidDate("missing".to_string()).into());
        };
        let poster = Poster {
            id: self.id.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            date,
            location: self.location.unwrap_or_default(),
            image: self.image.unwrap_or_else(|| ImageData::new("")),
            created_at: self.created_at.unwrap_or_else(crate::time::now),
        };
        poster.validate()?;
        Ok(poster)
    }
}
