//! Extraction port — best-effort date detection from an image payload.

use std::future::Future;

use chrono::NaiveDate;

use affiche_domain::error::AfficheError;
use affiche_domain::image::ImageData;

/// Boundary for date detection over an uploaded image.
///
/// `Ok(None)` means "nothing found" and is the normal outcome for images
/// without a recognizable date; it is never an error.
pub trait DateExtractor {
    fn extract(
        &self,
        image: &ImageData,
    ) -> impl Future<Output = Result<Option<NaiveDate>, AfficheError>> + Send;
}
