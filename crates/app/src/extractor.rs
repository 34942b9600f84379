//! In-process date extractor backed by the domain byte scanner.

use std::future::Future;

use chrono::NaiveDate;

use affiche_domain::error::AfficheError;
use affiche_domain::extract::scan_for_date;
use affiche_domain::image::ImageData;

use crate::ports::DateExtractor;

/// Heuristic extractor that decodes the base64 payload and scans the raw
/// bytes for printable date text.
///
/// A payload that fails to decode yields "nothing found" rather than an
/// error; extraction is best-effort by contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicDateExtractor;

impl HeuristicDateExtractor {
    /// Create a new extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DateExtractor for HeuristicDateExtractor {
    fn extract(
        &self,
        image: &ImageData,
    ) -> impl Future<Output = Result<Option<NaiveDate>, AfficheError>> + Send {
        let result = image
            .decode()
            .ok()
            .and_then(|bytes| scan_for_date(&bytes));
        async move { Ok(result) }
    }
}
