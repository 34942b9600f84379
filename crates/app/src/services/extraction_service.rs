//! Extraction service — use-case for detecting a date in an uploaded image.

use chrono::NaiveDate;

use affiche_domain::error::{AfficheError, ValidationError};
use affiche_domain::image::ImageData;

use crate::ports::DateExtractor;

/// Application service wrapping a [`DateExtractor`] port.
pub struct ExtractionService<X> {
    extractor: X,
}

impl<X: DateExtractor> ExtractionService<X> {
    /// Create a new service backed by the given extractor.
    pub fn new(extractor: X) -> Self {
        Self { extractor }
    }

    /// Detect an event date in the image payload.
    ///
    /// `Ok(None)` means no date was found; only an empty payload is an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`AfficheError::Validation`] when the image payload is
    /// empty, or an error propagated from the extractor.
    pub async fn extract_date(&self, image: &ImageData) -> Result<Option<NaiveDate>, AfficheError> {
        if image.is_empty() {
            return Err(ValidationError::MissingImage.into());
        }
        self.extractor.extract(image).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;

    struct FixedExtractor(Option<NaiveDate>);

    impl DateExtractor for FixedExtractor {
        fn extract(
            &self,
            _image: &ImageData,
        ) -> impl Future<Output = Result<Option<NaiveDate>, AfficheError>> + Send {
            let result = self.0;
            async move { Ok(result) }
        }
    }

    #[tokio::test]
    async fn should_return_extracted_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let svc = ExtractionService::new(FixedExtractor(Some(date)));

        let found = svc
            .extract_date(&ImageData::new("aGVsbG8="))
            .await
            .unwrap();
        assert_eq!(found, Some(date));
    }

    #[tokio::test]
    async fn should_return_none_when_extractor_finds_nothing() {
        let svc = ExtractionService::new(FixedExtractor(None));

        let found = svc
            .extract_date(&ImageData::new("aGVsbG8="))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn should_reject_empty_image_payload() {
        let svc = ExtractionService::new(FixedExtractor(None));

        let result = svc.extract_date(&ImageData::new("")).await;
        assert!(matches!(
            result,
            Err(AfficheError::Validation(ValidationError::MissingImage))
        ));
    }
}
