//! Inline image payloads — `data:<media>;base64,...` strings stored with
//! the record rather than referenced externally.

use std::fmt;

use base64::Engine;
use serde::{Deserialize, Serialize};

/// An embedded image payload, kept in its wire form (a data-URI-style base64
/// string such as `data:image/jpeg;base64,...`).
///
/// A bare base64 string without the `data:` prefix is accepted too; it just
/// has no declared media type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageData(String);

impl ImageData {
    /// Wrap a raw data-URI (or bare base64) string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw stored string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The declared media type, e.g. `image/jpeg`, when the payload is a
    /// data URI.
    #[must_use]
    pub fn media_type(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let meta = rest.split_once(',').map_or(rest, |(meta, _)| meta);
        Some(meta.split(';').next().unwrap_or(meta))
    }

    /// The base64 portion of the payload (everything after the comma for a
    /// data URI, the whole string otherwise).
    #[must_use]
    pub fn payload(&self) -> &str {
        self.0
            .split_once(',')
            .map_or(self.0.as_str(), |(_, payload)| payload)
    }

    /// Decode the base64 payload into raw bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`base64::DecodeError`] when the payload is not valid
    /// base64.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD.decode(self.payload())
    }
}

impl fmt::Display for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ImageData {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for ImageData {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
