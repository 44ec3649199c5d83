//! Asset storage references and URL resolution.

use serde::{Deserialize, Serialize};

use crate::serde::{
    deserialize_lenient_string, deserialize_optional_nonzero, deserialize_optional_string,
};

/// Base URL of the asset storage bucket.
///
/// Set once at startup and shared read-only by every normalizer. Relative
/// storage filenames are turned into absolute URLs by plain concatenation,
/// so the base is expected to carry its trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetHost {
    base: String,
}

impl AssetHost {
    /// Creates an asset host from its base URL.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Returns the base URL.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Resolves a storage filename into an absolute URL.
    ///
    /// Returns an empty string when the filename is absent or empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sitecms_core::AssetHost;
    ///
    /// let host = AssetHost::new("https://cdn.example.com/");
    /// assert_eq!(host.resolve(Some("a/b.png")), "https://cdn.example.com/a/b.png");
    /// assert_eq!(host.resolve(None), "");
    /// ```
    pub fn resolve(&self, filename_disk: Option<&str>) -> String {
        match filename_disk {
            Some(filename) if !filename.is_empty() => format!("{}{}", self.base, filename),
            _ => String::new(),
        }
    }

    /// Resolves an optional file reference into an absolute URL.
    pub fn resolve_image(&self, image: Option<&ImageRef>) -> String {
        self.resolve(image.and_then(|image| image.filename_disk.as_deref()))
    }
}

/// A file stored in the CMS asset bucket, as referenced by content records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// Storage filename, relative to the asset host.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub filename_disk: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_nonzero",
        skip_serializing_if = "Option::is_none"
    )]
    pub width: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_nonzero",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<u32>,
}

impl ImageRef {
    /// Creates a reference to a stored file.
    pub fn new(filename_disk: impl Into<String>) -> Self {
        Self {
            filename_disk: Some(filename_disk.into()),
            ..Self::default()
        }
    }

    /// Absolute URL of this file on the given host.
    pub fn url(&self, host: &AssetHost) -> String {
        host.resolve(self.filename_disk.as_deref())
    }
}
