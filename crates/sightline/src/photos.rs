//! Reference photo staging.
//!
//! Photos are supplied by an external collaborator (file picker, CLI
//! arguments); this module only counts what was staged and produces
//! advisory notes. The format and size guidance is never enforced: a photo
//! outside the guidance is staged anyway, with a note attached.

use std::path::{Path, PathBuf};

/// File extensions the search advertises support for.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "heic"];

/// Soft per-file size guidance in bytes (10 MB). Advisory only.
pub const SOFT_SIZE_LIMIT_BYTES: u64 = 10 * 1024 * 1024;

/// One staged reference photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedPhoto {
    /// Path the photo was staged from.
    pub path: PathBuf,
    /// File size, when it could be read.
    pub size_bytes: Option<u64>,
}

/// The set of reference photos staged for a search.
#[derive(Debug, Clone, Default)]
pub struct PhotoSet {
    photos: Vec<StagedPhoto>,
}

impl PhotoSet {
    /// Create an empty photo set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of staged photos.
    #[must_use]
    pub fn count(&self) -> usize {
        self.photos.len()
    }

    /// Whether no photos are staged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// The staged photos, in staging order.
    #[must_use]
    pub fn photos(&self) -> &[StagedPhoto] {
        &self.photos
    }

    /// Stage a photo, returning advisory notes about it.
    ///
    /// The photo is always staged; the notes flag an unexpected extension
    /// or a size above the soft guidance.
    pub fn stage(&mut self, path: PathBuf) -> Vec<String> {
        let mut advisories = Vec::new();

        if !has_supported_extension(&path) {
            advisories.push(format!(
                "{}: unexpected file type (expected one of: {})",
                path.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            ));
        }

        let size_bytes = std::fs::metadata(&path).map(|m| m.len()).ok();
        if let Some(size) = size_bytes {
            if size > SOFT_SIZE_LIMIT_BYTES {
                advisories.push(format!(
                    "{}: larger than the {} MB guidance",
                    path.display(),
                    SOFT_SIZE_LIMIT_BYTES / (1024 * 1024)
                ));
            }
        }

        self.photos.push(StagedPhoto { path, size_bytes });
        advisories
    }
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}
