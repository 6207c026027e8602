//! Document loading utilities
//!
//! `DocumentLoader` loads document bytes from a file or memory and runs transforms on them.
//! It is used by production callers and tests alike.
//!
//! # Example
//!
//! ```rust,ignore
//! use b3_parser::b3::loader::DocumentLoader;
//! use b3_parser::b3::TranslationProfile;
//!
//! let records = DocumentLoader::from_path("Gen.xml")?
//!     .records(TranslationProfile::hebrew_osis())?;
//! ```

use crate::b3::profile::TranslationProfile;
use crate::b3::token::{KeyedToken, VerseRecord};
use crate::b3::transforms::standard::{document_pipeline, tokens_pipeline};
use crate::b3::transforms::{Transform, TransformError};
use crate::b3::translit::TranslitSettings;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error that can occur when loading documents
#[derive(Debug, Error)]
pub enum LoaderError {
    /// IO error when reading file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Transform/parsing error
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),
}

/// Document loader with transform shortcuts
pub struct DocumentLoader {
    source: Vec<u8>,
}

impl DocumentLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), bytes = source.len(), "loaded document");
        Ok(DocumentLoader { source })
    }

    pub fn from_bytes(source: impl Into<Vec<u8>>) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into().into_bytes(),
        }
    }

    /// Run a custom transform on the source
    ///
    /// This is the generic method that all shortcuts use internally.
    pub fn with<O: 'static>(&self, transform: &Transform<Vec<u8>, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Parse, group and annotate with default transliteration settings.
    pub fn records(&self, profile: TranslationProfile) -> Result<Vec<VerseRecord>, LoaderError> {
        self.records_with(profile, TranslitSettings::default())
    }

    pub fn records_with(
        &self,
        profile: TranslationProfile,
        settings: TranslitSettings,
    ) -> Result<Vec<VerseRecord>, LoaderError> {
        self.with(&document_pipeline(profile, settings))
    }

    /// The flat keyed token stream, before grouping.
    pub fn tokens(&self, profile: TranslationProfile) -> Result<Vec<KeyedToken>, LoaderError> {
        self.with(&tokens_pipeline(profile))
    }

    pub fn source(&self) -> &[u8] {
        &self.source
    }
}
