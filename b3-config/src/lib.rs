//! Shared configuration loader for the b3 pipeline.
//!
//! `defaults/b3.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`B3Config`].

use b3_parser::b3::lexicon::LexiconSettings;
use b3_parser::b3::translit::TranslitSettings;
use b3_parser::b3::TranslationProfile;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/b3.default.toml");

/// Top-level configuration consumed by b3 applications.
#[derive(Debug, Clone, Deserialize)]
pub struct B3Config {
    pub transliteration: TranslitSettings,
    pub lexicon: LexiconSettings,
    /// Parsing profile per translation identifier (`hewlc`, `enkjv`, ...)
    #[serde(default)]
    pub translations: BTreeMap<String, TranslationProfile>,
}

impl B3Config {
    /// The configured profile for a translation, or the built-in guess from its identifier.
    pub fn profile(&self, translation: &str) -> TranslationProfile {
        let id = translation.to_ascii_lowercase();
        match self.translations.get(&id) {
            Some(profile) => *profile,
            None => {
                let profile = TranslationProfile::for_translation(&id);
                tracing::warn!(
                    translation = %id,
                    ?profile,
                    "no configured profile, falling back to built-in"
                );
                profile
            }
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for command-line settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<B3Config, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<B3Config, ConfigError> {
    Loader::new().build()
}
