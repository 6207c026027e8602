//! Transliteration
//!
//!     Source-script text becomes a Latin transliteration. Hebrew goes through a clump-based,
//!     table-driven algorithm ([hebrew]); Greek through a flat letter table ([greek]). Both are
//!     pure functions of their input.
//!
//!     [annotate] applies them to verse records, [TranslitSettings] carries the knobs.

pub mod annotate;
pub mod greek;
pub mod hebrew;
pub mod hebrew_tables;

pub use annotate::Annotator;
pub use greek::transliterate_greek;
pub use hebrew::{transliterate_hebrew, HebrewTransliterator};

use crate::b3::profile::Language;
use serde::{Deserialize, Serialize};

fn default_lowercase() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslitSettings {
    /// Reverse word order of Hebrew transliterations
    #[serde(default)]
    pub hebrew_reverse: bool,
    /// Lowercase Greek transliterations (Hebrew output is always lowercase)
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
}

impl Default for TranslitSettings {
    fn default() -> Self {
        TranslitSettings {
            hebrew_reverse: false,
            lowercase: true,
        }
    }
}

impl TranslitSettings {
    /// Transliterate `text` as `language`. English has no transliteration.
    pub fn transliterate(&self, language: Language, text: &str) -> Option<String> {
        match language {
            Language::Hebrew => Some(HebrewTransliterator::new(self.hebrew_reverse).transliterate(text)),
            Language::Greek if self.lowercase => Some(transliterate_greek(text).to_lowercase()),
            Language::Greek => Some(transliterate_greek(text)),
            Language::English => None,
        }
    }
}
