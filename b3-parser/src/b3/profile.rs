//! Translation profiles
//!
//!     A translation identifier (`hewlc`, `grtisch`, `enkjv`, ...) decides three things once per
//!     document: which markup dialect to walk, which word-tag parser decomposes `w` nodes, and
//!     which transliterator annotates the result. The first two letters of an identifier name
//!     its language, which is what [TranslationProfile::for_translation] falls back on when no
//!     configured profile exists.

use crate::b3::markup::Dialect;
use crate::b3::word_tags::WordTagParser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Hebrew,
    Greek,
    English,
}

impl Language {
    /// Language from the two-letter prefix of a translation identifier.
    pub fn from_translation(translation: &str) -> Self {
        match translation.get(..2).map(str::to_ascii_lowercase).as_deref() {
            Some("he") => Language::Hebrew,
            Some("gr") => Language::Greek,
            _ => Language::English,
        }
    }

    /// Letter that prefixes Strong's codes for this language, if it has one.
    pub fn code_prefix(self) -> Option<char> {
        match self {
            Language::Hebrew => Some('H'),
            Language::Greek => Some('G'),
            Language::English => None,
        }
    }
}

fn default_kjv_versification() -> bool {
    true
}

/// How documents of one translation are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationProfile {
    pub dialect: Dialect,
    pub word_tags: WordTagParser,
    pub language: Language,
    /// Follow `KJV:` notes that remap verses to KJV numbering
    #[serde(default = "default_kjv_versification")]
    pub kjv_versification: bool,
}

impl TranslationProfile {
    pub fn new(dialect: Dialect, word_tags: WordTagParser, language: Language) -> Self {
        TranslationProfile {
            dialect,
            word_tags,
            language,
            kjv_versification: true,
        }
    }

    /// OSIS with morpheme-split Hebrew words (Westminster Leningrad Codex).
    pub fn hebrew_osis() -> Self {
        Self::new(Dialect::Osis, WordTagParser::Hebrew, Language::Hebrew)
    }

    /// OSIS with `strong:` lemma attributes (Tischendorf).
    pub fn greek_osis() -> Self {
        Self::new(Dialect::Osis, WordTagParser::Greek, Language::Greek)
    }

    pub fn english_usfx() -> Self {
        Self::new(Dialect::Usfx, WordTagParser::Default, Language::English)
    }

    /// Built-in profile for an identifier that has no configured profile.
    ///
    /// The OpenScriptures sources (`hewlc`, `grtisch`) are OSIS; everything else is
    /// assumed to come from eBible as USFX.
    pub fn for_translation(translation: &str) -> Self {
        match translation.to_ascii_lowercase().as_str() {
            "hewlc" => Self::hebrew_osis(),
            "grtisch" => Self::greek_osis(),
            other => Self::new(
                Dialect::Usfx,
                WordTagParser::Default,
                Language::from_translation(other),
            ),
        }
    }

    pub fn with_kjv_versification(mut self, enabled: bool) -> Self {
        self.kjv_versification = enabled;
        self
    }
}
