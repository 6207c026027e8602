//! Standard transform definitions
//!
//! Pipelines are built from a translation profile. The built-in profiles have pre-built
//! statics using `once_cell::sync::Lazy`.

use crate::b3::profile::TranslationProfile;
use crate::b3::token::{KeyedToken, VerseRecord};
use crate::b3::transforms::stages::{
    AnnotateTransliteration, GroupVerses, PrepareSource, WalkMarkup,
};
use crate::b3::transforms::Transform;
use crate::b3::translit::TranslitSettings;
use once_cell::sync::Lazy;

/// Type alias for the token-stream transform
pub type TokensTransform = Transform<Vec<u8>, Vec<KeyedToken>>;

/// Type alias for the full document transform
pub type DocumentTransform = Transform<Vec<u8>, Vec<VerseRecord>>;

/// Document bytes → flat keyed token stream
///
/// 1. Source preparation
/// 2. Markup walk
pub fn tokens_pipeline(profile: TranslationProfile) -> TokensTransform {
    Transform::from_fn(Ok)
        .then(PrepareSource::new(profile.dialect))
        .then(WalkMarkup::new(profile))
}

/// Document bytes → annotated verse records
///
/// 1. Source preparation
/// 2. Markup walk
/// 3. Verse grouping
/// 4. Transliteration annotation (no-op for English)
pub fn document_pipeline(profile: TranslationProfile, settings: TranslitSettings) -> DocumentTransform {
    tokens_pipeline(profile)
        .then(GroupVerses::new())
        .then(AnnotateTransliteration::new(profile.language, settings))
}

/// Westminster Leningrad Codex style OSIS: morpheme-split Hebrew words.
pub static HEBREW_OSIS: Lazy<DocumentTransform> = Lazy::new(|| {
    document_pipeline(TranslationProfile::hebrew_osis(), TranslitSettings::default())
});

/// Tischendorf style OSIS: one Greek word per node with a `strong:` lemma.
pub static GREEK_OSIS: Lazy<DocumentTransform> = Lazy::new(|| {
    document_pipeline(TranslationProfile::greek_osis(), TranslitSettings::default())
});

/// eBible USFX in English.
pub static ENGLISH_USFX: Lazy<DocumentTransform> = Lazy::new(|| {
    document_pipeline(TranslationProfile::english_usfx(), TranslitSettings::default())
});
