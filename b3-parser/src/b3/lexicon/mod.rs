//! Strong's lexicon loading and enrichment

pub mod enrich;
pub mod raw;

pub use enrich::{Lexicon, LexiconEnricher, LexiconEntry, LexiconSettings, StagedTranslations};
pub use raw::{RawEntry, RawLexicon};
