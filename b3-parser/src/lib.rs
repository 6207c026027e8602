//! # b3-parser
//!
//! Normalizes scripture markup (OSIS and USFX) into a canonical per-verse token stream and
//! derives Latin transliterations for Hebrew and Greek source words.
//!
//! File Layout
//!
//!     src/b3
//!       ├── verse.rs         VerseKey parsing and formatting
//!       ├── token.rs         Token, TokenKind, VerseRecord
//!       ├── markup           element tree, source preparation, dialect rules, the walker
//!       ├── word_tags.rs     per-language decomposition of one word node
//!       ├── grouping.rs      flat keyed tokens -> VerseRecords
//!       ├── translit         Hebrew and Greek transliteration, the annotation pass
//!       ├── lexicon          raw Strong's lexicon loading and usage enrichment
//!       ├── collate.rs       one record per verse across translations
//!       ├── transforms       composable pipeline stages and the standard pipelines
//!       └── loader.rs        DocumentLoader shortcuts over the transforms
//!
//! Fetching documents, storing records and serving them are left to the caller. Everything in
//! here is a pure function of the input bytes, so documents can be processed in parallel.

pub mod b3;
