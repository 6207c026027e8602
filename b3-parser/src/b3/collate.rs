//! Collating translations per verse
//!
//!     Staged translations are merged into one record per verse key, each carrying the tokens
//!     of every translation that has the verse:
//!
//!         {"chapterId": "Gen.1", "verseNum": 1, "translations": [
//!             {"translation": "KJV", "lan": "en", "tokens": [...]},
//!             {"translation": "WLC", "lan": "he", "tokens": [...]}]}
//!
//!     Verses keep the order in which they were first seen; translations keep the order in
//!     which they were added. A translation whose stream revisits a key is merged into its
//!     existing entry for that verse.

use crate::b3::error::B3Error;
use crate::b3::token::{Token, VerseRecord};
use crate::b3::verse::VerseKey;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationTokens {
    pub translation: String,
    pub lan: String,
    pub tokens: Vec<Token>,
}

impl TranslationTokens {
    /// Split an identifier like `enkjv` into language `en` and name `KJV`.
    pub fn new(id: &str, tokens: Vec<Token>) -> Self {
        let id = id.to_ascii_lowercase();
        let split = id.char_indices().nth(2).map_or(id.len(), |(i, _)| i);
        let (lan, name) = id.split_at(split);
        TranslationTokens {
            translation: name.to_ascii_uppercase(),
            lan: lan.to_string(),
            tokens,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollatedVerse {
    #[serde(flatten)]
    pub key: VerseKey,
    pub translations: Vec<TranslationTokens>,
}

/// Which verses to keep: all, or those whose chapter id or book code is listed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChapterFilter {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl ChapterFilter {
    pub fn matches(&self, key: &VerseKey) -> bool {
        match self {
            ChapterFilter::All => true,
            ChapterFilter::Only(ids) => ids.contains(&key.chapter_id) || ids.contains(key.book()),
        }
    }
}

impl FromStr for ChapterFilter {
    type Err = B3Error;

    /// `all` (any case) or a comma-separated list such as `Gen.1,Ps.1,Matt`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(ChapterFilter::All);
        }
        let ids: BTreeSet<String> = s
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();
        if ids.is_empty() {
            return Err(B3Error::format(s, "empty chapter filter"));
        }
        Ok(ChapterFilter::Only(ids))
    }
}

#[derive(Debug, Default)]
pub struct Collator {
    index: HashMap<VerseKey, usize>,
    verses: Vec<CollatedVerse>,
}

impl Collator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, translation: &str, records: Vec<VerseRecord>) {
        let entry = TranslationTokens::new(translation, Vec::new());
        for record in records {
            let position = match self.index.get(&record.key) {
                Some(&position) => position,
                None => {
                    self.index.insert(record.key.clone(), self.verses.len());
                    self.verses.push(CollatedVerse {
                        key: record.key,
                        translations: Vec::new(),
                    });
                    self.verses.len() - 1
                }
            };
            let translations = &mut self.verses[position].translations;
            match translations
                .iter_mut()
                .find(|t| t.translation == entry.translation && t.lan == entry.lan)
            {
                Some(existing) => existing.tokens.extend(record.tokens),
                None => translations.push(TranslationTokens {
                    tokens: record.tokens,
                    ..entry.clone()
                }),
            }
        }
    }

    pub fn finish(self, filter: &ChapterFilter) -> Vec<CollatedVerse> {
        let total = self.verses.len();
        let verses: Vec<CollatedVerse> = self
            .verses
            .into_iter()
            .filter(|v| filter.matches(&v.key))
            .collect();
        if verses.len() < total {
            tracing::warn!(kept = verses.len(), total, "chapter filter limits collated verses");
        }
        verses
    }
}

/// Collate staged translations, in the order given.
pub fn collate<I>(staged: I, filter: &ChapterFilter) -> Vec<CollatedVerse>
where
    I: IntoIterator<Item = (String, Vec<VerseRecord>)>,
{
    let mut collator = Collator::new();
    for (translation, records) in staged {
        collator.add(&translation, records);
    }
    let verses = collator.finish(filter);
    tracing::info!(verses = verses.len(), "collated translations");
    verses
}
