//! Word-tag parsers
//!
//!     A word node carries its text plus a lexical attribute whose layout differs per source.
//!     The parser for a document is chosen once, from its translation profile, and turns one
//!     word node into one or more classified tokens:
//!
//!     - Default: `<w>In</w>` becomes one Word token without a code.
//!     - Greek: `<w lemma="strong:G976 lemma:βίβλος">Βίβλος</w>` becomes one Word token `G976`.
//!     - Hebrew: `<w lemma="c/8659">וְ/תַרְשִׁישָׁ/ה</w>` splits on `/` into a Prefix (`c`), a Word
//!       (`H8659`) and a Suffix (the trailing segment with no code).
//!
//!     Hebrew segmentation uses the three-way split. A segment whose code is numeric is a Word;
//!     a segment whose code is not numeric is a Prefix; a text segment beyond the last code, or
//!     a final non-numeric code that follows a Word, is a Suffix.
//!
//!     All parsers store text in canonical decomposed form (NFD).

use crate::b3::token::Token;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordTagParser {
    #[default]
    Default,
    Hebrew,
    Greek,
}

impl WordTagParser {
    /// Decompose one word node into tokens.
    ///
    /// `lemma` is the node's lexical attribute, if it has one.
    pub fn parse(self, text: &str, lemma: Option<&str>) -> Vec<Token> {
        let text: String = text.nfd().collect();
        match (self, lemma) {
            (WordTagParser::Default, _) => vec![Token::word(text, None)],
            (WordTagParser::Greek, lemma) => vec![Token::word(text, lemma.and_then(greek_code))],
            (WordTagParser::Hebrew, Some(lemma)) => split_hebrew(&text, lemma),
            (WordTagParser::Hebrew, None) => {
                tracing::warn!(text = %text, "hebrew word without lemma attribute");
                vec![Token::word(text, None)]
            }
        }
    }
}

/// The `strong` entry of a `key:value` lemma attribute.
fn greek_code(lemma: &str) -> Option<String> {
    lemma
        .split_whitespace()
        .filter_map(|item| item.split_once(':'))
        .find(|(key, _)| *key == "strong")
        .and_then(|(_, value)| normalize_code(value, Some('G')))
}

fn split_hebrew(text: &str, lemma: &str) -> Vec<Token> {
    let codes: Vec<&str> = lemma
        .split('/')
        .map(|code| code.split_whitespace().next().unwrap_or(""))
        .collect();
    let segments: Vec<&str> = text.split('/').collect();
    let last = segments.len().saturating_sub(1);

    let mut tokens = Vec::with_capacity(segments.len());
    let mut seen_word = false;
    for (i, segment) in segments.into_iter().enumerate() {
        if segment.is_empty() {
            continue;
        }
        let token = match codes.get(i).copied() {
            Some(code) if is_numeric(code) => {
                seen_word = true;
                Token::word(segment, normalize_code(code, Some('H')))
            }
            Some(_) if i == last && seen_word && codes.len() == i + 1 => Token::suffix(segment),
            Some(code) if !code.is_empty() => Token::prefix(segment),
            _ => Token::suffix(segment),
        };
        tokens.push(token);
    }
    tokens
}

fn is_numeric(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit())
}

/// Normalize a Strong's code to `[HG]\d+`.
///
/// A leading `H`/`G` in `raw` wins over `default_prefix`; trailing letters (`1254a`) and
/// leading zeros are dropped. Returns `None` when there is no number or no prefix to use.
pub fn normalize_code(raw: &str, default_prefix: Option<char>) -> Option<String> {
    let raw = raw.trim();
    let prefix = match raw.chars().next() {
        Some(c) if c.eq_ignore_ascii_case(&'h') => 'H',
        Some(c) if c.eq_ignore_ascii_case(&'g') => 'G',
        _ => default_prefix?,
    };
    let digits: String = raw
        .trim_start_matches(|c: char| c.is_ascii_alphabetic())
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return None;
    }
    Some(format!("{prefix}{digits}"))
}
