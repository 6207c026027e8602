//! Canonical tokens and verse records
//!
//!     The walker emits [KeyedToken]s, one flat stream per document. The grouper folds that
//!     stream into [VerseRecord]s, which is the shape callers persist and serve:
//!
//!         {"chapterId": "Gen.1", "verseNum": 1, "tokens": [{"text": ..., "type": "w", "strongs": "H7225"}]}

use crate::b3::verse::VerseKey;
use serde::{Deserialize, Serialize};

/// Classification of a token within a verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    #[serde(rename = "w")]
    Word,
    #[serde(rename = "pre")]
    Prefix,
    #[serde(rename = "suf")]
    Suffix,
    /// Punctuation, whitespace and any text outside word nodes
    #[serde(rename = "punc")]
    Other,
}

impl TokenKind {
    /// Word, prefix and suffix tokens come from word nodes; only those carry lexical codes.
    pub fn is_lexical(self) -> bool {
        !matches!(self, TokenKind::Other)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(rename = "strongs", default, skip_serializing_if = "Option::is_none")]
    pub lexical_code: Option<String>,
    #[serde(rename = "tlit", default, skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
}

impl Token {
    pub fn word(text: impl Into<String>, lexical_code: Option<String>) -> Self {
        Token {
            text: text.into(),
            kind: TokenKind::Word,
            lexical_code,
            transliteration: None,
        }
    }

    pub fn prefix(text: impl Into<String>) -> Self {
        Token::new(text, TokenKind::Prefix)
    }

    pub fn suffix(text: impl Into<String>) -> Self {
        Token::new(text, TokenKind::Suffix)
    }

    pub fn other(text: impl Into<String>) -> Self {
        Token::new(text, TokenKind::Other)
    }

    fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Token {
            text: text.into(),
            kind,
            lexical_code: None,
            transliteration: None,
        }
    }
}

/// A token tagged with the verse that was active when it was emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedToken {
    pub key: VerseKey,
    pub token: Token,
}

/// All tokens of one verse, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    #[serde(flatten)]
    pub key: VerseKey,
    pub tokens: Vec<Token>,
}

impl VerseRecord {
    pub fn new(key: VerseKey, tokens: Vec<Token>) -> Self {
        VerseRecord { key, tokens }
    }

    /// The verse text, i.e. all token texts concatenated.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}
