//! Chapter/verse references
//!
//!     A reference such as `Gen.1.31` splits on its last `.` into a chapter id (`Gen.1`) and a
//!     verse number (`31`). The chapter id is kept opaque: nothing here knows about books.
//!
//!     Alternate-versification notes embed references in a decorated form, `KJV:Gen.2.1a`,
//!     which [VerseKey::parse_override] accepts.

use crate::b3::error::B3Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker that introduces an alternate (KJV) versification reference.
pub const OVERRIDE_MARKER: &str = "KJV:";

/// A chapter id plus a verse number, e.g. `Gen.1` / `31`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseKey {
    pub chapter_id: String,
    pub verse_num: u32,
}

impl VerseKey {
    pub fn new(chapter_id: impl Into<String>, verse_num: u32) -> Self {
        VerseKey {
            chapter_id: chapter_id.into(),
            verse_num,
        }
    }

    /// Parse a plain reference, splitting on the last `.`.
    pub fn parse(reference: &str) -> Result<Self, B3Error> {
        let (chapter_id, verse) = reference
            .rsplit_once('.')
            .ok_or_else(|| B3Error::format(reference, "missing '.' separator"))?;
        if chapter_id.is_empty() {
            return Err(B3Error::format(reference, "empty chapter id"));
        }
        if verse.is_empty() || !verse.bytes().all(|b| b.is_ascii_digit()) {
            return Err(B3Error::format(reference, "verse number is not numeric"));
        }
        let verse_num: u32 = verse
            .parse()
            .map_err(|_| B3Error::format(reference, "verse number out of range"))?;
        if verse_num == 0 {
            return Err(B3Error::format(reference, "verse number must be positive"));
        }
        Ok(VerseKey::new(chapter_id, verse_num))
    }

    /// Parse the decorated form used by alternate-versification notes.
    ///
    /// The `KJV:` marker is removed, then any `!` and part letters `a`-`d` around the
    /// reference, so `KJV:Gen.2.1a` parses as `Gen.2.1`.
    pub fn parse_override(text: &str) -> Result<Self, B3Error> {
        let text = text.trim();
        let bare = text.strip_prefix(OVERRIDE_MARKER).unwrap_or(text);
        let bare = bare.trim_matches(|c: char| c == '!' || ('a'..='d').contains(&c));
        VerseKey::parse(bare)
    }

    /// The book part of the chapter id (`Gen` for `Gen.1`).
    pub fn book(&self) -> &str {
        self.chapter_id
            .split_once('.')
            .map_or(self.chapter_id.as_str(), |(book, _)| book)
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.chapter_id, self.verse_num)
    }
}

impl FromStr for VerseKey {
    type Err = B3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VerseKey::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference() {
        let key = VerseKey::parse("Gen.1.31").unwrap();
        assert_eq!(key.chapter_id, "Gen.1");
        assert_eq!(key.verse_num, 31);
        assert_eq!(key.book(), "Gen");
    }

    #[test]
    fn test_parse_rejects_non_numeric_verse() {
        assert!(matches!(
            VerseKey::parse("Gen.1.x"),
            Err(B3Error::Format { .. })
        ));
        assert!(VerseKey::parse("Gen.1.").is_err());
        assert!(VerseKey::parse("Gen1").is_err());
        assert!(VerseKey::parse("Gen.1.0").is_err());
        assert!(VerseKey::parse(".3").is_err());
    }

    #[test]
    fn test_parse_override() {
        assert_eq!(
            VerseKey::parse_override("KJV:Gen.2.1a").unwrap(),
            VerseKey::new("Gen.2", 1)
        );
        assert_eq!(
            VerseKey::parse_override("KJV:Ps.51.2!").unwrap(),
            VerseKey::new("Ps.51", 2)
        );
        assert_eq!(
            VerseKey::parse_override("KJV:Deut.13.1").unwrap(),
            VerseKey::new("Deut.13", 1)
        );
    }

    #[test]
    fn test_display_round_trip() {
        let key = VerseKey::new("1Sam.20", 42);
        assert_eq!(key.to_string(), "1Sam.20.42");
        assert_eq!(key.to_string().parse::<VerseKey>().unwrap(), key);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&VerseKey::new("Gen.1", 1)).unwrap();
        assert_eq!(json, r#"{"chapterId":"Gen.1","verseNum":1}"#);
    }
}
