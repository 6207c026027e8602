//! Folding a keyed token stream into verse records
//!
//!     Consecutive tokens with the same key form one record. Only consecutive runs are
//!     merged: a key that reappears later (`A A B B A`) starts a new record, so record order
//!     is exactly document order. Merging records of one key across a document, or across
//!     translations, is the collator's job.

use crate::b3::token::{KeyedToken, VerseRecord};

pub fn group_verses(tokens: Vec<KeyedToken>) -> Vec<VerseRecord> {
    let mut records: Vec<VerseRecord> = Vec::new();
    for KeyedToken { key, token } in tokens {
        match records.last_mut() {
            Some(record) if record.key == key => record.tokens.push(token),
            _ => records.push(VerseRecord::new(key, vec![token])),
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::b3::token::Token;
    use crate::b3::verse::VerseKey;

    fn keyed(reference: &str, text: &str) -> KeyedToken {
        KeyedToken {
            key: VerseKey::parse(reference).unwrap(),
            token: Token::word(text, None),
        }
    }

    #[test]
    fn test_groups_consecutive_runs() {
        let records = group_verses(vec![
            keyed("Gen.1.1", "a"),
            keyed("Gen.1.1", "b"),
            keyed("Gen.1.2", "c"),
        ]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tokens.len(), 2);
        assert_eq!(records[1].tokens.len(), 1);
        assert_eq!(records[1].key, VerseKey::new("Gen.1", 2));
    }

    #[test]
    fn test_recurring_key_starts_new_record() {
        let records = group_verses(vec![
            keyed("Gen.1.1", "a"),
            keyed("Gen.1.1", "b"),
            keyed("Gen.1.2", "c"),
            keyed("Gen.1.2", "d"),
            keyed("Gen.1.1", "e"),
        ]);
        let keys: Vec<_> = records.iter().map(|r| r.key.to_string()).collect();
        assert_eq!(keys, vec!["Gen.1.1", "Gen.1.2", "Gen.1.1"]);
    }

    #[test]
    fn test_empty_stream() {
        assert!(group_verses(Vec::new()).is_empty());
    }
}
