//! Hebrew transliteration
//!
//! # Algorithm
//!
//!     1. Decompose (NFD) so letters and marks are separate code points.
//!     2. Strip cantillation (U+0591..U+05AF) and meteg.
//!     3. Split into clumps: a base character followed by its marks. Meteg, rafe and the
//!        upper/lower dots are dropped.
//!     4. Reorder each clump's marks: shin/sin dot first, dagesh second, the rest after.
//!        Source mark order varies, and the lookup keys assume this order.
//!     5. For each clump, probe the consonant, vowel and punctuation tables in turn. Each
//!        table is probed with the longest prefix first; a hit emits its unit and the next
//!        table continues on the rest of the clump. Whatever is left is copied as is.
//!     6. Apply the touch-up substitutions in order.
//!     7. Optionally reverse word order, then lowercase.
//!
//!     For example `בָּרָא` clumps into `[בּ ָ] [ר ָ] [א]`, giving `B a r a '`, i.e. `bara'`.

use crate::b3::translit::hebrew_tables::{
    UnitTable, CANTILLATION, CONSONANTS, DAGESH, IGNORED, METEG, NIQQUD, PUNCTUATION,
    SHIN_DOT, SIN_DOT, TOUCH_UPS, VOWELS,
};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

/// A unit table keyed by joined code points, probed longest prefix first.
struct LookupTable {
    entries: HashMap<String, &'static str>,
    max_len: usize,
}

impl LookupTable {
    fn build(table: UnitTable) -> Self {
        let entries: HashMap<String, &'static str> = table
            .iter()
            .map(|(key, unit)| (key.iter().collect::<String>(), *unit))
            .collect();
        let max_len = table.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
        LookupTable { entries, max_len }
    }

    /// Longest prefix of `clump` with an entry, as (length in chars, unit).
    fn longest_prefix(&self, clump: &[char]) -> Option<(usize, &'static str)> {
        (1..=clump.len().min(self.max_len)).rev().find_map(|len| {
            let key: String = clump[..len].iter().collect();
            self.entries.get(&key).map(|unit| (len, *unit))
        })
    }
}

struct Tables {
    ordered: [LookupTable; 3],
    touch_ups: Vec<(Regex, &'static str)>,
}

static TABLES: Lazy<Tables> = Lazy::new(|| Tables {
    ordered: [
        LookupTable::build(CONSONANTS),
        LookupTable::build(VOWELS),
        LookupTable::build(PUNCTUATION),
    ],
    touch_ups: TOUCH_UPS
        .iter()
        .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), *replacement))
        .collect(),
});

fn is_mark(c: char) -> bool {
    CANTILLATION.contains(&c) || NIQQUD.contains(&c)
}

/// Decompose and remove cantillation marks and meteg.
pub fn strip_cantillation(text: &str) -> String {
    text.nfd()
        .filter(|c| !CANTILLATION.contains(c) && *c != METEG)
        .collect()
}

/// Split decomposed text into clumps with their marks in canonical order.
pub fn clumps(text: &str) -> Vec<Vec<char>> {
    let mut clumps: Vec<Vec<char>> = Vec::new();
    for c in text.chars() {
        match clumps.last_mut() {
            Some(_) if IGNORED.contains(&c) => {}
            Some(clump) if is_mark(c) => clump.push(c),
            _ => clumps.push(vec![c]),
        }
    }
    for clump in &mut clumps {
        clump[1..].sort_by_key(|mark| mark_rank(*mark));
    }
    clumps
}

fn mark_rank(mark: char) -> u8 {
    match mark {
        SHIN_DOT | SIN_DOT => 0,
        DAGESH => 1,
        _ => 2,
    }
}

/// Transliteration units of one clump, in order. Unmatched characters come last, verbatim.
pub fn units(clump: &[char]) -> Vec<String> {
    let mut units = Vec::new();
    let mut rest = clump;
    for table in &TABLES.ordered {
        if let Some((len, unit)) = table.longest_prefix(rest) {
            units.push(unit.to_string());
            rest = &rest[len..];
        }
    }
    if !rest.is_empty() {
        units.push(rest.iter().collect());
    }
    units
}

fn touch_up(text: String) -> String {
    TABLES
        .touch_ups
        .iter()
        .fold(text, |text, (pattern, replacement)| {
            pattern.replace_all(&text, *replacement).into_owned()
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HebrewTransliterator {
    /// Reverse word order, for right-to-left display contexts
    pub reverse: bool,
}

impl HebrewTransliterator {
    pub fn new(reverse: bool) -> Self {
        HebrewTransliterator { reverse }
    }

    pub fn transliterate(&self, text: &str) -> String {
        let stripped = strip_cantillation(text);
        let joined: String = clumps(&stripped)
            .iter()
            .flat_map(|clump| units(clump))
            .collect();
        let mut result = touch_up(joined);
        if self.reverse {
            result = result.split_whitespace().rev().collect::<Vec<_>>().join(" ");
        }
        result.to_lowercase()
    }
}

pub fn transliterate_hebrew(text: &str) -> String {
    HebrewTransliterator::default().transliterate(text)
}
