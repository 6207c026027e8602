//! Greek transliteration
//!
//!     Greek needs no clumping: accents and breathings are dropped after decomposition and
//!     every remaining letter maps to a fixed Latin string. Case is kept (`Β` → `B`); callers
//!     that want lowercase output lowercase the result.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

fn letter(c: char) -> Option<&'static str> {
    let latin = match c {
        'Α' => "A",
        'Β' => "B",
        'Γ' => "G",
        'Δ' => "D",
        'Ε' => "E",
        'Ζ' => "Z",
        'Η' => "Ai",
        'Θ' => "Th",
        'Ι' => "I",
        'Κ' => "K",
        'Λ' => "L",
        'Μ' => "M",
        'Ν' => "N",
        'Ξ' => "X",
        'Ο' => "O",
        'Π' => "P",
        'Ρ' => "R",
        'Σ' => "S",
        'Τ' => "T",
        'Υ' => "U",
        'Φ' => "Ph",
        'Χ' => "Ch",
        'Ψ' => "Ps",
        'Ω' => "O",
        'α' => "a",
        'β' => "b",
        'γ' => "g",
        'δ' => "d",
        'ε' => "e",
        'ζ' => "z",
        'η' => "ai",
        'θ' => "th",
        'ι' => "i",
        'κ' => "k",
        'λ' => "l",
        'μ' => "m",
        'ν' => "n",
        'ξ' => "x",
        'ο' => "o",
        'π' => "p",
        'ρ' => "r",
        'ς' => "s",
        'σ' => "s",
        'τ' => "t",
        'υ' => "u",
        'φ' => "ph",
        'χ' => "ch",
        'ψ' => "ps",
        'ω' => "o",
        // digamma
        'Ϝ' => "W",
        'ϝ' => "w",
        _ => return None,
    };
    Some(latin)
}

/// Remove accents, breathings and any other combining mark.
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

pub fn transliterate_greek(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in strip_accents(text).chars() {
        match letter(c) {
            Some(latin) => out.push_str(latin),
            None => out.push(c),
        }
    }
    out
}
