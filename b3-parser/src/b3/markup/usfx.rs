//! USFX rules
//!
//!     USFX marks verses with milestones carrying a book/chapter/verse triple, and ends them
//!     with `<ve/>`:
//!
//!         <book id="GEN"><c id="1"/><p><v id="1" bcv="GEN.1.1"/>In the beginning <w s="H430">God</w> created...<ve/>
//!
//!     Book codes are USFX three-letter codes and are mapped to OSIS codes so that keys from
//!     both dialects line up (`GEN` → `Gen`, `EXO` → `Exod`, `MAT` → `Matt`).

use crate::b3::error::B3Error;
use crate::b3::markup::tree::Element;
use crate::b3::markup::NodeRole;
use crate::b3::token::{Token, TokenKind};
use crate::b3::verse::VerseKey;
use crate::b3::word_tags::normalize_code;

pub(crate) fn classify(el: &Element) -> Result<NodeRole<'_>, B3Error> {
    let role = match el.tag.as_str() {
        "book" | "ve" => NodeRole::VerseEnd,
        "v" => {
            let bcv = el
                .attr("bcv")
                .ok_or_else(|| B3Error::format(el.attr("id").unwrap_or(""), "v without bcv"))?;
            NodeRole::VerseStart(parse_bcv(bcv)?)
        }
        "f" | "x" | "fe" | "note" => NodeRole::Note,
        "w" => NodeRole::Word {
            lemma: el.attr("s"),
            ketiv: false,
        },
        "p" | "q" | "qs" => NodeRole::Text,
        _ => NodeRole::Plain,
    };
    Ok(role)
}

/// Parse a `BOOK.C.V` triple into a key with an OSIS chapter id.
pub fn parse_bcv(bcv: &str) -> Result<VerseKey, B3Error> {
    let (book, rest) = bcv
        .split_once('.')
        .ok_or_else(|| B3Error::format(bcv, "expected BOOK.C.V"))?;
    let key = VerseKey::parse(rest)?;
    if key.chapter_id.contains('.') {
        return Err(B3Error::format(bcv, "expected BOOK.C.V"));
    }
    Ok(VerseKey::new(
        format!("{}.{}", osis_book(book), key.chapter_id),
        key.verse_num,
    ))
}

/// Attach the first code of a word's `s` attribute to word tokens that have none.
pub(crate) fn attach_codes(tokens: &mut [Token], strongs: &str, default_prefix: Option<char>) {
    let Some(code) = strongs
        .split_whitespace()
        .find_map(|raw| normalize_code(raw, default_prefix))
    else {
        return;
    };
    for token in tokens
        .iter_mut()
        .filter(|t| t.kind == TokenKind::Word && t.lexical_code.is_none())
    {
        token.lexical_code = Some(code.clone());
    }
}

/// Map a USFX book code onto its OSIS equivalent.
///
/// Codes that are spelled the same in both (after title-casing) pass through.
pub fn osis_book(usfx: &str) -> String {
    let titled = title_case(usfx);
    let osis = match titled.as_str() {
        // Torah
        "Exo" => "Exod",
        "Deu" => "Deut",
        // Neviim
        "Jos" => "Josh",
        "Jdg" => "Judg",
        "1Sa" => "1Sam",
        "2Sa" => "2Sam",
        "1Ki" => "1Kgs",
        "2Ki" => "2Kgs",
        "Ezk" => "Ezek",
        "Jol" => "Joel",
        "Amo" => "Amos",
        "Oba" => "Obad",
        "Jon" => "Jonah",
        "Zep" => "Zeph",
        "Zec" => "Zech",
        // Ketuvim
        "Psa" => "Ps",
        "Pro" => "Prov",
        "Sng" => "Song",
        "Rut" => "Ruth",
        "Ecc" => "Eccl",
        "Est" => "Esth",
        "Ezr" => "Ezra",
        "1Ch" => "1Chr",
        "2Ch" => "2Chr",
        // New Testament
        "Mat" => "Matt",
        "Mrk" => "Mark",
        "Luk" => "Luke",
        "Jhn" => "John",
        "Act" => "Acts",
        "1Co" => "1Cor",
        "2Co" => "2Cor",
        "Php" => "Phil",
        "1Th" => "1Thess",
        "2Th" => "2Thess",
        "1Ti" => "1Tim",
        "2Ti" => "2Tim",
        "Tit" => "Titus",
        "Phm" => "Phlm",
        "1Pe" => "1Pet",
        "2Pe" => "2Pet",
        "1Jn" => "1John",
        "2Jn" => "2John",
        "3Jn" => "3John",
        "Jud" => "Jude",
        _ => return titled,
    };
    osis.to_string()
}

/// Upper-case letters that follow a non-letter, lower-case the rest (`1SA` → `1Sa`).
fn title_case(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut after_letter = false;
    for c in code.chars() {
        if after_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        after_letter = c.is_alphabetic();
    }
    out
}
