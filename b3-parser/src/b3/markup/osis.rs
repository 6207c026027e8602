//! OSIS rules
//!
//!     Verses come in two shapes. Container verses wrap their words:
//!
//!         <verse osisID="Gen.1.1"><w lemma="b/7225">...</w>...</verse>
//!
//!     Milestone verses bracket them with empty start/end markers:
//!
//!         <verse sID="Gen.1.1" osisID="Gen.1.1"/>...<verse eID="Gen.1.1"/>
//!
//!     A container verse ends with its end tag, a milestone verse with its `eID` marker.
//!
//!     Alternate readings (ketiv/qere) pair a flagged word with a note holding the reading to
//!     use instead:
//!
//!         <w type="x-ketiv">...</w><note type="variant"><rdg type="x-qere"><w>...</w></rdg></note>

use crate::b3::error::B3Error;
use crate::b3::markup::tree::Element;
use crate::b3::markup::NodeRole;
use crate::b3::verse::VerseKey;

/// Elements whose inline text is verse text.
const TEXT_ELEMENTS: &[&str] = &["transChange", "divineName", "foreign", "hi", "q", "l"];

pub(crate) fn classify(el: &Element) -> Result<NodeRole<'_>, B3Error> {
    let role = match el.tag.as_str() {
        "verse" if el.has_attr("eID") => NodeRole::VerseEnd,
        "verse" => match el.attr("osisID") {
            Some(osis_id) => NodeRole::VerseStart(parse_osis_id(osis_id)?),
            None => NodeRole::Plain,
        },
        "note" => NodeRole::Note,
        "w" => NodeRole::Word {
            lemma: el.attr("lemma"),
            ketiv: el.attr("type") == Some("x-ketiv"),
        },
        "seg" => NodeRole::Glyph(glyph(el.attr("type").unwrap_or(""))?),
        tag if TEXT_ELEMENTS.contains(&tag) => NodeRole::Text,
        _ => NodeRole::Plain,
    };
    Ok(role)
}

/// `osisID` may list several references for merged verses; the first one is used.
fn parse_osis_id(osis_id: &str) -> Result<VerseKey, B3Error> {
    let first = osis_id.split_whitespace().next().unwrap_or(osis_id);
    VerseKey::parse(first)
}

/// A verse that wraps its content. A bare `<verse osisID=".."/>` is a start marker only.
pub(crate) fn is_container_verse(el: &Element) -> bool {
    el.tag == "verse"
        && el.has_attr("osisID")
        && !el.has_attr("sID")
        && !el.has_attr("eID")
        && (!el.children.is_empty() || el.text.is_some())
}

/// Literal text of a special glyph segment.
pub fn glyph(kind: &str) -> Result<&'static str, B3Error> {
    let text = match kind {
        "x-maqqef" => "\u{05BE}",
        "x-paseq" => "\u{05C0}",
        "x-pe" => "(\u{05E4})",
        "x-reversednun" => "(\u{05C6})",
        "x-samekh" => "(\u{05E1})",
        "x-sof-pasuq" => "\u{05C3}",
        other => {
            return Err(B3Error::Lookup {
                kind: "glyph type",
                value: other.to_string(),
            })
        }
    };
    Ok(text)
}

/// Word elements of the qere reading inside a variant note, in document order.
pub(crate) fn qere_words(note: &Element) -> Vec<&Element> {
    note.descendants()
        .into_iter()
        .filter(|el| el.tag == "rdg" && el.attr("type") == Some("x-qere"))
        .flat_map(|rdg| rdg.descendants())
        .filter(|el| el.tag == "w")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::b3::markup::tree::parse_tree;

    #[test]
    fn test_classify_verses() {
        let start = parse_tree(r#"<verse sID="Gen.1.1" osisID="Gen.1.1"/>"#).unwrap();
        assert_eq!(
            classify(&start).unwrap(),
            NodeRole::VerseStart(VerseKey::new("Gen.1", 1))
        );
        assert!(!is_container_verse(&start));

        let end = parse_tree(r#"<verse eID="Gen.1.1"/>"#).unwrap();
        assert_eq!(classify(&end).unwrap(), NodeRole::VerseEnd);

        let container = parse_tree(r#"<verse osisID="Gen.1.2"><w>x</w></verse>"#).unwrap();
        assert!(is_container_verse(&container));
        let text_only = parse_tree(r#"<verse osisID="Gen.1.3">x</verse>"#).unwrap();
        assert!(is_container_verse(&text_only));
    }

    #[test]
    fn test_bare_verse_marker_is_not_a_container() {
        let marker = parse_tree(r#"<verse osisID="Matt.1.1"/>"#).unwrap();
        assert_eq!(
            classify(&marker).unwrap(),
            NodeRole::VerseStart(VerseKey::new("Matt.1", 1))
        );
        assert!(!is_container_verse(&marker));
    }

    #[test]
    fn test_merged_verse_uses_first_reference() {
        let el = parse_tree(r#"<verse osisID="Gen.1.1 Gen.1.2"/>"#).unwrap();
        assert_eq!(
            classify(&el).unwrap(),
            NodeRole::VerseStart(VerseKey::new("Gen.1", 1))
        );
    }

    #[test]
    fn test_bad_verse_reference_is_fatal() {
        let el = parse_tree(r#"<verse osisID="Gen.1.x"/>"#).unwrap();
        assert!(matches!(classify(&el), Err(B3Error::Format { .. })));
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(glyph("x-maqqef").unwrap(), "\u{05BE}");
        assert_eq!(glyph("x-pe").unwrap(), "(\u{05E4})");
        assert!(matches!(
            glyph("x-unknown"),
            Err(B3Error::Lookup { kind: "glyph type", .. })
        ));
    }

    #[test]
    fn test_qere_words() {
        let note = parse_tree(
            r#"<note type="variant"><catchWord>k</catchWord><rdg type="x-qere"><w lemma="1">a</w><w lemma="2">b</w></rdg></note>"#,
        )
        .unwrap();
        let words: Vec<_> = qere_words(&note)
            .iter()
            .map(|w| w.text.as_deref().unwrap_or(""))
            .collect();
        assert_eq!(words, vec!["a", "b"]);
    }
}
