//! Test fixtures
//!
//! Helpers for building small OSIS and USFX documents and for rendering records in a compact
//! form that reads well in snapshots:
//!
//!     Gen.1.1 | w:In | punc: | w:the[H7225] |

use crate::b3::token::{Token, TokenKind, VerseRecord};

/// Wrap OSIS body markup in an `osis`/`osisText`/`div` skeleton with the default namespace.
pub fn osis_document(body: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            "\n",
            r#"<osis xmlns="http://www.bibletechnologies.net/2003/OSIS/namespace">"#,
            r#"<osisText osisIDWork="test"><div type="book">{}</div></osisText></osis>"#
        ),
        body
    )
}

/// Wrap USFX body markup in a `usfx` root with the default namespace.
pub fn usfx_document(body: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8"?>"#,
            "\n",
            r#"<usfx xmlns="http://eBible.org/usfx.xsd">{}</usfx>"#
        ),
        body
    )
}

fn render_token(token: &Token) -> String {
    let kind = match token.kind {
        TokenKind::Word => "w",
        TokenKind::Prefix => "pre",
        TokenKind::Suffix => "suf",
        TokenKind::Other => "punc",
    };
    let mut out = format!("{kind}:{}", token.text);
    if let Some(code) = &token.lexical_code {
        out.push_str(&format!("[{code}]"));
    }
    if let Some(tlit) = &token.transliteration {
        out.push_str(&format!("<{tlit}>"));
    }
    out
}

/// One line per record: the key, then every token separated by `|`.
pub fn render_records(records: &[VerseRecord]) -> String {
    records
        .iter()
        .map(|record| {
            let tokens: Vec<String> = record.tokens.iter().map(render_token).collect();
            format!("{} | {}", record.key, tokens.join(" | "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
