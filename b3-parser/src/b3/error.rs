//! Error types shared by the markup walk, transliteration and lexicon stages

use thiserror::Error;

/// Errors that can occur while normalizing a document or enriching a lexicon.
///
/// Every variant is fatal for the document (or lexicon) being processed. Whether to skip the
/// document or abort the whole run is the caller's decision.
#[derive(Debug, Error)]
pub enum B3Error {
    /// A verse reference could not be parsed (missing separator, non-numeric verse)
    #[error("malformed reference '{reference}': {reason}")]
    Format { reference: String, reason: String },

    /// A value outside a closed enumeration, e.g. an unknown special-glyph type
    #[error("unknown {kind} '{value}'")]
    Lookup { kind: &'static str, value: String },

    /// A required earlier step has not produced its output yet
    #[error("translation '{translation}' has not been staged; run `{step}` first")]
    Precondition { translation: String, step: String },

    /// The document has no root element
    #[error("document has no root element")]
    EmptyDocument,

    /// The document ended while an element was still open
    #[error("document ended inside <{0}>")]
    Unclosed(String),

    #[error("invalid XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl B3Error {
    pub(crate) fn format(reference: impl Into<String>, reason: impl Into<String>) -> Self {
        B3Error::Format {
            reference: reference.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = B3Error::format("Gen.1.x", "verse number is not numeric");
        assert_eq!(
            err.to_string(),
            "malformed reference 'Gen.1.x': verse number is not numeric"
        );

        let err = B3Error::Lookup {
            kind: "glyph type",
            value: "x-unknown".to_string(),
        };
        assert_eq!(err.to_string(), "unknown glyph type 'x-unknown'");

        let err = B3Error::Precondition {
            translation: "hewlc".to_string(),
            step: "stage hewlc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "translation 'hewlc' has not been staged; run `stage hewlc` first"
        );
    }
}
