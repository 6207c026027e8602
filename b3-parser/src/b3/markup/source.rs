//! Source preparation
//!
//!     Before a document is parsed into a tree, two textual fixes are applied:
//!
//!     1. The default namespace declaration is removed (first occurrence only), so elements
//!        are matched by their bare tag names.
//!     2. Cosmetic inline wrappers are unwrapped, leaving their inner text in place. OSIS uses
//!        `<seg type="x-small">` and friends for typography; USFX marks words of Jesus with
//!        `<wj>`. Both would otherwise split one run of text into several tails.

use crate::b3::error::B3Error;
use crate::b3::markup::tree::{parse_tree, Element};
use crate::b3::markup::Dialect;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static DEFAULT_NAMESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#" xmlns=['"][^'"]+['"]"#).unwrap());

static OSIS_WRAPPERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<seg type="x-(?:small|large|suspended)">(.*?)</seg>"#).unwrap()
});

static USFX_WRAPPERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?wj>").unwrap());

/// Remove the first default namespace declaration.
pub fn strip_default_namespace(source: &str) -> Cow<'_, str> {
    DEFAULT_NAMESPACE.replacen(source, 1, "")
}

/// Replace the dialect's cosmetic wrapper elements by their inner text.
pub fn unwrap_wrappers(source: &str, dialect: Dialect) -> Cow<'_, str> {
    match dialect {
        Dialect::Osis => OSIS_WRAPPERS.replace_all(source, "$1"),
        Dialect::Usfx => USFX_WRAPPERS.replace_all(source, ""),
    }
}

/// Decode, clean and parse document bytes.
pub fn prepare(bytes: &[u8], dialect: Dialect) -> Result<Element, B3Error> {
    let source = std::str::from_utf8(bytes)?;
    let source = strip_default_namespace(source);
    let source = unwrap_wrappers(&source, dialect);
    parse_tree(&source)
}
