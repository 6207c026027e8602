//! Markup dialects and the token walk
//!
//! # The High-Level Concept
//!
//!     Both OSIS and USFX interleave verse boundaries, words, notes and loose text in one
//!     tree. Verses are often milestones (empty elements) rather than containers, so which
//!     verse a word belongs to depends on what was seen before it in document order, not on
//!     its ancestors. The walker therefore visits every element in document order and
//!     carries the active verse as state.
//!
//! # Node Roles
//!
//!     Each dialect maps elements onto a small set of roles, see [NodeRole]:
//!
//!         role          OSIS                          USFX
//!         verse start   verse[@osisID]                v[@bcv]
//!         verse end     verse[@eID], end of verse     ve, book
//!         note          note                          f, x, fe, note
//!         word          w                             w
//!         glyph         seg[@type]                    -
//!         text          transChange, divineName, ...  p, q, qs
//!
//!     The walk itself ([walker]) is dialect agnostic.

pub mod osis;
pub mod source;
pub mod tree;
pub mod usfx;
pub mod walker;

pub use source::prepare;
pub use tree::{parse_tree, Element};
pub use walker::{MarkupWalker, VerseState, WalkState};

use crate::b3::error::B3Error;
use crate::b3::verse::VerseKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Osis,
    Usfx,
}

/// What an element means to the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRole<'a> {
    VerseStart(VerseKey),
    VerseEnd,
    /// Subtree is skipped, apart from versification and alternate-reading checks
    Note,
    Word {
        lemma: Option<&'a str>,
        /// Flagged as a defective reading to be replaced by the following note's reading
        ketiv: bool,
    },
    /// A special glyph with its literal text
    Glyph(&'static str),
    /// Inline text becomes Other text
    Text,
    Plain,
}

impl Dialect {
    pub fn classify<'a>(self, el: &'a Element) -> Result<NodeRole<'a>, B3Error> {
        match self {
            Dialect::Osis => osis::classify(el),
            Dialect::Usfx => usfx::classify(el),
        }
    }

    /// Whether leaving this element (after its subtree) ends the active verse.
    pub fn closes_verse(self, el: &Element) -> bool {
        match self {
            Dialect::Osis => osis::is_container_verse(el),
            Dialect::Usfx => false,
        }
    }
}
