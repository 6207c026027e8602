//! The raw Strong's lexicon
//!
//!     The published dictionaries are JavaScript modules wrapping one JSON object:
//!
//!         var strongsGreekDictionary = {"G1":{"lemma":"Α","strongs_def":"...",...}, ...};
//!         module.exports = strongsGreekDictionary;
//!
//!     [RawLexicon::from_js_module] cuts the object out of the module, [RawLexicon::from_json]
//!     reads plain JSON.

use crate::b3::error::B3Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawEntry {
    pub lemma: String,
    pub strongs_def: Option<String>,
    pub kjv_def: Option<String>,
    pub derivation: Option<String>,
    /// Pronunciation guide (Greek dictionary)
    pub translit: Option<String>,
    /// Pronunciation guide (Hebrew dictionary)
    pub pron: Option<String>,
    pub xlit: Option<String>,
}

impl RawEntry {
    pub fn pronunciation(&self) -> Option<&str> {
        self.translit.as_deref().or(self.pron.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawLexicon {
    pub entries: BTreeMap<String, RawEntry>,
}

impl RawLexicon {
    pub fn from_json(json: &str) -> Result<Self, B3Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_js_module(source: &str) -> Result<Self, B3Error> {
        let start = source.find('{');
        let end = source.rfind('}');
        match (start, end) {
            (Some(start), Some(end)) if start < end => Self::from_json(&source[start..=end]),
            _ => Err(B3Error::format("lexicon module", "no object literal found")),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
