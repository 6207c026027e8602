//! Lexicon enrichment
//!
//!     Every entry of a raw lexicon is conformed to the served shape and given usage
//!     statistics from one canonical translation: how many tokens carry its code, and the
//!     first few verses they occur in.
//!
//!     Occurrences are counted per token. A reference is recorded when it differs from the
//!     last one recorded for that code, until the cap is reached; a verse using a word twice
//!     counts twice but is listed once.

use crate::b3::error::B3Error;
use crate::b3::lexicon::raw::{RawEntry, RawLexicon};
use crate::b3::profile::Language;
use crate::b3::token::VerseRecord;
use crate::b3::translit::TranslitSettings;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub lemma: String,
    pub def: String,
    pub kjv: String,
    pub deriv: String,
    pub tlit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pron: Option<String>,
    pub count: usize,
    pub refs: Vec<String>,
}

pub type Lexicon = BTreeMap<String, LexiconEntry>;

fn default_max_first_refs() -> usize {
    5
}

fn default_hebrew_source() -> String {
    "hewlc".to_string()
}

fn default_greek_source() -> String {
    "grtisch".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconSettings {
    #[serde(default = "default_max_first_refs")]
    pub max_first_refs: usize,
    /// Translation whose codes are counted for the Hebrew lexicon
    #[serde(default = "default_hebrew_source")]
    pub hebrew_source: String,
    #[serde(default = "default_greek_source")]
    pub greek_source: String,
}

impl Default for LexiconSettings {
    fn default() -> Self {
        LexiconSettings {
            max_first_refs: default_max_first_refs(),
            hebrew_source: default_hebrew_source(),
            greek_source: default_greek_source(),
        }
    }
}

impl LexiconSettings {
    pub fn source_for(&self, language: Language) -> Option<&str> {
        match language {
            Language::Hebrew => Some(&self.hebrew_source),
            Language::Greek => Some(&self.greek_source),
            Language::English => None,
        }
    }
}

/// Where staged (parsed and annotated) translations are looked up.
pub trait StagedTranslations {
    fn staged(&self, translation: &str) -> Option<&[VerseRecord]>;
}

impl StagedTranslations for HashMap<String, Vec<VerseRecord>> {
    fn staged(&self, translation: &str) -> Option<&[VerseRecord]> {
        self.get(translation).map(Vec::as_slice)
    }
}

impl StagedTranslations for BTreeMap<String, Vec<VerseRecord>> {
    fn staged(&self, translation: &str) -> Option<&[VerseRecord]> {
        self.get(translation).map(Vec::as_slice)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct Usage {
    count: usize,
    refs: Vec<String>,
}

pub struct LexiconEnricher {
    language: Language,
    settings: LexiconSettings,
    translit: TranslitSettings,
}

impl LexiconEnricher {
    pub fn new(language: Language, settings: LexiconSettings, translit: TranslitSettings) -> Self {
        LexiconEnricher {
            language,
            settings,
            translit,
        }
    }

    pub fn enrich(
        &self,
        raw: &RawLexicon,
        staged: &impl StagedTranslations,
    ) -> Result<Lexicon, B3Error> {
        let source = self
            .settings
            .source_for(self.language)
            .ok_or_else(|| B3Error::Lookup {
                kind: "lexicon language",
                value: format!("{:?}", self.language).to_lowercase(),
            })?;
        let records = staged.staged(source).ok_or_else(|| B3Error::Precondition {
            translation: source.to_string(),
            step: format!("stage {source}"),
        })?;

        let mut usage = self.usage(records);
        let lexicon: Lexicon = raw
            .entries
            .iter()
            .map(|(code, entry)| {
                let usage = usage.remove(code).unwrap_or_default();
                (code.clone(), self.conform(entry, usage))
            })
            .collect();

        tracing::info!(
            source,
            entries = lexicon.len(),
            codes_seen = lexicon.values().filter(|e| e.count > 0).count(),
            codes_unknown = usage.len(),
            "enriched lexicon"
        );
        Ok(lexicon)
    }

    fn usage(&self, records: &[VerseRecord]) -> HashMap<String, Usage> {
        let mut usage: HashMap<String, Usage> = HashMap::new();
        for record in records {
            let reference = record.key.to_string();
            for code in record.tokens.iter().filter_map(|t| t.lexical_code.as_ref()) {
                let entry = usage.entry(code.clone()).or_default();
                entry.count += 1;
                let is_new = entry.refs.last() != Some(&reference);
                if is_new && entry.refs.len() < self.settings.max_first_refs {
                    entry.refs.push(reference.clone());
                }
            }
        }
        usage
    }

    fn conform(&self, entry: &RawEntry, usage: Usage) -> LexiconEntry {
        LexiconEntry {
            lemma: entry.lemma.clone(),
            def: entry.strongs_def.clone().unwrap_or_default(),
            kjv: entry.kjv_def.clone().unwrap_or_default(),
            deriv: entry.derivation.clone().unwrap_or_default(),
            tlit: self
                .translit
                .transliterate(self.language, &entry.lemma)
                .unwrap_or_default(),
            pron: entry.pronunciation().map(str::to_string),
            count: usage.count,
            refs: usage.refs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::b3::token::Token;
    use crate::b3::verse::VerseKey;

    fn greek_raw() -> RawLexicon {
        RawLexicon::from_json(
            r#"{"G976":{"lemma":"βίβλος","translit":"bíblos","strongs_def":"a book","kjv_def":"book","xlit":"x"},
                "G1":{"lemma":"\u0391"}}"#,
        )
        .unwrap()
    }

    fn staged(records: Vec<VerseRecord>) -> HashMap<String, Vec<VerseRecord>> {
        HashMap::from([("grtisch".to_string(), records)])
    }

    fn verse(reference: &str, codes: &[&str]) -> VerseRecord {
        VerseRecord::new(
            VerseKey::parse(reference).unwrap(),
            codes
                .iter()
                .map(|c| Token::word("x", Some(c.to_string())))
                .collect(),
        )
    }

    fn enricher() -> LexiconEnricher {
        LexiconEnricher::new(
            Language::Greek,
            LexiconSettings::default(),
            TranslitSettings::default(),
        )
    }

    #[test]
    fn test_conforms_fields() {
        let lexicon = enricher()
            .enrich(&greek_raw(), &staged(vec![verse("Matt.1.1", &["G976"])]))
            .unwrap();
        let entry = &lexicon["G976"];
        assert_eq!(entry.def, "a book");
        assert_eq!(entry.kjv, "book");
        assert_eq!(entry.deriv, "");
        assert_eq!(entry.tlit, "biblos");
        assert_eq!(entry.pron.as_deref(), Some("bíblos"));
        assert_eq!(entry.count, 1);
        assert_eq!(entry.refs, vec!["Matt.1.1"]);
    }

    #[test]
    fn test_unseen_codes_have_no_usage() {
        let lexicon = enricher().enrich(&greek_raw(), &staged(Vec::new())).unwrap();
        assert_eq!(lexicon["G1"].count, 0);
        assert!(lexicon["G1"].refs.is_empty());
    }

    #[test]
    fn test_first_occurrences_are_deduplicated_and_capped() {
        let records = vec![
            verse("Matt.1.1", &["G976", "G976"]),
            verse("Matt.1.2", &["G976"]),
            verse("Matt.1.3", &["G976"]),
            verse("Matt.1.4", &["G976"]),
            verse("Matt.1.5", &["G976"]),
            verse("Matt.1.6", &["G976"]),
        ];
        let lexicon = enricher().enrich(&greek_raw(), &staged(records)).unwrap();
        let entry = &lexicon["G976"];
        assert_eq!(entry.count, 7);
        assert_eq!(
            entry.refs,
            vec!["Matt.1.1", "Matt.1.2", "Matt.1.3", "Matt.1.4", "Matt.1.5"]
        );
    }

    #[test]
    fn test_missing_staged_translation() {
        let err = enricher()
            .enrich(&greek_raw(), &HashMap::<String, Vec<VerseRecord>>::new())
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "translation 'grtisch' has not been staged; run `stage grtisch` first"
        );
    }

    #[test]
    fn test_entry_serialization() {
        let lexicon = enricher().enrich(&greek_raw(), &staged(Vec::new())).unwrap();
        let json = serde_json::to_value(&lexicon["G1"]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "lemma": "\u{391}", "def": "", "kjv": "", "deriv": "", "tlit": "a", "count": 0, "refs": []
            })
        );
    }
}
