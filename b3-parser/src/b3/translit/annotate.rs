//! Transliteration annotation of verse records
//!
//!     One in-place pass per document, after grouping.
//!
//!     Hebrew: every token is annotated. A token followed by a Suffix is transliterated
//!     together with the suffix text; the Suffix itself gets an empty transliteration.
//!
//!         pre "וְ" -> "w'"   w "תַרְשִׁישָׁ" + suf "ה" -> "thar'shishah"   suf "ה" -> ""
//!
//!     Greek: Word tokens are annotated. English records are left untouched.

use crate::b3::profile::Language;
use crate::b3::token::{TokenKind, VerseRecord};
use crate::b3::translit::TranslitSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotator {
    language: Language,
    settings: TranslitSettings,
}

impl Annotator {
    pub fn new(language: Language, settings: TranslitSettings) -> Self {
        Annotator { language, settings }
    }

    pub fn annotate(&self, records: &mut [VerseRecord]) {
        match self.language {
            Language::Hebrew => records.iter_mut().for_each(|r| self.annotate_hebrew(r)),
            Language::Greek => records.iter_mut().for_each(|r| self.annotate_greek(r)),
            Language::English => {}
        }
    }

    fn annotate_hebrew(&self, record: &mut VerseRecord) {
        let tokens = &mut record.tokens;
        for i in 0..tokens.len() {
            if tokens[i].kind == TokenKind::Suffix {
                tokens[i].transliteration = Some(String::new());
                continue;
            }
            let mut word = tokens[i].text.clone();
            if let Some(next) = tokens.get(i + 1).filter(|t| t.kind == TokenKind::Suffix) {
                word.push_str(&next.text);
            }
            tokens[i].transliteration = self.settings.transliterate(Language::Hebrew, &word);
        }
    }

    fn annotate_greek(&self, record: &mut VerseRecord) {
        for token in record
            .tokens
            .iter_mut()
            .filter(|t| t.kind == TokenKind::Word)
        {
            token.transliteration = self.settings.transliterate(Language::Greek, &token.text);
        }
    }
}
