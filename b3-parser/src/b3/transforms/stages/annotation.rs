//! Transliteration annotation stage

use crate::b3::profile::Language;
use crate::b3::token::VerseRecord;
use crate::b3::transforms::{Runnable, TransformError};
use crate::b3::translit::{Annotator, TranslitSettings};

/// # Input
/// - `Vec<VerseRecord>` - grouped records
///
/// # Output
/// - `Vec<VerseRecord>` - the same records with `tlit` filled in for the language's tokens
pub struct AnnotateTransliteration {
    annotator: Annotator,
}

impl AnnotateTransliteration {
    pub fn new(language: Language, settings: TranslitSettings) -> Self {
        AnnotateTransliteration {
            annotator: Annotator::new(language, settings),
        }
    }
}

impl Runnable<Vec<VerseRecord>, Vec<VerseRecord>> for AnnotateTransliteration {
    fn run(&self, mut input: Vec<VerseRecord>) -> Result<Vec<VerseRecord>, TransformError> {
        self.annotator.annotate(&mut input);
        Ok(input)
    }
}
