//! Verse grouping stage

use crate::b3::grouping::group_verses;
use crate::b3::token::{KeyedToken, VerseRecord};
use crate::b3::transforms::{Runnable, TransformError};

/// # Input
/// - `Vec<KeyedToken>` - flat keyed token stream
///
/// # Output
/// - `Vec<VerseRecord>` - one record per consecutive run of a key
pub struct GroupVerses;

impl GroupVerses {
    pub fn new() -> Self {
        GroupVerses
    }
}

impl Default for GroupVerses {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Vec<KeyedToken>, Vec<VerseRecord>> for GroupVerses {
    fn run(&self, input: Vec<KeyedToken>) -> Result<Vec<VerseRecord>, TransformError> {
        let tokens = input.len();
        let records = group_verses(input);
        tracing::info!(verses = records.len(), tokens, "grouped document");
        Ok(records)
    }
}
