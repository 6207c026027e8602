//! Markup walking stage
//!
//! Walks the element tree with the profile's dialect and word-tag parser.

use crate::b3::markup::{Element, MarkupWalker};
use crate::b3::profile::TranslationProfile;
use crate::b3::token::KeyedToken;
use crate::b3::transforms::{Runnable, TransformError};

/// # Input
/// - `Element` - prepared document root
///
/// # Output
/// - `Vec<KeyedToken>` - flat token stream, each token tagged with its verse
pub struct WalkMarkup {
    walker: MarkupWalker,
}

impl WalkMarkup {
    pub fn new(profile: TranslationProfile) -> Self {
        WalkMarkup {
            walker: MarkupWalker::new(profile),
        }
    }
}

impl Runnable<Element, Vec<KeyedToken>> for WalkMarkup {
    fn run(&self, input: Element) -> Result<Vec<KeyedToken>, TransformError> {
        self.walker
            .walk(&input)
            .map_err(|e| TransformError::stage("WalkMarkup", e))
    }
}
