//! Source preparation stage
//!
//! Decodes document bytes, strips the default namespace and cosmetic wrappers, and builds
//! the element tree.

use crate::b3::markup::{prepare, Dialect, Element};
use crate::b3::transforms::{Runnable, TransformError};

/// # Input
/// - `Vec<u8>` - raw OSIS or USFX document
///
/// # Output
/// - `Element` - the document's root element
pub struct PrepareSource {
    dialect: Dialect,
}

impl PrepareSource {
    pub fn new(dialect: Dialect) -> Self {
        PrepareSource { dialect }
    }
}

impl Runnable<Vec<u8>, Element> for PrepareSource {
    fn run(&self, input: Vec<u8>) -> Result<Element, TransformError> {
        prepare(&input, self.dialect).map_err(|e| TransformError::stage("PrepareSource", e))
    }
}
