//! Transform pipeline infrastructure
//!
//! A composable, type-safe chain of processing stages. Any transform can be chained with
//! another if their types are compatible.
//!
//! # Architecture Overview
//!
//! ## 1. The `Runnable` Trait
//!
//! The interface for all stages. Any type implementing `Runnable<I, O>` turns an `I` into
//! an `O`:
//!
//! ```rust,ignore
//! pub trait Runnable<I, O> {
//!     fn run(&self, input: I) -> Result<O, TransformError>;
//! }
//! ```
//!
//! ## 2. The `Transform<I, O>` Type
//!
//! A wrapper that enables composition through `.then()`:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(PrepareSource::new(Dialect::Osis))           // Vec<u8> → Element
//!     .then(WalkMarkup::new(profile))                    // Element → Vec<KeyedToken>
//!     .then(GroupVerses::new());                         // Vec<KeyedToken> → Vec<VerseRecord>
//! ```
//!
//! The compiler checks that each stage's input is the previous stage's output.
//!
//! ## 3. Static Lazy Transforms
//!
//! The pipelines for the built-in translation profiles are pre-built statics, see
//! [`standard`]. Transforms are `Send + Sync`, so one static can serve documents processed
//! on several threads.
//!
//! # Usage
//!
//! ```rust,ignore
//! use b3_parser::b3::transforms::standard::HEBREW_OSIS;
//!
//! let records = HEBREW_OSIS.run(std::fs::read("Gen.xml")?)?;
//! ```
//!
//! For most callers [`DocumentLoader`](crate::b3::loader::DocumentLoader) is the shorter path.
//!
//! # Module Organization
//!
//! - [`stages`]: the individual stages (preparation, walking, grouping, annotation)
//! - [`standard`]: pre-built pipelines per translation profile

pub mod stages;
pub mod standard;

use crate::b3::error::B3Error;
use thiserror::Error;

/// Error that can occur during transformation
#[derive(Debug, Error)]
pub enum TransformError {
    /// A stage failed; the cause is kept so callers can match on it
    #[error("Stage '{stage}' failed: {source}")]
    StageFailed {
        stage: String,
        #[source]
        source: B3Error,
    },
}

impl TransformError {
    pub(crate) fn stage(stage: &str, source: B3Error) -> Self {
        TransformError::StageFailed {
            stage: stage.to_string(),
            source,
        }
    }

    /// The underlying document error.
    pub fn document_error(&self) -> &B3Error {
        match self {
            TransformError::StageFailed { source, .. } => source,
        }
    }
}

/// Trait for anything that can transform an input to an output
///
/// Implemented by the individual stages; `Transform` composes them.
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline from `I` to `O`.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Add a stage to this transform, returning a new transform with extended output type
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

// Transforms can be used as stages of other transforms
impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}
