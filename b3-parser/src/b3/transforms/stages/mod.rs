//! Individual transformation stages
//!
//! Each stage implements the `Runnable` trait:
//!
//!     PrepareSource             Vec<u8>           → Element
//!     WalkMarkup                Element           → Vec<KeyedToken>
//!     GroupVerses               Vec<KeyedToken>   → Vec<VerseRecord>
//!     AnnotateTransliteration   Vec<VerseRecord>  → Vec<VerseRecord>

pub mod annotation;
pub mod grouping;
pub mod preparation;
pub mod walking;

pub use annotation::AnnotateTransliteration;
pub use grouping::GroupVerses;
pub use preparation::PrepareSource;
pub use walking::WalkMarkup;
