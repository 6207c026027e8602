//! Main module for b3 library functionality

pub mod collate;
pub mod error;
pub mod grouping;
pub mod lexicon;
pub mod loader;
pub mod markup;
pub mod profile;
pub mod testing;
pub mod token;
pub mod transforms;
pub mod translit;
pub mod verse;
pub mod word_tags;

pub use error::B3Error;
pub use profile::{Language, TranslationProfile};
pub use token::{KeyedToken, Token, TokenKind, VerseRecord};
pub use verse::VerseKey;
