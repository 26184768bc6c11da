pub mod config;
pub mod core;
pub mod error;
pub mod language;
pub mod notation;

pub use crate::core::converter::{hangulize, hangulize_locale, hangulize_traced};
pub use crate::core::phoneme::{Phoneme, Role};
pub use error::{HangulizeError, NotationError};
pub use language::{Language, LanguageBuilder, Normalizer};
pub use notation::{Notation, Replacement};
