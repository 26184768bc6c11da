//! 한글 표기 엔진
//!
//! 규칙 적용(transcriber)과 음절 조립(syllable)으로 이루어집니다.

pub mod converter;
pub mod jamo;
pub mod phoneme;
pub mod syllable;
pub mod transcriber;
pub mod unicode;

pub use converter::{hangulize, hangulize_locale, hangulize_traced};
pub use phoneme::{Phoneme, Role};
pub use syllable::{join_phonemes, split_phonemes};
