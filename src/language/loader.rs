//! JSON 규칙 파일에서 언어 로드
//!
//! # 파일 형식
//! ```json
//! {
//!   "code": "ext",
//!   "name": "Extraterrestrial",
//!   "vowels": "",
//!   "macros": { "cons": "bcd" },
//!   "markers": "",
//!   "normalize": "identity",
//!   "preserve": {},
//!   "rules": [
//!     ["ㅹ", [{"initial": "ㅃ"}, {"vowel": "ㅜ"}, {"final": "ㅇ"}]],
//!     ["x", "ks"],
//!     ["{@}h$", null]
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::jamo::{is_consonant, is_vowel};
use crate::core::phoneme::Phoneme;
use crate::error::{HangulizeError, NotationError};
use crate::language::{Language, Normalizer};
use crate::notation::{Notation, Replacement};

/// 규칙 파일 최상위 구조
#[derive(Debug, Deserialize)]
struct LanguageFile {
    code: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    vowels: String,
    #[serde(default)]
    macros: BTreeMap<String, String>,
    #[serde(default)]
    markers: String,
    #[serde(default)]
    normalize: NormalizeKind,
    #[serde(default)]
    preserve: BTreeMap<String, String>,
    #[serde(default)]
    rules: Option<Vec<(String, Option<ReplacementEntry>)>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum NormalizeKind {
    #[default]
    Identity,
    Roman,
}

/// 치환 값: 문자열 또는 음소 배열 (null 은 삭제)
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReplacementEntry {
    Text(String),
    Phonemes(Vec<Phoneme>),
}

/// 규칙 파일 로드
pub fn load_language(path: impl AsRef<Path>) -> Result<Language, HangulizeError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let language = language_from_json(&content)?;
    log::info!("규칙 파일 로드: {} ({})", path.display(), language.code());
    Ok(language)
}

/// JSON 문자열에서 언어 생성
pub fn language_from_json(json: &str) -> Result<Language, HangulizeError> {
    let file: LanguageFile = serde_json::from_str(json)?;

    let entries = file
        .rules
        .ok_or_else(|| NotationError::MissingNotation(file.code.clone()))?;

    let mut notation = Notation::new();
    for (pattern, entry) in entries {
        let replacement = match entry {
            None => Replacement::Delete,
            Some(ReplacementEntry::Text(text)) => Replacement::from(text.as_str()),
            Some(ReplacementEntry::Phonemes(phonemes)) => {
                for phoneme in &phonemes {
                    validate_phoneme(&pattern, phoneme)?;
                }
                Replacement::Emit(phonemes)
            }
        };
        notation.push(&pattern, replacement);
    }

    let normalizer = match file.normalize {
        NormalizeKind::Identity => Normalizer::Identity,
        NormalizeKind::Roman => {
            let mut pairs = Vec::with_capacity(file.preserve.len());
            for (from, to) in &file.preserve {
                pairs.push((single_char(from)?, single_char(to)?));
            }
            Normalizer::roman_preserving(&pairs)
        }
    };

    let mut builder = Language::builder(file.code, notation)
        .with_vowels(&file.vowels)
        .with_markers(&file.markers)
        .with_normalizer(normalizer);
    if let Some(name) = file.name {
        builder = builder.with_name(name);
    }
    for (name, chars) in &file.macros {
        builder = builder.with_macro(name.as_str(), chars);
    }

    Ok(builder.build())
}

/// 역할에 맞는 자모인지 확인
fn validate_phoneme(pattern: &str, phoneme: &Phoneme) -> Result<(), HangulizeError> {
    let valid = match phoneme {
        Phoneme::Initial(c) | Phoneme::Final(c) => is_consonant(*c),
        Phoneme::Vowel(c) => is_vowel(*c),
        Phoneme::Literal(_) => true,
    };
    if valid {
        Ok(())
    } else {
        Err(HangulizeError::InvalidLanguage(format!(
            "규칙 '{}': 역할에 맞지 않는 자모 {}",
            pattern, phoneme
        )))
    }
}

fn single_char(s: &str) -> Result<char, HangulizeError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(HangulizeError::InvalidLanguage(format!(
            "preserve 항목은 한 글자여야 합니다: '{}'",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::jamo::*;
    use std::io::Write;

    const EXTRATERRESTRIAL: &str = r#"{
        "code": "ext",
        "name": "Extraterrestrial",
        "rules": [
            ["ㅹ", [{"initial": "ㅃ"}, {"vowel": "ㅜ"}, {"final": "ㅇ"}]],
            ["㉠", [{"initial": "ㄱ"}]],
            ["ㅣ", [{"vowel": "ㅣ"}]],
            ["ㅋ", [{"initial": "ㅋ"}, {"vowel": "ㅣ"}, {"final": "ㄱ"}]]
        ]
    }"#;

    #[test]
    fn test_language_from_json() {
        let lang = language_from_json(EXTRATERRESTRIAL).unwrap();
        assert_eq!(lang.code(), "ext");
        assert_eq!(lang.name(), "Extraterrestrial");
        assert_eq!(lang.notation().len(), 4);
        assert_eq!(
            lang.notation().rules()[0].replacement,
            Replacement::Emit(vec![
                Phoneme::Initial(BB),
                Phoneme::Vowel(U),
                Phoneme::Final(NG)
            ])
        );
        assert_eq!(lang.hangulize("ㅹ㉠ㅣㅋㅋㅋ").unwrap(), "뿡기킥킥킥");
    }

    #[test]
    fn test_text_null_and_empty_replacements() {
        let lang = language_from_json(
            r#"{
                "code": "xx",
                "vowels": "aeiou",
                "macros": { "cons": "bcdfgh" },
                "normalize": "roman",
                "rules": [["x", "ks"], ["{@}h$", null], ["q", ""], ["s{<cons>}", "z"]]
            }"#,
        )
        .unwrap();
        let rules = lang.notation().rules();
        assert_eq!(rules[0].replacement, Replacement::Substitute("ks".into()));
        assert_eq!(rules[1].replacement, Replacement::Delete);
        assert_eq!(rules[2].replacement, Replacement::Delete);
        assert!(lang.compile().is_ok());
        assert_eq!(lang.normalize("Éx"), "ex");
    }

    #[test]
    fn test_missing_rules() {
        let err = language_from_json(r#"{ "code": "xx" }"#).unwrap_err();
        assert!(matches!(
            err,
            HangulizeError::Notation(NotationError::MissingNotation(ref code)) if code == "xx"
        ));
    }

    #[test]
    fn test_invalid_json() {
        let err = language_from_json("{ not json").unwrap_err();
        assert!(matches!(err, HangulizeError::Parse(_)));
    }

    #[test]
    fn test_wrong_role_letter() {
        let err = language_from_json(r#"{ "code": "xx", "rules": [["a", [{"initial": "ㅏ"}]]] }"#)
            .unwrap_err();
        assert!(matches!(err, HangulizeError::InvalidLanguage(_)));
    }

    #[test]
    fn test_invalid_preserve() {
        let err = language_from_json(
            r#"{ "code": "xx", "normalize": "roman", "preserve": {"AB": "a"}, "rules": [["a", "b"]] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, HangulizeError::InvalidLanguage(_)));
    }

    #[test]
    fn test_load_language_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(EXTRATERRESTRIAL.as_bytes()).unwrap();
        let lang = load_language(file.path()).unwrap();
        assert_eq!(lang.code(), "ext");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_language("/nonexistent/hangulize/rules.json").unwrap_err();
        assert!(matches!(err, HangulizeError::Io(_)));
    }
}
