//! 내장 언어 등록부
//!
//! 로캘 코드(별칭 포함)로 언어를 찾습니다. 언어는 처음 찾을 때 생성되고
//! 프로그램이 끝날 때까지 공유됩니다.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::error::HangulizeError;
use crate::language::{de, mkd, Language};

/// 별칭 -> 기본 로캘 코드
const ALIASES: &[(&str, &str)] = &[
    ("de", "de"),
    ("deu", "de"),
    ("ger", "de"),
    ("mkd", "mkd"),
    ("mk", "mkd"),
    ("mac", "mkd"),
];

lazy_static! {
    static ref LANGUAGES: Vec<Language> = vec![de::german(), mkd::macedonian()];
    static ref ALIAS_MAP: HashMap<&'static str, &'static str> = ALIASES.iter().copied().collect();
}

/// 로캘 코드로 언어 찾기 (대소문자 무시)
///
/// 반환 전에 규칙을 컴파일하므로 설정 오류도 여기서 드러납니다.
pub fn lookup(locale: &str) -> Result<&'static Language, HangulizeError> {
    let key = locale.trim().to_lowercase();
    let code = ALIAS_MAP
        .get(key.as_str())
        .ok_or_else(|| HangulizeError::UnknownLocale(locale.to_string()))?;
    let language = LANGUAGES
        .iter()
        .find(|lang| lang.code() == *code)
        .ok_or_else(|| HangulizeError::UnknownLocale(locale.to_string()))?;
    language.compile()?;
    Ok(language)
}

/// 등록된 기본 로캘 코드 목록
pub fn locales() -> Vec<&'static str> {
    LANGUAGES.iter().map(Language::code).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("de").unwrap().code(), "de");
        assert_eq!(lookup("mkd").unwrap().name(), "Macedonian");
    }

    #[test]
    fn test_aliases_and_case() {
        assert_eq!(lookup("DEU").unwrap().code(), "de");
        assert_eq!(lookup("mk").unwrap().code(), "mkd");
        assert_eq!(lookup(" Ger ").unwrap().code(), "de");
    }

    #[test]
    fn test_same_instance() {
        let a = lookup("de").unwrap();
        let b = lookup("deu").unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_unknown_locale() {
        let err = lookup("xx").unwrap_err();
        assert!(matches!(err, HangulizeError::UnknownLocale(ref code) if code == "xx"));
    }

    #[test]
    fn test_locales() {
        assert_eq!(locales(), vec!["de", "mkd"]);
    }
}
