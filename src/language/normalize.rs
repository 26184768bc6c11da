//! 입력 정규화
//!
//! 단어를 나누기 전에 한 번 적용합니다.

use std::collections::BTreeMap;
use std::fmt;
use std::iter;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 언어별 정규화 방식
#[derive(Clone, Default)]
pub enum Normalizer {
    /// 입력 그대로
    #[default]
    Identity,
    /// 발음 구별 기호 제거(NFD 분해 후 결합 기호 삭제) + 소문자화
    /// preserve 에 있는 문자는 지정된 문자로 바꾸고 더 건드리지 않음
    Roman { preserve: BTreeMap<char, char> },
    /// 언어 고유 정규화
    Custom(fn(&str) -> String),
}

impl Normalizer {
    /// 기본 로마자 정규화
    pub fn roman() -> Self {
        Normalizer::Roman {
            preserve: BTreeMap::new(),
        }
    }

    /// 일부 문자를 보존하는 로마자 정규화
    /// (from, to) 쌍마다 to 자신도 보존 대상에 추가합니다.
    pub fn roman_preserving(pairs: &[(char, char)]) -> Self {
        let mut preserve = BTreeMap::new();
        for &(from, to) in pairs {
            preserve.insert(from, to);
            preserve.entry(to).or_insert(to);
        }
        Normalizer::Roman { preserve }
    }

    /// 정규화 적용
    pub fn normalize(&self, text: &str) -> String {
        match self {
            Normalizer::Identity => text.to_string(),
            Normalizer::Roman { preserve } => normalize_roman_with(text, preserve),
            Normalizer::Custom(f) => f(text),
        }
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalizer::Identity => f.write_str("Identity"),
            Normalizer::Roman { preserve } => {
                f.debug_struct("Roman").field("preserve", preserve).finish()
            }
            Normalizer::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// 발음 구별 기호를 제거하고 소문자로 변환
///
/// ```
/// use hangulize::language::normalize::normalize_roman;
/// assert_eq!(normalize_roman("Eèé"), "eee");
/// ```
pub fn normalize_roman(text: &str) -> String {
    normalize_roman_with(text, &BTreeMap::new())
}

fn normalize_roman_with(text: &str, preserve: &BTreeMap<char, char>) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if let Some(&kept) = preserve.get(&c) {
            out.push(kept);
            continue;
        }
        // NFD 분해 후 결합 기호 제거, 소문자화 결과도 다시 분해
        for base in iter::once(c).nfd().filter(|&d| !is_combining_mark(d)) {
            for lower in base.to_lowercase() {
                out.extend(iter::once(lower).nfd().filter(|&d| !is_combining_mark(d)));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_roman() {
        assert_eq!(normalize_roman("Eèé"), "eee");
        assert_eq!(normalize_roman("Dvořák"), "dvorak");
        assert_eq!(normalize_roman("São Paulo"), "sao paulo");
        // 분해되지 않는 문자는 소문자화만
        assert_eq!(normalize_roman("Straße"), "straße");
    }

    #[test]
    fn test_combining_marks_removed() {
        // e + U+0301
        assert_eq!(normalize_roman("Cafe\u{301}"), "cafe");
    }

    #[test]
    fn test_decomposes_any_script() {
        assert_eq!(normalize_roman("ѐѝǎȁ"), "еиaa");
        assert_eq!(normalize_roman("Ѓорѓи"), "горги");
        // 분해되지 않는 문자는 소문자화만
        assert_eq!(normalize_roman("ØЉ"), "øљ");
    }

    #[test]
    fn test_preserving_cyrillic() {
        let normalizer = Normalizer::roman_preserving(&[('Ѓ', 'ѓ'), ('Ќ', 'ќ')]);
        assert_eq!(normalizer.normalize("Ѓорѓи"), "ѓорѓи");
        assert_eq!(normalizer.normalize("сѐ Ќ"), "се ќ");
    }

    #[test]
    fn test_preserving() {
        let normalizer = Normalizer::roman_preserving(&[('Ä', 'ä'), ('Ü', 'ü'), ('ß', 'ß')]);
        assert_eq!(normalizer.normalize("ÄRGER"), "ärger");
        assert_eq!(normalizer.normalize("Müller"), "müller");
        assert_eq!(normalizer.normalize("Éß"), "eß");
    }

    #[test]
    fn test_identity_and_custom() {
        assert_eq!(Normalizer::Identity.normalize("AbC"), "AbC");
        let custom = Normalizer::Custom(|s| s.replace('x', "ks"));
        assert_eq!(custom.normalize("xa"), "ksa");
    }

    #[test]
    fn test_idempotent() {
        let normalizer = Normalizer::roman_preserving(&[('Ä', 'ä'), ('Ö', 'ö')]);
        for s in ["Ärger", "Öl", "Ça va", "Ångström", "İstanbul"] {
            let once = normalizer.normalize(s);
            assert_eq!(normalizer.normalize(&once), once);
        }
    }
}
