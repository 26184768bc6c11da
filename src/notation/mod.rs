//! 표기 규칙 (Notation)
//!
//! 언어 하나의 (패턴, 치환) 규칙을 순서대로 가집니다.
//! 규칙 순서가 곧 우선순위이므로 절대 재정렬하지 않습니다.

pub mod pattern;

use std::collections::BTreeSet;

use crate::core::phoneme::Phoneme;
use crate::error::NotationError;
use pattern::{Pattern, PatternContext};

/// 패턴 문법 기호 (유효 문자 집합에서 제외)
const META_CHARS: &[char] = &[
    '{', '}', '[', ']', '(', ')', '^', '$', '|', '@', '.', '*', '+', '?', '\\',
];

/// 규칙의 치환 값
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Replacement {
    /// 일치 구간을 문자열로 치환
    Substitute(String),
    /// 일치 구간 삭제
    Delete,
    /// 일치 구간 전체를 고정된 음소열로 확정
    Emit(Vec<Phoneme>),
}

impl From<&str> for Replacement {
    fn from(text: &str) -> Self {
        if text.is_empty() {
            Replacement::Delete
        } else {
            Replacement::Substitute(text.to_string())
        }
    }
}

impl From<Option<&str>> for Replacement {
    fn from(text: Option<&str>) -> Self {
        text.map_or(Replacement::Delete, Replacement::from)
    }
}

impl From<Phoneme> for Replacement {
    fn from(phoneme: Phoneme) -> Self {
        Replacement::Emit(vec![phoneme])
    }
}

impl From<Vec<Phoneme>> for Replacement {
    fn from(phonemes: Vec<Phoneme>) -> Self {
        Replacement::Emit(phonemes)
    }
}

impl<const N: usize> From<[Phoneme; N]> for Replacement {
    fn from(phonemes: [Phoneme; N]) -> Self {
        Replacement::Emit(phonemes.to_vec())
    }
}

/// 컴파일 전 규칙
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: String,
    pub replacement: Replacement,
}

/// 컴파일된 규칙
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub pattern: Pattern,
    pub replacement: Replacement,
}

/// 한 언어의 표기 규칙 목록
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notation {
    rules: Vec<Rule>,
}

impl Notation {
    /// 빈 표기 규칙 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 규칙 추가 (빌더)
    pub fn rule(mut self, pattern: &str, replacement: impl Into<Replacement>) -> Self {
        self.push(pattern, replacement);
        self
    }

    /// 규칙 추가
    pub fn push(&mut self, pattern: &str, replacement: impl Into<Replacement>) {
        self.rules.push(Rule {
            pattern: pattern.to_string(),
            replacement: replacement.into(),
        });
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// 모든 규칙을 순서대로 컴파일
    /// 하나라도 실패하면 첫 번째 에러 반환
    pub fn compile(&self, context: &PatternContext) -> Result<Vec<CompiledRule>, NotationError> {
        self.rules
            .iter()
            .map(|rule| {
                Ok(CompiledRule {
                    pattern: Pattern::compile(&rule.pattern, context)?,
                    replacement: rule.replacement.clone(),
                })
            })
            .collect()
    }

    /// 패턴에 나오는 문자 집합 (매크로와 문법 기호 제외)
    pub fn chars(&self) -> BTreeSet<char> {
        let mut chest = BTreeSet::new();
        for rule in &self.rules {
            let stripped = strip_macros(&rule.pattern);
            chest.extend(stripped.chars().filter(|c| !META_CHARS.contains(c)));
        }
        chest
    }
}

/// `<이름>` 매크로 참조 제거
fn strip_macros(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match tail.find('>') {
            Some(close) if close > 1 => rest = &tail[close + 1..],
            _ => {
                out.push('<');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::jamo::{A, G};

    #[test]
    fn test_replacement_conversion() {
        assert_eq!(Replacement::from("ks"), Replacement::Substitute("ks".into()));
        assert_eq!(Replacement::from(""), Replacement::Delete);
        assert_eq!(Replacement::from(None), Replacement::Delete);
        assert_eq!(
            Replacement::from(Phoneme::Initial(G)),
            Replacement::Emit(vec![Phoneme::Initial(G)])
        );
        assert_eq!(
            Replacement::from([Phoneme::Initial(G), Phoneme::Vowel(A)]),
            Replacement::Emit(vec![Phoneme::Initial(G), Phoneme::Vowel(A)])
        );
    }

    #[test]
    fn test_rule_order_preserved() {
        let notation = Notation::new()
            .rule("sch", "Z")
            .rule("ch", "x")
            .rule("x", [Phoneme::Initial(G)]);
        let patterns: Vec<&str> = notation.rules().iter().map(|r| r.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["sch", "ch", "x"]);
        assert_eq!(notation.len(), 3);
    }

    #[test]
    fn test_compile() {
        let notation = Notation::new().rule("{@}h$", Replacement::Delete);
        let ctx = PatternContext::new().with_vowels("aeiou");
        let rules = notation.compile(&ctx).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].pattern.source(), "{@}h$");
        assert_eq!(rules[0].replacement, Replacement::Delete);
    }

    #[test]
    fn test_compile_reports_first_error() {
        let notation = Notation::new()
            .rule("a", "b")
            .rule("s{<cons>}", "z");
        let err = notation.compile(&PatternContext::new()).unwrap_err();
        assert!(matches!(err, NotationError::UnknownMacro { .. }));
    }

    #[test]
    fn test_chars() {
        let notation = Notation::new()
            .rule("{a|o|u}ch", "X")
            .rule("s{<cons>}", "Z")
            .rule("{@}h$", Replacement::Delete)
            .rule("^l", [Phoneme::Initial(G)]);
        let chars: String = notation.chars().into_iter().collect();
        assert_eq!(chars, "achlosu");
    }

    #[test]
    fn test_strip_macros() {
        assert_eq!(strip_macros("s{<cons>}"), "s{}");
        assert_eq!(strip_macros("a<b"), "a<b");
        assert_eq!(strip_macros("<>x"), "<>x");
    }
}
