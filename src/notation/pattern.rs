//! 표기 규칙 패턴 컴파일러
//!
//! 패턴 문법은 정규식에 다음을 더한 것입니다.
//!
//! - `@` : 언어의 모음 문자 클래스
//! - `<이름>` : 언어에 등록된 문자 클래스 매크로
//! - 맨 앞 `{X}` : 바로 앞이 X 여야 함 (소비하지 않음, 빈 X = 단어 시작)
//! - 맨 뒤 `{X}` : 바로 뒤가 X 여야 함 (소비하지 않음, 빈 X = 단어 끝)
//!
//! X 는 문자 집합이 아니라 `|` 로 나눈 정규식 후보 목록입니다.
//! `{a|o|u}` 는 한 글자 a, o, u 중 하나이고, `{м;|н;}` 는 두 글자 `м;` 또는 `н;` 입니다.
//!
//! `regex` 크레이트에는 전후방 탐색이 없습니다. 뒤 문맥은 핵심 패턴 뒤에 소비하는
//! 그룹으로 붙이고 핵심 패턴의 구간(그룹 1)만 일치 구간으로 씁니다. 그래서 뒤 문맥을
//! 만족하는 더 짧은 일치도 정규식 엔진이 찾아 줍니다. 앞 문맥은 일치 시작 위치
//! 앞의 텍스트에 별도 정규식으로 검사합니다.

use std::collections::HashMap;
use std::ops::Range;

use regex::Regex;

use crate::error::NotationError;

/// 모음 클래스 기호
const VOWEL_MACRO: char = '@';

/// 패턴이 참조하는 언어별 문자 클래스
#[derive(Debug, Clone, Default)]
pub struct PatternContext {
    vowels: Vec<char>,
    macros: HashMap<String, Vec<char>>,
}

impl PatternContext {
    /// 빈 문맥 생성 (`@`, `<이름>` 모두 해석 불가)
    pub fn new() -> Self {
        Self::default()
    }

    /// 모음 집합 설정
    pub fn with_vowels(mut self, vowels: &str) -> Self {
        self.vowels = vowels.chars().collect();
        self
    }

    /// 문자 클래스 매크로 등록
    pub fn with_macro(mut self, name: impl Into<String>, chars: &str) -> Self {
        self.macros.insert(name.into(), chars.chars().collect());
        self
    }

    pub fn vowels(&self) -> &[char] {
        &self.vowels
    }

    fn class_for(&self, chars: &[char]) -> String {
        let mut class = String::from("[");
        for c in chars {
            class.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
        }
        class.push(']');
        class
    }

    /// `@` 와 `<이름>` 을 문자 클래스로 치환
    fn expand(&self, pattern: &str, part: &str) -> Result<String, NotationError> {
        let mut out = String::with_capacity(part.len());
        let mut rest = part;

        while let Some(c) = rest.chars().next() {
            if c == VOWEL_MACRO {
                if self.vowels.is_empty() {
                    return Err(NotationError::UnknownMacro {
                        pattern: pattern.to_string(),
                        name: VOWEL_MACRO.to_string(),
                    });
                }
                out.push_str(&self.class_for(&self.vowels));
                rest = &rest[c.len_utf8()..];
                continue;
            }

            if c == '<' {
                if let Some(close) = rest.find('>') {
                    let name = &rest[1..close];
                    if is_macro_name(name) {
                        let chars = self.macros.get(name).ok_or_else(|| {
                            NotationError::UnknownMacro {
                                pattern: pattern.to_string(),
                                name: name.to_string(),
                            }
                        })?;
                        out.push_str(&self.class_for(chars));
                        rest = &rest[close + 1..];
                        continue;
                    }
                }
            }

            out.push(c);
            rest = &rest[c.len_utf8()..];
        }

        Ok(out)
    }
}

fn is_macro_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// 소비하지 않는 앞 문맥 조건
#[derive(Debug, Clone)]
enum Context {
    /// 단어 시작
    Edge,
    /// `(?:X)$` 형태, 일치 시작 위치 앞의 텍스트에 적용
    Regex(Regex),
}

/// 컴파일된 패턴
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    before: Option<Context>,
    /// `(핵심)` + 뒤 문맥. 그룹 1 이 일치 구간
    core: Regex,
}

impl Pattern {
    /// 패턴 텍스트를 컴파일
    pub fn compile(source: &str, context: &PatternContext) -> Result<Self, NotationError> {
        let (before, core, after) = split_contexts(source)?;

        let core = context.expand(source, core)?;
        let core = match after {
            None => format!("({})", core),
            Some("") => format!("({})$", core),
            Some(x) => format!("({})(?:{})", core, context.expand(source, x)?),
        };
        let core = build_regex(source, &core)?;

        let before = match before {
            None => None,
            Some("") => Some(Context::Edge),
            Some(x) => {
                let x = context.expand(source, x)?;
                Some(Context::Regex(build_regex(source, &format!("(?:{})$", x))?))
            }
        };

        Ok(Self {
            source: source.to_string(),
            before,
            core,
        })
    }

    /// 원본 패턴 텍스트
    pub fn source(&self) -> &str {
        &self.source
    }

    /// 겹치지 않는 모든 일치 구간 (바이트 범위, 왼쪽부터)
    ///
    /// 뒤 문맥은 구간에 포함되지 않으므로 다음 탐색은 핵심 구간 끝에서 시작합니다.
    /// 빈 일치는 무시합니다.
    pub fn find_iter(&self, text: &str) -> Vec<Range<usize>> {
        let mut spans = Vec::new();
        let mut at = 0;

        while at <= text.len() {
            let span = match self.core.captures_at(text, at).and_then(|caps| caps.get(1)) {
                Some(m) => m.range(),
                None => break,
            };

            if span.start < span.end && self.before_holds(text, span.start) {
                at = span.end;
                spans.push(span);
            } else {
                // 앞 문맥 불일치 -> 한 글자 뒤에서 다시 탐색
                match text[span.start..].chars().next() {
                    Some(c) => at = span.start + c.len_utf8(),
                    None => break,
                }
            }
        }

        spans
    }

    fn before_holds(&self, text: &str, start: usize) -> bool {
        match &self.before {
            None => true,
            Some(Context::Edge) => start == 0,
            Some(Context::Regex(re)) => re.is_match(&text[..start]),
        }
    }
}

fn build_regex(source: &str, regex: &str) -> Result<Regex, NotationError> {
    Regex::new(regex).map_err(|e| NotationError::InvalidPattern {
        pattern: source.to_string(),
        message: e.to_string(),
    })
}

/// 패턴을 (앞 문맥, 핵심 패턴, 뒤 문맥) 으로 분리
fn split_contexts(source: &str) -> Result<(Option<&str>, &str, Option<&str>), NotationError> {
    let malformed = |reason: &str| NotationError::MalformedContext {
        pattern: source.to_string(),
        reason: reason.to_string(),
    };

    let mut rest = source;
    let mut before = None;
    if let Some(stripped) = rest.strip_prefix('{') {
        let close = stripped
            .find('}')
            .ok_or_else(|| malformed("앞 문맥이 닫히지 않았습니다"))?;
        before = Some(&stripped[..close]);
        rest = &stripped[close + 1..];
    }

    let mut after = None;
    if let Some(stripped) = rest.strip_suffix('}') {
        let open = stripped
            .rfind('{')
            .ok_or_else(|| malformed("뒤 문맥이 열리지 않았습니다"))?;
        after = Some(&stripped[open + 1..]);
        rest = &stripped[..open];
    }

    if rest.is_empty() {
        return Err(malformed("문맥 외의 패턴이 비어 있습니다"));
    }

    Ok((before, rest, after))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn german() -> PatternContext {
        PatternContext::new()
            .with_vowels("aeiouäöüyAOU")
            .with_macro("cons", "bcdfghjklmnpqrstvwxzß")
    }

    fn spans(pattern: &str, text: &str) -> Vec<Range<usize>> {
        Pattern::compile(pattern, &german()).unwrap().find_iter(text)
    }

    #[test]
    fn test_plain_pattern() {
        assert_eq!(spans("sch", "schach"), vec![0..3]);
        assert_eq!(spans("a", "banana"), vec![1..2, 3..4, 5..6]);
        assert!(spans("x", "banana").is_empty());
    }

    #[test]
    fn test_anchors() {
        assert_eq!(spans("b$", "bob"), vec![2..3]);
        assert_eq!(spans("^b", "bob"), vec![0..1]);
    }

    #[test]
    fn test_lookbehind_context() {
        // ch 앞이 a, o, u 중 하나
        assert_eq!(spans("{a|o|u}ch", "bach"), vec![2..4]);
        assert!(spans("{a|o|u}ch", "ich").is_empty());
    }

    #[test]
    fn test_vowel_macro() {
        // 모음 뒤 h, 단어 끝
        assert_eq!(spans("{@}h$", "kuh"), vec![2..3]);
        assert!(spans("{@}h$", "bach").is_empty());
    }

    #[test]
    fn test_named_macro_lookahead() {
        // s 뒤가 자음
        assert_eq!(spans("s{<cons>}", "stein"), vec![0..1]);
        assert!(spans("s{<cons>}", "sein").is_empty());
    }

    #[test]
    fn test_empty_context_means_word_edge() {
        assert_eq!(spans("{}a", "aba"), vec![0..1]);
        assert_eq!(spans("a{}", "aba"), vec![2..3]);
    }

    #[test]
    fn test_context_is_not_consumed() {
        // 겹치는 문맥도 각각 검사
        assert_eq!(spans("{a}a", "aaa"), vec![1..2, 2..3]);
    }

    #[test]
    fn test_multi_char_alternatives() {
        let ctx = PatternContext::new();
        let pattern = Pattern::compile("л{м;|н;}", &ctx).unwrap();
        assert_eq!(pattern.find_iter("лм;"), vec![0..2]);
        assert!(pattern.find_iter("лм,").is_empty());
    }

    #[test]
    fn test_start_anchored_context() {
        // 단어가 자음 하나 + U 로만 이루어짐
        assert_eq!(spans("{^(<cons>)}U$", "dU"), vec![1..2]);
        assert!(spans("{^(<cons>)}U$", "adU").is_empty());
    }

    #[test]
    fn test_unknown_macro() {
        let err = Pattern::compile("s{<vl>}", &german()).unwrap_err();
        assert!(matches!(err, NotationError::UnknownMacro { ref name, .. } if name == "vl"));
    }

    #[test]
    fn test_vowel_macro_without_vowels() {
        let err = Pattern::compile("{@}h", &PatternContext::new()).unwrap_err();
        assert!(matches!(err, NotationError::UnknownMacro { ref name, .. } if name == "@"));
    }

    #[test]
    fn test_malformed_context() {
        let ctx = german();
        assert!(matches!(
            Pattern::compile("{ab", &ctx),
            Err(NotationError::MalformedContext { .. })
        ));
        assert!(matches!(
            Pattern::compile("{a}", &ctx),
            Err(NotationError::MalformedContext { .. })
        ));
        assert!(matches!(
            Pattern::compile("ab}", &ctx),
            Err(NotationError::MalformedContext { .. })
        ));
    }

    #[test]
    fn test_invalid_regex() {
        assert!(matches!(
            Pattern::compile("a(b", &german()),
            Err(NotationError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_lookahead_backtracks_into_shorter_match() {
        // ab 뒤에는 b 가 없지만 a 뒤에는 b 가 있음
        assert_eq!(spans("ab?{b}", "abd"), vec![0..1]);
        assert_eq!(spans("ab?{d}", "abd"), vec![0..2]);
        assert_eq!(spans("(ab|a){b}", "abb"), vec![0..2]);
    }

    #[test]
    fn test_lookahead_does_not_consume() {
        // 뒤 문맥 글자가 다음 일치의 시작이 될 수 있음
        assert_eq!(spans("a{a}", "aaa"), vec![0..1, 1..2]);
        assert_eq!(spans("h$", "hah"), vec![2..3]);
    }

    #[test]
    fn test_multibyte_text() {
        let ctx = PatternContext::new().with_vowels("аеиоу");
        let pattern = Pattern::compile("м{@}", &ctx).unwrap();
        // "мама" : м 은 2바이트
        assert_eq!(pattern.find_iter("мама"), vec![0..2, 4..6]);
    }
}
