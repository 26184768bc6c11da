//! 언어 정의
//!
//! 언어 하나는 표기 규칙, 모음 집합, 문자 클래스 매크로, 정규화 방식을 가집니다.
//! 규칙은 처음 사용할 때 한 번 컴파일하여 언어 인스턴스에 보관합니다.

pub mod de;
pub mod loader;
pub mod mkd;
pub mod normalize;
pub mod registry;

use std::collections::BTreeSet;

use once_cell::sync::OnceCell;

use crate::core::phoneme::Phoneme;
use crate::core::transcriber::transcribe;
use crate::error::NotationError;
use crate::notation::pattern::PatternContext;
use crate::notation::{CompiledRule, Notation};
pub use normalize::Normalizer;

/// 변환 대상 언어
#[derive(Debug)]
pub struct Language {
    code: String,
    name: String,
    notation: Notation,
    context: PatternContext,
    normalizer: Normalizer,
    /// 단어를 이루는 문자 집합
    chars: BTreeSet<char>,
    /// 컴파일된 규칙 (처음 사용할 때 생성)
    compiled: OnceCell<Vec<CompiledRule>>,
}

impl Language {
    /// 언어 빌더 생성
    pub fn builder(code: impl Into<String>, notation: Notation) -> LanguageBuilder {
        LanguageBuilder::new(code, notation)
    }

    /// 로캘 코드
    pub fn code(&self) -> &str {
        &self.code
    }

    /// 언어 이름
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn notation(&self) -> &Notation {
        &self.notation
    }

    pub fn vowels(&self) -> &[char] {
        self.context.vowels()
    }

    /// 단어를 이루는 문자 집합
    /// (규칙 패턴에 나오는 문자에서 임시 표시 문자를 뺀 것)
    pub fn chars(&self) -> &BTreeSet<char> {
        &self.chars
    }

    /// 컴파일된 규칙 (표 순서)
    ///
    /// 처음 호출할 때 컴파일합니다. 설정 오류는 매 호출마다 그대로 반환됩니다.
    pub fn rules(&self) -> Result<&[CompiledRule], NotationError> {
        self.compiled
            .get_or_try_init(|| {
                if self.notation.is_empty() {
                    return Err(NotationError::MissingNotation(self.code.clone()));
                }
                let rules = self.notation.compile(&self.context)?;
                log::info!("'{}' 표기 규칙 {}개 컴파일", self.code, rules.len());
                Ok(rules)
            })
            .map(Vec::as_slice)
    }

    /// 규칙을 미리 컴파일하여 설정 오류 확인
    pub fn compile(&self) -> Result<(), NotationError> {
        self.rules().map(|_| ())
    }

    /// 입력 정규화
    pub fn normalize(&self, text: &str) -> String {
        self.normalizer.normalize(text)
    }

    /// 유효 문자가 연속된 구간을 단어로 분리
    /// 유효하지 않은 문자는 모두 구분자입니다.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut words = Vec::new();
        let mut start = None;

        for (i, c) in text.char_indices() {
            match (self.chars.contains(&c), start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    words.push(&text[s..i]);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            words.push(&text[s..]);
        }

        words
    }

    /// 정규화된 단어 하나를 음소열로 변환
    pub fn transcribe(&self, word: &str) -> Result<Vec<Phoneme>, NotationError> {
        Ok(transcribe(self.rules()?, word))
    }

    /// 문자열 전체를 한글로 표기
    pub fn hangulize(&self, text: &str) -> Result<String, NotationError> {
        crate::core::converter::hangulize(text, self)
    }
}

/// 언어 빌더
#[derive(Debug)]
pub struct LanguageBuilder {
    code: String,
    name: Option<String>,
    notation: Notation,
    context: PatternContext,
    markers: BTreeSet<char>,
    normalizer: Normalizer,
}

impl LanguageBuilder {
    fn new(code: impl Into<String>, notation: Notation) -> Self {
        Self {
            code: code.into(),
            name: None,
            notation,
            context: PatternContext::new(),
            markers: BTreeSet::new(),
            normalizer: Normalizer::Identity,
        }
    }

    /// 언어 이름 설정 (기본값: 로캘 코드)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// 모음 집합 설정 (`@`)
    pub fn with_vowels(mut self, vowels: &str) -> Self {
        self.context = self.context.with_vowels(vowels);
        self
    }

    /// 문자 클래스 매크로 등록 (`<이름>`)
    pub fn with_macro(mut self, name: impl Into<String>, chars: &str) -> Self {
        self.context = self.context.with_macro(name, chars);
        self
    }

    /// 규칙 내부에서만 쓰는 임시 표시 문자 설정
    /// 입력에서는 구분자로 취급됩니다.
    pub fn with_markers(mut self, markers: &str) -> Self {
        self.markers = markers.chars().collect();
        self
    }

    /// 정규화 방식 설정
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// 언어 생성 (규칙 컴파일은 처음 사용할 때)
    pub fn build(self) -> Language {
        let chars = self
            .notation
            .chars()
            .into_iter()
            .filter(|c| !self.markers.contains(c))
            .collect();
        Language {
            name: self.name.unwrap_or_else(|| self.code.clone()),
            code: self.code,
            notation: self.notation,
            context: self.context,
            normalizer: self.normalizer,
            chars,
            compiled: OnceCell::new(),
        }
    }
}
