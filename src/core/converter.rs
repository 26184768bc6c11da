//! 외국어 -> 한글 통합 변환기

use crate::core::syllable::assemble;
use crate::core::transcriber::transcribe_traced;
use crate::error::{HangulizeError, NotationError};
use crate::language::registry;
use crate::language::Language;

/// 문자열을 한글로 표기
/// 단어마다 규칙을 적용하고 결과를 공백 하나로 이음
/// (음소가 하나도 남지 않은 단어는 생략)
pub fn hangulize(text: &str, language: &Language) -> Result<String, NotationError> {
    hangulize_traced(text, language, |_| {})
}

/// `hangulize`와 같지만, 정규화 직후와 작업 문자열이 바뀔 때마다 on_step 호출
pub fn hangulize_traced<F>(
    text: &str,
    language: &Language,
    mut on_step: F,
) -> Result<String, NotationError>
where
    F: FnMut(&str),
{
    let rules = language.rules()?;

    let normalized = language.normalize(text);
    log::debug!("-> '{}'", normalized);
    on_step(&normalized);

    let mut words = Vec::new();
    for word in language.split(&normalized) {
        let phonemes = transcribe_traced(rules, word, &mut on_step);
        if phonemes.is_empty() {
            continue;
        }
        words.push(assemble(&phonemes));
    }

    Ok(words.join(" "))
}

/// 로캘 코드로 언어를 찾아 한글로 표기
pub fn hangulize_locale(text: &str, locale: &str) -> Result<String, HangulizeError> {
    let language = registry::lookup(locale)?;
    Ok(hangulize(text, language)?)
}
