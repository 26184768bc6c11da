//! 표기 규칙 적용 엔진
//!
//! 단어에 규칙을 순서대로 적용하면서, 작업 문자열의 글자마다 확정된 음소를
//! 기록하는 정렬 슬롯을 함께 유지합니다.
//!
//! - 음소열 규칙: 일치 구간을 공백 한 글자로 바꾸고, 그 자리 슬롯에 음소열을 기록
//! - 문자열 규칙: 일치 구간을 치환하고, 구간의 슬롯을 치환 문자열 길이만큼의 빈 슬롯으로 교체
//!
//! 공백은 이미 확정된 구간을 뜻하므로 뒤의 일반적인 규칙이 다시 쪼갤 수 없습니다.

use crate::core::phoneme::Phoneme;
use crate::notation::{CompiledRule, Replacement};

/// 확정된 구간을 대신하는 문자
const RESOLVED: char = ' ';

/// 음소 아레나 안의 구간
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SlotRef {
    start: usize,
    len: usize,
}

/// 작업 문자열의 글자별 정렬 슬롯
///
/// 음소는 아레나에 한 번만 저장하고, 슬롯은 아레나 구간을 가리킵니다.
/// 규칙을 적용할 때마다 슬롯 배열을 새 문자열 기준으로 다시 만듭니다.
#[derive(Debug, Clone, Default)]
pub struct Alignment {
    arena: Vec<Phoneme>,
    slots: Vec<Option<SlotRef>>,
}

impl Alignment {
    /// 빈 슬롯 len개로 생성
    pub fn new(len: usize) -> Self {
        Self {
            arena: Vec::new(),
            slots: vec![None; len],
        }
    }

    /// 슬롯 개수
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// 슬롯에 기록된 음소열 (빈 슬롯이면 None)
    pub fn get(&self, index: usize) -> Option<&[Phoneme]> {
        let slot = (*self.slots.get(index)?)?;
        Some(&self.arena[slot.start..slot.start + slot.len])
    }

    /// 음소열을 아레나에 저장
    fn commit(&mut self, phonemes: &[Phoneme]) -> SlotRef {
        let start = self.arena.len();
        self.arena.extend_from_slice(phonemes);
        SlotRef {
            start,
            len: phonemes.len(),
        }
    }

    /// 빈 슬롯을 건너뛰고 순서대로 펼친 음소열
    pub fn phonemes(&self) -> Vec<Phoneme> {
        self.slots
            .iter()
            .flatten()
            .flat_map(|slot| self.arena[slot.start..slot.start + slot.len].iter().copied())
            .collect()
    }
}

/// 단어 하나의 변환 상태 (작업 문자열 + 정렬 슬롯)
#[derive(Debug, Clone)]
pub struct Transcriber {
    text: String,
    alignment: Alignment,
}

impl Transcriber {
    /// 단어로 초기화 (슬롯은 모두 비어 있음)
    pub fn new(word: &str) -> Self {
        Self {
            text: word.to_string(),
            alignment: Alignment::new(word.chars().count()),
        }
    }

    /// 현재 작업 문자열
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 현재 정렬 슬롯
    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    /// 규칙 하나 적용
    /// 반환: 작업 문자열이 바뀌었는지 여부
    pub fn apply(&mut self, rule: &CompiledRule) -> bool {
        let spans = rule.pattern.find_iter(&self.text);
        if spans.is_empty() {
            return false;
        }

        let emitted = match &rule.replacement {
            Replacement::Emit(phonemes) => Some(self.alignment.commit(phonemes)),
            _ => None,
        };

        let old = &self.alignment.slots;
        let mut text = String::with_capacity(self.text.len());
        let mut slots = Vec::with_capacity(old.len());
        let mut byte = 0;
        let mut slot = 0;

        for span in spans {
            // 일치 구간 앞부분은 슬롯 그대로 유지
            let gap = &self.text[byte..span.start];
            let gap_len = gap.chars().count();
            text.push_str(gap);
            slots.extend_from_slice(&old[slot..slot + gap_len]);
            slot += gap_len;

            match &rule.replacement {
                Replacement::Emit(_) => {
                    // 구간 전체를 시작 슬롯 하나로 접음
                    text.push(RESOLVED);
                    slots.push(emitted);
                }
                Replacement::Substitute(replacement) => {
                    text.push_str(replacement);
                    slots.extend(std::iter::repeat(None).take(replacement.chars().count()));
                }
                Replacement::Delete => {}
            }

            slot += self.text[span.clone()].chars().count();
            byte = span.end;
        }

        text.push_str(&self.text[byte..]);
        slots.extend_from_slice(&old[slot..]);

        debug_assert_eq!(text.chars().count(), slots.len());
        self.alignment.slots = slots;

        let changed = text != self.text;
        self.text = text;
        changed
    }

    /// 변환 종료 후 음소열 반환
    pub fn into_phonemes(self) -> Vec<Phoneme> {
        self.alignment.phonemes()
    }
}

/// 규칙 목록을 순서대로 적용하여 단어의 음소열 생성
/// 어떤 규칙으로도 음소가 되지 않은 글자는 버려집니다.
pub fn transcribe(rules: &[CompiledRule], word: &str) -> Vec<Phoneme> {
    transcribe_traced(rules, word, |_| {})
}

/// `transcribe`와 같지만, 작업 문자열이 바뀔 때마다 on_step 호출
pub fn transcribe_traced<F>(rules: &[CompiledRule], word: &str, mut on_step: F) -> Vec<Phoneme>
where
    F: FnMut(&str),
{
    let mut transcriber = Transcriber::new(word);
    for rule in rules {
        if transcriber.apply(rule) {
            log::debug!("-> '{}' ({})", transcriber.text(), rule.pattern.source());
            on_step(transcriber.text());
        }
    }
    transcriber.into_phonemes()
}
