//! 음소열을 음절로 묶어 한글로 조합
//!
//! 음소를 하나씩 받아 열린 음절에 쌓다가, 같은 자리 이하의 음소가 들어오면
//! 음절을 닫습니다. 닫힌 음절은 빈 자리를 기본값으로 채운 뒤 한 글자로 조합합니다.

use crate::core::jamo::{DEFAULT_VOWEL, SILENT_INITIAL};
use crate::core::phoneme::{Phoneme, Role};
use crate::core::unicode::{join, split};

/// 빈 자리가 모두 채워진 음절
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Syllable {
    pub initial: char,
    pub vowel: char,
    /// None = 받침 없음
    pub final_: Option<char>,
}

impl Syllable {
    /// 한 글자로 조합
    /// 조합할 수 없는 자모 조합이면 None
    pub fn compose(&self) -> Option<char> {
        join(self.initial, self.vowel, self.final_)
    }
}

/// 조합이 끝난 출력 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// 초성+중성+종성 음절
    Syllable(Syllable),
    /// 그대로 출력하는 문자
    Literal(char),
}

impl Block {
    fn render_into(&self, output: &mut String) {
        match self {
            Block::Literal(c) => output.push(*c),
            Block::Syllable(syllable) => match syllable.compose() {
                Some(c) => output.push(c),
                None => {
                    // 조합 불가 -> 자모를 낱자로 출력
                    log::warn!(
                        "음절 조합 실패: {}{}{}",
                        syllable.initial,
                        syllable.vowel,
                        syllable.final_.map(String::from).unwrap_or_default()
                    );
                    output.push(syllable.initial);
                    output.push(syllable.vowel);
                    if let Some(c) = syllable.final_ {
                        output.push(c);
                    }
                }
            },
        }
    }
}

/// 빠진 자리를 채워 완성된 음절 생성
/// - 초성 없음: 소리 없는 초성 ㅇ
/// - 중성 없음: 기본 모음 ㅡ
/// - 종성 없음: 받침 없음
pub fn complete_syllable(
    initial: Option<char>,
    vowel: Option<char>,
    final_: Option<char>,
) -> Syllable {
    Syllable {
        initial: initial.unwrap_or(SILENT_INITIAL),
        vowel: vowel.unwrap_or(DEFAULT_VOWEL),
        final_,
    }
}

/// 음절 조립기
#[derive(Debug, Default)]
pub struct SyllableAssembler {
    /// 열린 음절의 초성
    initial: Option<char>,
    /// 열린 음절의 중성
    vowel: Option<char>,
    /// 열린 음절의 종성
    final_: Option<char>,
    /// 열린 음절에 마지막으로 들어온 자리 (None = 빈 음절)
    last: Option<Role>,
    /// 닫힌 음절들
    blocks: Vec<Block>,
}

impl SyllableAssembler {
    /// 새 조립기 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 음소 하나 입력
    pub fn feed(&mut self, phoneme: Phoneme) {
        if phoneme.is_literal() {
            self.feed_passthrough(phoneme.letter());
            return;
        }
        let Some(role) = phoneme.role() else {
            return;
        };

        // 같은 자리나 앞 자리가 다시 오면 새 음절
        if matches!(self.last, Some(last) if role <= last) {
            self.flush_current();
        }

        let letter = phoneme.letter();
        match role {
            Role::Initial => self.initial = Some(letter),
            Role::Vowel => self.vowel = Some(letter),
            Role::Final => self.final_ = Some(letter),
        }
        self.last = Some(role);
    }

    /// 조합하지 않는 문자 처리
    pub fn feed_passthrough(&mut self, c: char) {
        self.flush_current();
        self.blocks.push(Block::Literal(c));
    }

    /// 열린 음절을 닫아 블록으로 추가
    fn flush_current(&mut self) {
        if self.last.is_none() {
            return;
        }
        let syllable = complete_syllable(self.initial, self.vowel, self.final_);
        self.blocks.push(Block::Syllable(syllable));
        self.reset_state();
    }

    /// 열린 음절 초기화
    fn reset_state(&mut self) {
        self.initial = None;
        self.vowel = None;
        self.final_ = None;
        self.last = None;
    }

    /// 조립 종료 후 블록 목록 반환
    pub fn into_blocks(mut self) -> Vec<Block> {
        self.flush_current();
        self.blocks
    }

    /// 조립 종료 및 최종 문자열 반환
    pub fn finish(self) -> String {
        let blocks = self.into_blocks();
        let mut output = String::with_capacity(blocks.len() * 3);
        for block in &blocks {
            block.render_into(&mut output);
        }
        output
    }
}

/// 음소열을 한글 문자열로 조합
pub fn assemble(phonemes: &[Phoneme]) -> String {
    let mut assembler = SyllableAssembler::new();
    for &phoneme in phonemes {
        assembler.feed(phoneme);
    }
    assembler.finish()
}

/// 한글 단어를 음소열로 분리
/// 받침 없는 음절은 종성을 만들지 않고, 한글 음절이 아닌 문자는 `Literal`
pub fn split_phonemes(word: &str) -> Vec<Phoneme> {
    let mut result = Vec::with_capacity(word.len());
    for c in word.chars() {
        match split(c) {
            Some((initial, vowel, final_)) => {
                result.push(Phoneme::Initial(initial));
                result.push(Phoneme::Vowel(vowel));
                if let Some(f) = final_ {
                    result.push(Phoneme::Final(f));
                }
            }
            None => result.push(Phoneme::Literal(c)),
        }
    }
    result
}

/// 음소열을 단어로 조합 (`assemble`과 같음)
pub fn join_phonemes(phonemes: &[Phoneme]) -> String {
    assemble(phonemes)
}
