//! 유니코드 한글 조합/분해 유틸리티
//!
//! 자모는 호환용 자모(U+3131~U+3163) 문자로 주고받습니다.

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 호환용 모음 자모 시작 (ㅏ)
const JUNGSEONG_JAMO_BASE: u32 = 0x314F;

/// 초성 인덱스 순서의 호환용 자모
const CHOSEONG_LETTERS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// 종성 인덱스 순서의 호환용 자모 (인덱스 0 = 종성 없음은 제외)
const JONGSEONG_LETTERS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ',
    'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 자음 자모 문자의 초성 인덱스
pub fn choseong_index(letter: char) -> Option<u32> {
    CHOSEONG_LETTERS
        .iter()
        .position(|&c| c == letter)
        .map(|i| i as u32)
}

/// 모음 자모 문자의 중성 인덱스
pub fn jungseong_index(letter: char) -> Option<u32> {
    let code = letter as u32;
    if (JUNGSEONG_JAMO_BASE..JUNGSEONG_JAMO_BASE + JUNGSEONG_COUNT).contains(&code) {
        Some(code - JUNGSEONG_JAMO_BASE)
    } else {
        None
    }
}

/// 자음 자모 문자의 종성 인덱스 (1~27)
/// ㄸ, ㅃ, ㅉ 처럼 받침으로 쓸 수 없는 자음은 None
pub fn jongseong_index(letter: char) -> Option<u32> {
    JONGSEONG_LETTERS
        .iter()
        .position(|&c| c == letter)
        .map(|i| i as u32 + 1)
}

/// 초성 인덱스에 해당하는 호환용 자모
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_LETTERS.get(cho as usize).copied()
}

/// 중성 인덱스에 해당하는 호환용 자모
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    if jung < JUNGSEONG_COUNT {
        char::from_u32(JUNGSEONG_JAMO_BASE + jung)
    } else {
        None
    }
}

/// 종성 인덱스에 해당하는 호환용 자모 (0 = 종성 없음은 None)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    match jong {
        0 => None,
        _ => JONGSEONG_LETTERS.get(jong as usize - 1).copied(),
    }
}

/// 초성/중성/종성 자모를 한 음절로 조합
/// 종성이 None이면 받침 없는 음절
pub fn join(initial: char, vowel: char, final_: Option<char>) -> Option<char> {
    let cho = choseong_index(initial)?;
    let jung = jungseong_index(vowel)?;
    let jong = match final_ {
        Some(letter) => jongseong_index(letter)?,
        None => 0,
    };
    compose_syllable(cho, jung, jong)
}

/// 완성형 한글 한 글자를 (초성, 중성, 종성) 자모로 분리
pub fn split(c: char) -> Option<(char, char, Option<char>)> {
    let (cho, jung, jong) = decompose_syllable(c)?;
    Some((
        choseong_to_jamo_char(cho)?,
        jungseong_to_jamo_char(jung)?,
        jongseong_to_jamo_char(jong),
    ))
}
