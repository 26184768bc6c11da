//! 규칙 테이블에서 쓰는 자모 이름
//!
//! 로마자 이름은 국립국어원 로마자 표기를 따릅니다.

// 자음
pub const G: char = 'ㄱ';
pub const GG: char = 'ㄲ';
pub const N: char = 'ㄴ';
pub const D: char = 'ㄷ';
pub const DD: char = 'ㄸ';
pub const L: char = 'ㄹ';
pub const M: char = 'ㅁ';
pub const B: char = 'ㅂ';
pub const BB: char = 'ㅃ';
pub const S: char = 'ㅅ';
pub const SS: char = 'ㅆ';
pub const NG: char = 'ㅇ';
pub const J: char = 'ㅈ';
pub const JJ: char = 'ㅉ';
pub const C: char = 'ㅊ';
pub const K: char = 'ㅋ';
pub const T: char = 'ㅌ';
pub const P: char = 'ㅍ';
pub const H: char = 'ㅎ';

// 모음
pub const A: char = 'ㅏ';
pub const AE: char = 'ㅐ';
pub const YA: char = 'ㅑ';
pub const YAE: char = 'ㅒ';
pub const EO: char = 'ㅓ';
pub const E: char = 'ㅔ';
pub const YEO: char = 'ㅕ';
pub const YE: char = 'ㅖ';
pub const O: char = 'ㅗ';
pub const WA: char = 'ㅘ';
pub const WAE: char = 'ㅙ';
pub const OE: char = 'ㅚ';
pub const YO: char = 'ㅛ';
pub const U: char = 'ㅜ';
pub const WEO: char = 'ㅝ';
pub const WE: char = 'ㅞ';
pub const WI: char = 'ㅟ';
pub const YU: char = 'ㅠ';
pub const EU: char = 'ㅡ';
pub const YI: char = 'ㅢ';
pub const I: char = 'ㅣ';

/// 초성이 없을 때 채우는 소리 없는 초성
pub const SILENT_INITIAL: char = NG;
/// 중성이 없을 때 채우는 기본 모음
pub const DEFAULT_VOWEL: char = EU;

/// 자음 자모인지 확인
pub fn is_consonant(c: char) -> bool {
    ('ㄱ'..='ㅎ').contains(&c)
}

/// 모음 자모인지 확인
pub fn is_vowel(c: char) -> bool {
    ('ㅏ'..='ㅣ').contains(&c)
}
