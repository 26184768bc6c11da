//! 음소 (한글 자모 + 음절 내 역할)

use serde::{Deserialize, Serialize};
use std::fmt;

/// 음절 안에서 자모가 차지하는 자리
///
/// 순서는 `Initial < Vowel < Final`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Initial,
    Vowel,
    Final,
}

/// 변환 규칙이 만들어 내는 한 단위
///
/// 자모 하나와 그 자모의 음절 내 역할을 함께 가집니다.
/// `Literal`은 조합하지 않고 그대로 출력하는 문자입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phoneme {
    /// 초성
    Initial(char),
    /// 중성
    Vowel(char),
    /// 종성
    Final(char),
    /// 조합하지 않는 문자
    Literal(char),
}

impl Phoneme {
    /// 자모 (또는 그대로 출력할 문자) 반환
    pub fn letter(&self) -> char {
        match *self {
            Phoneme::Initial(c) | Phoneme::Vowel(c) | Phoneme::Final(c) | Phoneme::Literal(c) => c,
        }
    }

    /// 음절 내 역할 반환 (`Literal`은 None)
    pub fn role(&self) -> Option<Role> {
        match self {
            Phoneme::Initial(_) => Some(Role::Initial),
            Phoneme::Vowel(_) => Some(Role::Vowel),
            Phoneme::Final(_) => Some(Role::Final),
            Phoneme::Literal(_) => None,
        }
    }

    /// 그대로 출력하는 문자인지 확인
    pub fn is_literal(&self) -> bool {
        matches!(self, Phoneme::Literal(_))
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Phoneme::Initial(_) => "초성",
            Phoneme::Vowel(_) => "중성",
            Phoneme::Final(_) => "종성",
            Phoneme::Literal(_) => "문자",
        };
        write!(f, "<{} '{}'>", kind, self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::jamo::{A, G, NG};

    #[test]
    fn test_role_order() {
        assert!(Role::Initial < Role::Vowel);
        assert!(Role::Vowel < Role::Final);
        assert!(Role::Initial < Role::Final);
    }

    #[test]
    fn test_letter_and_role() {
        assert_eq!(Phoneme::Initial(G).letter(), 'ㄱ');
        assert_eq!(Phoneme::Initial(G).role(), Some(Role::Initial));
        assert_eq!(Phoneme::Vowel(A).role(), Some(Role::Vowel));
        assert_eq!(Phoneme::Final(NG).role(), Some(Role::Final));
        assert_eq!(Phoneme::Literal('-').role(), None);
        assert!(Phoneme::Literal('-').is_literal());
        assert!(!Phoneme::Final(NG).is_literal());
    }

    #[test]
    fn test_display() {
        assert_eq!(Phoneme::Initial(G).to_string(), "<초성 'ㄱ'>");
        assert_eq!(Phoneme::Literal('-').to_string(), "<문자 '-'>");
    }

    #[test]
    fn test_deserialize() {
        let units: Vec<Phoneme> =
            serde_json::from_str(r#"[{"initial": "ㄱ"}, {"vowel": "ㅏ"}, {"literal": "-"}]"#).unwrap();
        assert_eq!(
            units,
            vec![Phoneme::Initial(G), Phoneme::Vowel(A), Phoneme::Literal('-')]
        );
    }
}
