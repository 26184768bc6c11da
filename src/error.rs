//! 에러 타입

use thiserror::Error;

/// 표기 규칙 컴파일 에러 (언어 설정 오류)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// 언어에 없는 매크로 참조
    #[error("알 수 없는 매크로 <{name}> (패턴 '{pattern}')")]
    UnknownMacro { pattern: String, name: String },
    /// 잘못된 문맥 조건 `{X}`
    #[error("잘못된 문맥 조건 (패턴 '{pattern}'): {reason}")]
    MalformedContext { pattern: String, reason: String },
    /// 정규식 컴파일 실패
    #[error("잘못된 패턴 '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
    /// 표기 규칙이 없는 언어
    #[error("언어 '{0}'에 표기 규칙이 없습니다")]
    MissingNotation(String),
}

/// 한글 표기 에러
#[derive(Debug, Error)]
pub enum HangulizeError {
    #[error(transparent)]
    Notation(#[from] NotationError),
    /// 등록되지 않은 로캘 코드
    #[error("지원하지 않는 언어: {0}")]
    UnknownLocale(String),
    /// 규칙 파일 읽기 실패
    #[error("규칙 파일 읽기 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 규칙 파일 파싱 실패
    #[error("규칙 파일 파싱 오류: {0}")]
    Parse(#[from] serde_json::Error),
    /// 규칙 파일 내용 오류
    #[error("잘못된 언어 정의: {0}")]
    InvalidLanguage(String),
}
