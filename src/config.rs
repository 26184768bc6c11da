//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::HangulizeError;

/// hangulize CLI 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HangulizeConfig {
    /// --lang 없이 실행할 때 쓰는 로캘 코드
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// 변환 과정을 stderr 로 출력
    #[serde(default)]
    pub show_steps: bool,
}

fn default_locale() -> String {
    "de".to_string()
}

impl Default for HangulizeConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            show_steps: false,
        }
    }
}

/// 설정 파일 경로: ~/.config/hangulize/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("hangulize").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> HangulizeConfig {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> HangulizeConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패, 기본값 사용: {}", e);
            HangulizeConfig::default()
        }),
        Err(_) => HangulizeConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &HangulizeConfig) -> Result<(), HangulizeError> {
    save_config_to(config, &config_path())
}

pub fn save_config_to(config: &HangulizeConfig, path: &Path) -> Result<(), HangulizeError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
