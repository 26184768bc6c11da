//! hangulize - 외국어 단어를 한글로 표기하는 명령행 도구

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use hangulize::config::{load_config, save_config};
use hangulize::language::loader::load_language;
use hangulize::language::registry;
use hangulize::{hangulize_traced, HangulizeError, Language};

#[derive(Parser)]
#[command(name = "hangulize")]
#[command(about = "Transcribe foreign words into Korean Hangul")]
struct Args {
    /// 로캘 코드 (de, mkd, ...). 없으면 설정 파일의 기본값
    #[arg(short, long)]
    lang: Option<String>,

    /// JSON 규칙 파일 (--lang 대신 사용)
    #[arg(short, long, conflicts_with = "lang")]
    rules: Option<PathBuf>,

    /// 디버그 로그 출력
    #[arg(short, long)]
    verbose: bool,

    /// 변환 과정을 stderr 로 출력
    #[arg(long)]
    steps: bool,

    /// 기본 로캘을 설정 파일에 저장하고 종료
    #[arg(long, value_name = "CODE")]
    set_default: Option<String>,

    /// 변환할 문자열 (없으면 표준 입력을 한 줄씩)
    text: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // 로깅 초기화 (기본 warn, --verbose 면 debug)
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hangulize: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), HangulizeError> {
    let mut config = load_config();

    if let Some(code) = args.set_default {
        // 저장 전에 로캘 확인
        let language = registry::lookup(&code)?;
        config.default_locale = language.code().to_string();
        save_config(&config)?;
        println!("기본 언어: {} ({})", language.name(), language.code());
        return Ok(());
    }

    let loaded;
    let language: &Language = match &args.rules {
        Some(path) => {
            loaded = load_language(path)?;
            loaded.compile()?;
            &loaded
        }
        None => {
            let code = args.lang.as_deref().unwrap_or(&config.default_locale);
            registry::lookup(code)?
        }
    };

    let show_steps = args.steps || config.show_steps;

    if args.text.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            println!("{}", transcribe_line(&line?, language, show_steps)?);
        }
    } else {
        for text in &args.text {
            println!("{}", transcribe_line(text, language, show_steps)?);
        }
    }

    Ok(())
}

fn transcribe_line(
    text: &str,
    language: &Language,
    show_steps: bool,
) -> Result<String, HangulizeError> {
    let result = hangulize_traced(text, language, |step| {
        if show_steps {
            eprintln!("-> '{}'", step);
        }
    })?;
    if show_steps {
        eprintln!("=> '{}'", result);
    }
    Ok(result)
}
