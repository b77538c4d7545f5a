use std::env;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use quantity_measurement::config::Config;
use quantity_measurement::i18n::{self, Translator};
use quantity_measurement::ui_cli::Cli;
use quantity_measurement::{app, AppError};

/// 프로그램의 엔트리 포인트. 설정과 언어를 결정한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = match Config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            let tr = Translator::new(&i18n::resolve_language(cli.lang.as_deref(), None));
            eprintln!("{}", AppError::from(err).localized(&tr));
            return ExitCode::FAILURE;
        }
    };
    debug!(path = %cli.config.display(), ?config, "config loaded");

    let lang = i18n::resolve_language(cli.lang.as_deref(), config.language.as_deref());
    let tr = Translator::new_with_pack(&lang, cli.locales.as_deref());
    debug!(language = ?tr.language(), "translator ready");

    match app::run(&cli, &config, &tr) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::warn!(error = %err, "command failed");
            eprintln!("{}", err.localized(&tr));
            ExitCode::FAILURE
        }
    }
}
