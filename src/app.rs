use crate::config::{Config, ConfigError};
use crate::error::QuantityError;
use crate::i18n::{keys, Translator};
use crate::quantity::ArithmeticOperation;
use crate::ui_cli::{self, Cli, Command};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 물리량 생성/변환/연산 오류
    #[error("{0}")]
    Quantity(#[from] QuantityError),
}

impl AppError {
    /// 현재 언어로 된 사용자 메시지를 만든다.
    pub fn localized(&self, tr: &Translator) -> String {
        let body = match self {
            AppError::Io(e) => tr.tf(keys::ERROR_IO, &[("detail", e.to_string().as_str())]),
            AppError::Config(e) => {
                tr.tf(keys::ERROR_CONFIG, &[("detail", e.to_string().as_str())])
            }
            AppError::Quantity(e) => localize_quantity_error(e, tr),
        };
        format!("{}: {body}", tr.t(keys::ERROR_PREFIX))
    }
}

fn localize_quantity_error(err: &QuantityError, tr: &Translator) -> String {
    match err {
        QuantityError::InvalidValue => tr.t(keys::ERROR_INVALID_VALUE).to_string(),
        QuantityError::InvalidUnit => tr.t(keys::ERROR_INVALID_UNIT).to_string(),
        QuantityError::InvalidOperand => tr.t(keys::ERROR_INVALID_OPERAND).to_string(),
        QuantityError::CategoryMismatch { expected, found } => tr.tf(
            keys::ERROR_CATEGORY_MISMATCH,
            &[("expected", expected.name()), ("found", found.name())],
        ),
        QuantityError::UnsupportedOperation(family) => tr.tf(
            keys::ERROR_UNSUPPORTED_OPERATION,
            &[("family", family.name())],
        ),
        QuantityError::DivisionByZero => tr.t(keys::ERROR_DIVISION_BY_ZERO).to_string(),
    }
}

/// 파싱된 명령을 실행하고 출력할 문자열을 돌려준다.
pub fn run(cli: &Cli, config: &Config, tr: &Translator) -> Result<String, AppError> {
    match &cli.command {
        Command::Convert { value, unit, to } => {
            ui_cli::handle_convert(config, *value, unit, to.as_deref())
        }
        Command::Compare(args) => ui_cli::handle_compare(args),
        Command::Add(args) => ui_cli::handle_arithmetic(
            config,
            ArithmeticOperation::Add,
            &args.pair,
            args.to.as_deref(),
        ),
        Command::Subtract(args) => ui_cli::handle_arithmetic(
            config,
            ArithmeticOperation::Subtract,
            &args.pair,
            args.to.as_deref(),
        ),
        Command::Divide(args) => {
            ui_cli::handle_arithmetic(config, ArithmeticOperation::Divide, args, None)
        }
        Command::Units => Ok(ui_cli::handle_units(tr)),
        Command::InitConfig => {
            config.save(&cli.config)?;
            let path = cli.config.display().to_string();
            Ok(tr.tf(keys::CONFIG_WRITTEN, &[("path", path.as_str())]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitFamily;
    use clap::Parser;

    #[test]
    fn quantity_errors_are_localized() {
        let en = Translator::new("en");
        let err = AppError::from(QuantityError::CategoryMismatch {
            expected: UnitFamily::Length,
            found: UnitFamily::Weight,
        });
        assert_eq!(err.localized(&en), "Error: Unit families differ: LENGTH / WEIGHT");

        let ko = Translator::new("ko");
        assert_eq!(
            AppError::from(QuantityError::DivisionByZero).localized(&ko),
            "오류: 0으로 나눌 수 없습니다."
        );
    }

    #[test]
    fn run_dispatches_subcommands() {
        let tr = Translator::new("en");
        let cfg = Config::default();
        let cli = Cli::try_parse_from(["qm", "add", "1", "feet", "12", "inch", "--to", "inch"])
            .unwrap();
        assert_eq!(run(&cli, &cfg, &tr).unwrap(), "24.0 INCH");

        let cli = Cli::try_parse_from(["qm", "divide", "10", "feet", "0", "feet"]).unwrap();
        assert!(matches!(
            run(&cli, &cfg, &tr),
            Err(AppError::Quantity(QuantityError::DivisionByZero))
        ));
    }

    #[test]
    fn init_config_writes_file() {
        let path = std::env::temp_dir().join(format!("qm_init_{}.toml", std::process::id()));
        let path_str = path.display().to_string();
        let cli =
            Cli::try_parse_from(["qm", "--config", path_str.as_str(), "init-config"]).unwrap();
        let out = run(&cli, &Config::default(), &Translator::new("en")).unwrap();
        let loaded = Config::load_or_default(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(out, format!("Config written to {path_str}"));
        assert_eq!(loaded, Config::default());
    }
}
