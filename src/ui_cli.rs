use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::debug;

use crate::app::AppError;
use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::i18n::{keys, Translator};
use crate::quantity::{ArithmeticOperation, ArithmeticOutcome, Quantity};
use crate::units::{Measurable, Unit, UnitFamily};

/// 단위 인식 물리량 계산기.
#[derive(Debug, Parser)]
#[command(name = "quantity_measurement_cli", version)]
pub struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 출력 언어 (ko, en, auto)
    #[arg(long, global = true)]
    pub lang: Option<String>,
    /// 언어팩 디렉터리
    #[arg(long, global = true)]
    pub locales: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 값을 다른 단위로 변환한다
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        unit: String,
        /// 대상 단위. 생략하면 설정의 계열별 기본 단위
        #[arg(long)]
        to: Option<String>,
    },
    /// 두 물리량이 같은지 비교한다
    Compare(PairArgs),
    /// 두 물리량을 더한다
    Add(ArithmeticArgs),
    /// 두 물리량을 뺀다 (소수 둘째 자리 반올림)
    Subtract(ArithmeticArgs),
    /// 두 물리량의 비율을 구한다
    Divide(PairArgs),
    /// 지원하는 단위를 나열한다
    Units,
    /// 기본 설정 파일을 생성한다
    InitConfig,
}

#[derive(Debug, Clone, Args)]
pub struct PairArgs {
    #[arg(allow_negative_numbers = true)]
    pub lhs_value: f64,
    pub lhs_unit: String,
    #[arg(allow_negative_numbers = true)]
    pub rhs_value: f64,
    pub rhs_unit: String,
}

#[derive(Debug, Clone, Args)]
pub struct ArithmeticArgs {
    #[command(flatten)]
    pub pair: PairArgs,
    /// 결과 단위. 생략하면 왼쪽 피연산자의 단위
    #[arg(long)]
    pub to: Option<String>,
}

impl PairArgs {
    fn quantities(&self) -> Result<(Quantity<Unit>, Quantity<Unit>), AppError> {
        let lhs = Quantity::new(self.lhs_value, self.lhs_unit.parse::<Unit>()?)?;
        let rhs = Quantity::new(self.rhs_value, self.rhs_unit.parse::<Unit>()?)?;
        Ok((lhs, rhs))
    }
}

/// 변환 명령을 처리한다.
pub fn handle_convert(
    cfg: &Config,
    value: f64,
    unit: &str,
    to: Option<&str>,
) -> Result<String, AppError> {
    let quantity = Quantity::new(value, unit.parse::<Unit>()?)?;
    let target = match to {
        Some(name) => name.parse::<Unit>()?,
        None => cfg.default_units.for_family(quantity.family()),
    };
    debug!(%quantity, %target, "converting");
    let converted = quantity.convert_to(target)?;
    Ok(render_quantity(cfg, &converted))
}

/// 비교 명령을 처리한다.
pub fn handle_compare(args: &PairArgs) -> Result<String, AppError> {
    let (lhs, rhs) = args.quantities()?;
    debug!(%lhs, %rhs, "comparing");
    Ok((lhs == rhs).to_string())
}

/// 덧셈/뺄셈/나눗셈 명령을 처리한다.
pub fn handle_arithmetic(
    cfg: &Config,
    operation: ArithmeticOperation,
    args: &PairArgs,
    to: Option<&str>,
) -> Result<String, AppError> {
    let (lhs, rhs) = args.quantities()?;
    let target = match to {
        Some(name) => name.parse::<Unit>()?,
        None => lhs.unit(),
    };
    debug!(?operation, %lhs, %rhs, %target, "applying arithmetic");
    match lhs.apply(operation, Some(&rhs), Some(target))? {
        ArithmeticOutcome::Quantity(q) => Ok(render_quantity(cfg, &q)),
        ArithmeticOutcome::Scalar(ratio) => Ok(render_scalar(cfg, ratio)),
    }
}

/// 지원 단위 목록을 만든다.
pub fn handle_units(tr: &Translator) -> String {
    let mut lines = vec![format!("{}:", tr.t(keys::UNITS_HEADING))];
    for family in UnitFamily::ALL {
        let base = family.base_unit();
        let names: Vec<String> = family
            .units()
            .into_iter()
            .map(|unit| {
                if unit == base {
                    format!("{} {}", unit.unit_name(), tr.t(keys::UNITS_BASE_MARK))
                } else {
                    unit.unit_name().to_string()
                }
            })
            .collect();
        lines.push(format!("  {family}: {}", names.join(", ")));
    }
    lines.join("\n")
}

fn render_quantity(cfg: &Config, quantity: &Quantity<Unit>) -> String {
    match cfg.display.precision {
        Some(p) => format!("{quantity:.p$}"),
        None => quantity.to_string(),
    }
}

fn render_scalar(cfg: &Config, value: f64) -> String {
    match cfg.display.precision {
        Some(p) => format!("{value:.p$}"),
        None if value.fract() == 0.0 && value.abs() < 1e16 => format!("{value:.1}"),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(lv: f64, lu: &str, rv: f64, ru: &str) -> PairArgs {
        PairArgs {
            lhs_value: lv,
            lhs_unit: lu.to_string(),
            rhs_value: rv,
            rhs_unit: ru.to_string(),
        }
    }

    #[test]
    fn convert_uses_family_default_when_target_missing() {
        let cfg = Config::default();
        assert_eq!(handle_convert(&cfg, 212.0, "F", None).unwrap(), "100.0 CELSIUS");
        assert_eq!(
            handle_convert(&cfg, 1.0, "feet", Some("inch")).unwrap(),
            "12.0 INCH"
        );
    }

    #[test]
    fn precision_from_config() {
        let mut cfg = Config::default();
        cfg.display.precision = Some(2);
        assert_eq!(
            handle_convert(&cfg, 1.0, "gallon", Some("litre")).unwrap(),
            "3.79 LITRE"
        );
        assert_eq!(
            handle_arithmetic(&cfg, ArithmeticOperation::Divide, &pair(1.0, "ft", 3.0, "ft"), None)
                .unwrap(),
            "0.33"
        );
    }

    #[test]
    fn compare_prints_boolean() {
        assert_eq!(handle_compare(&pair(0.0, "c", 32.0, "f")).unwrap(), "true");
        assert_eq!(handle_compare(&pair(1.0, "l", 1.0, "kg")).unwrap(), "false");
    }

    #[test]
    fn arithmetic_commands() {
        let cfg = Config::default();
        assert_eq!(
            handle_arithmetic(
                &cfg,
                ArithmeticOperation::Add,
                &pair(1.0, "kg", 1000.0, "g"),
                None
            )
            .unwrap(),
            "2.0 KILOGRAM"
        );
        assert_eq!(
            handle_arithmetic(
                &cfg,
                ArithmeticOperation::Subtract,
                &pair(10.0, "feet", 6.0, "inch"),
                Some("inch")
            )
            .unwrap(),
            "114.0 INCH"
        );
        assert_eq!(
            handle_arithmetic(
                &cfg,
                ArithmeticOperation::Divide,
                &pair(10.0, "feet", 5.0, "feet"),
                None
            )
            .unwrap(),
            "2.0"
        );
    }

    #[test]
    fn arithmetic_errors_surface_as_quantity_errors() {
        let cfg = Config::default();
        let err = handle_arithmetic(
            &cfg,
            ArithmeticOperation::Add,
            &pair(1.0, "c", 1.0, "c"),
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Quantity(crate::QuantityError::UnsupportedOperation(
                UnitFamily::Temperature
            ))
        ));
    }

    #[test]
    fn units_listing_marks_base_units() {
        let out = handle_units(&Translator::new("en"));
        assert!(out.starts_with("Supported units:"));
        assert!(out.contains("LENGTH: FEET (base), INCH, YARD, CENTIMETER"));
        assert!(out.contains("TEMPERATURE: KELVIN (base), CELSIUS, FAHRENHEIT"));
    }

    #[test]
    fn parses_negative_values() {
        let cli = Cli::try_parse_from(["qm", "convert", "-40", "celsius", "--to", "f"]).unwrap();
        match cli.command {
            Command::Convert { value, unit, to } => {
                assert_eq!(value, -40.0);
                assert_eq!(unit, "celsius");
                assert_eq!(to.as_deref(), Some("f"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
