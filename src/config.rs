use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::units::*;

/// 설정 파일의 기본 경로.
pub const DEFAULT_CONFIG_PATH: &str = "quantity_measurement.toml";

/// 변환 대상 단위를 생략했을 때 사용할 계열별 기본 단위.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub length: LengthUnit,
    pub weight: WeightUnit,
    pub volume: VolumeUnit,
    pub temperature: TemperatureUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            length: LengthUnit::Feet,
            weight: WeightUnit::Kilogram,
            volume: VolumeUnit::Litre,
            temperature: TemperatureUnit::Celsius,
        }
    }
}

impl DefaultUnits {
    /// 계열에 해당하는 기본 단위를 돌려준다.
    pub fn for_family(&self, family: UnitFamily) -> Unit {
        match family {
            UnitFamily::Length => self.length.into(),
            UnitFamily::Weight => self.weight.into(),
            UnitFamily::Volume => self.volume.into(),
            UnitFamily::Temperature => self.temperature.into(),
        }
    }
}

/// 결과 출력 형식.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// 소수점 이하 자릿수. 없으면 값 그대로 출력한다.
    pub precision: Option<usize>,
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드 (ko, en). 없으면 시스템 로케일을 따른다.
    pub language: Option<String>,
    pub default_units: DefaultUnits,
    pub display: DisplayOptions,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Config {
    /// 설정 파일을 로드하거나, 파일이 없으면 기본 설정을 돌려준다.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("quantity_measurement_missing_config.toml");
        let _ = fs::remove_file(&path);
        let cfg = Config::load_or_default(&path).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_fills_remaining_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            language = "en"

            [default_units]
            length = "INCH"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.language.as_deref(), Some("en"));
        assert_eq!(cfg.default_units.length, LengthUnit::Inch);
        assert_eq!(cfg.default_units.weight, WeightUnit::Kilogram);
        assert_eq!(cfg.display.precision, None);
    }

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "quantity_measurement_config_{}.toml",
            std::process::id()
        ));
        let mut cfg = Config::default();
        cfg.default_units.temperature = TemperatureUnit::Fahrenheit;
        cfg.display.precision = Some(3);
        cfg.save(&path).unwrap();

        let loaded = Config::load_or_default(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn default_unit_per_family() {
        let units = DefaultUnits::default();
        assert_eq!(
            units.for_family(UnitFamily::Temperature),
            Unit::Temperature(TemperatureUnit::Celsius)
        );
        assert_eq!(units.for_family(UnitFamily::Volume), Unit::Volume(VolumeUnit::Litre));
    }

    #[test]
    fn invalid_unit_name_is_parse_error() {
        let err = toml::from_str::<Config>("[default_units]\nlength = \"METER\"\n").unwrap_err();
        assert!(matches!(ConfigError::from(err), ConfigError::Parse(_)));
    }
}
