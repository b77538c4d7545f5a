use serde::{Deserialize, Serialize};

use super::{Measurable, UnitFamily};
use crate::error::QuantityError;

const CELSIUS_OFFSET_K: f64 = 273.15;

/// 온도 단위. 내부 기준은 켈빈이다.
///
/// 섭씨/화씨는 배율과 오프셋을 함께 쓰는 아핀 변환이라 단일 배율로 표현할 수
/// 없으며, 절대 온도끼리의 덧셈/뺄셈/나눗셈도 정의하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Kelvin,
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
    ];
}

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + CELSIUS_OFFSET_K,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + CELSIUS_OFFSET_K,
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - CELSIUS_OFFSET_K,
        TemperatureUnit::Fahrenheit => (value_k - CELSIUS_OFFSET_K) * 9.0 / 5.0 + 32.0,
    }
}

impl Measurable for TemperatureUnit {
    fn family(&self) -> UnitFamily {
        UnitFamily::Temperature
    }

    fn unit_name(&self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "KELVIN",
            TemperatureUnit::Celsius => "CELSIUS",
            TemperatureUnit::Fahrenheit => "FAHRENHEIT",
        }
    }

    fn to_base(&self, value: f64) -> f64 {
        to_kelvin(value, *self)
    }

    fn from_base(&self, base_value: f64) -> f64 {
        from_kelvin(base_value, *self)
    }

    fn conversion_factor(&self) -> Result<f64, QuantityError> {
        Err(QuantityError::UnsupportedOperation(UnitFamily::Temperature))
    }

    fn supports_arithmetic(&self) -> bool {
        false
    }
}
