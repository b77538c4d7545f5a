//! 단위 정의 및 변환 모듈 모음.
//!
//! 모든 단위는 [`Measurable`] 계약을 구현하며, 자신이 속한 계열의 기준 단위로
//! 값을 옮기고 되돌리는 방법을 스스로 알고 있다. [`crate::Quantity`]는 이 계약만
//! 보고 동작하므로 계열이 늘어나도 수정할 필요가 없다.

pub mod length;
pub mod temperature;
pub mod volume;
pub mod weight;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, QuantityError};

pub use length::LengthUnit;
pub use temperature::TemperatureUnit;
pub use volume::VolumeUnit;
pub use weight::WeightUnit;

/// 서로 변환 가능한 단위들의 닫힌 집합(계열)을 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitFamily {
    Length,
    Weight,
    Volume,
    Temperature,
}

impl UnitFamily {
    pub const ALL: [UnitFamily; 4] = [
        UnitFamily::Length,
        UnitFamily::Weight,
        UnitFamily::Volume,
        UnitFamily::Temperature,
    ];

    pub fn name(self) -> &'static str {
        match self {
            UnitFamily::Length => "LENGTH",
            UnitFamily::Weight => "WEIGHT",
            UnitFamily::Volume => "VOLUME",
            UnitFamily::Temperature => "TEMPERATURE",
        }
    }

    /// 계열의 기준 단위.
    pub fn base_unit(self) -> Unit {
        match self {
            UnitFamily::Length => Unit::Length(LengthUnit::Feet),
            UnitFamily::Weight => Unit::Weight(WeightUnit::Kilogram),
            UnitFamily::Volume => Unit::Volume(VolumeUnit::Litre),
            UnitFamily::Temperature => Unit::Temperature(TemperatureUnit::Kelvin),
        }
    }

    /// 계열에 속한 모든 단위.
    pub fn units(self) -> Vec<Unit> {
        match self {
            UnitFamily::Length => LengthUnit::ALL.iter().copied().map(Unit::from).collect(),
            UnitFamily::Weight => WeightUnit::ALL.iter().copied().map(Unit::from).collect(),
            UnitFamily::Volume => VolumeUnit::ALL.iter().copied().map(Unit::from).collect(),
            UnitFamily::Temperature => TemperatureUnit::ALL
                .iter()
                .copied()
                .map(Unit::from)
                .collect(),
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 단위 기술자(descriptor) 계약.
///
/// `to_base`/`from_base`는 검사 없는 순수 변환 규칙이고, 외부에서는 유한성 검사를
/// 포함하는 `convert_to_base_unit`/`convert_from_base_unit`을 사용한다.
pub trait Measurable: Copy + PartialEq + fmt::Debug {
    /// 단위가 속한 계열.
    fn family(&self) -> UnitFamily;

    /// 표시용 단위 이름 (예: `FEET`, `CELSIUS`).
    fn unit_name(&self) -> &'static str;

    fn to_base(&self, value: f64) -> f64;

    fn from_base(&self, base_value: f64) -> f64;

    /// 기준 단위 대비 배율. 오프셋이 있는 단위는 하나의 배율로 표현할 수 없다.
    fn conversion_factor(&self) -> Result<f64, QuantityError>;

    /// 덧셈/뺄셈/나눗셈이 의미를 갖는 단위인지 여부.
    fn supports_arithmetic(&self) -> bool {
        true
    }

    /// 값을 기준 단위로 변환한다.
    fn convert_to_base_unit(&self, value: f64) -> Result<f64, QuantityError> {
        ensure_finite(value)
            .map(|v| self.to_base(v))
            .and_then(ensure_finite)
    }

    /// 기준 단위 값을 이 단위로 변환한다.
    fn convert_from_base_unit(&self, base_value: f64) -> Result<f64, QuantityError> {
        ensure_finite(base_value).map(|v| self.from_base(v))
    }
}

/// 런타임에 결정되는 단위. 계열별 단위 enum을 하나로 묶는다.
///
/// 문자열에서 해석한 단위처럼 계열을 컴파일 시점에 알 수 없을 때 사용하며,
/// 계열 일치 여부는 [`UnitFamily`] 태그로 실행 중에 검사한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Unit {
    Length(LengthUnit),
    Weight(WeightUnit),
    Volume(VolumeUnit),
    Temperature(TemperatureUnit),
}

impl Unit {
    /// 지원하는 모든 단위.
    pub fn all() -> Vec<Unit> {
        UnitFamily::ALL
            .iter()
            .flat_map(|family| family.units())
            .collect()
    }
}

impl Measurable for Unit {
    fn family(&self) -> UnitFamily {
        match self {
            Unit::Length(u) => u.family(),
            Unit::Weight(u) => u.family(),
            Unit::Volume(u) => u.family(),
            Unit::Temperature(u) => u.family(),
        }
    }

    fn unit_name(&self) -> &'static str {
        match self {
            Unit::Length(u) => u.unit_name(),
            Unit::Weight(u) => u.unit_name(),
            Unit::Volume(u) => u.unit_name(),
            Unit::Temperature(u) => u.unit_name(),
        }
    }

    fn to_base(&self, value: f64) -> f64 {
        match self {
            Unit::Length(u) => u.to_base(value),
            Unit::Weight(u) => u.to_base(value),
            Unit::Volume(u) => u.to_base(value),
            Unit::Temperature(u) => u.to_base(value),
        }
    }

    fn from_base(&self, base_value: f64) -> f64 {
        match self {
            Unit::Length(u) => u.from_base(base_value),
            Unit::Weight(u) => u.from_base(base_value),
            Unit::Volume(u) => u.from_base(base_value),
            Unit::Temperature(u) => u.from_base(base_value),
        }
    }

    fn conversion_factor(&self) -> Result<f64, QuantityError> {
        match self {
            Unit::Length(u) => u.conversion_factor(),
            Unit::Weight(u) => u.conversion_factor(),
            Unit::Volume(u) => u.conversion_factor(),
            Unit::Temperature(u) => u.conversion_factor(),
        }
    }

    fn supports_arithmetic(&self) -> bool {
        match self {
            Unit::Length(u) => u.supports_arithmetic(),
            Unit::Weight(u) => u.supports_arithmetic(),
            Unit::Volume(u) => u.supports_arithmetic(),
            Unit::Temperature(u) => u.supports_arithmetic(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.unit_name())
    }
}

impl From<LengthUnit> for Unit {
    fn from(value: LengthUnit) -> Self {
        Unit::Length(value)
    }
}

impl From<WeightUnit> for Unit {
    fn from(value: WeightUnit) -> Self {
        Unit::Weight(value)
    }
}

impl From<VolumeUnit> for Unit {
    fn from(value: VolumeUnit) -> Self {
        Unit::Volume(value)
    }
}

impl From<TemperatureUnit> for Unit {
    fn from(value: TemperatureUnit) -> Self {
        Unit::Temperature(value)
    }
}
