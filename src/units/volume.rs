use serde::{Deserialize, Serialize};

use super::{Measurable, UnitFamily};
use crate::error::QuantityError;

/// 체적 단위. 내부 기준은 리터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolumeUnit {
    Litre,
    Millilitre,
    /// 미국 갤런
    Gallon,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 3] = [
        VolumeUnit::Litre,
        VolumeUnit::Millilitre,
        VolumeUnit::Gallon,
    ];

    pub const fn factor(self) -> f64 {
        match self {
            VolumeUnit::Litre => 1.0,
            VolumeUnit::Millilitre => 0.001,
            VolumeUnit::Gallon => 3.78541,
        }
    }
}

impl Measurable for VolumeUnit {
    fn family(&self) -> UnitFamily {
        UnitFamily::Volume
    }

    fn unit_name(&self) -> &'static str {
        match self {
            VolumeUnit::Litre => "LITRE",
            VolumeUnit::Millilitre => "MILLILITRE",
            VolumeUnit::Gallon => "GALLON",
        }
    }

    fn to_base(&self, value: f64) -> f64 {
        value * self.factor()
    }

    fn from_base(&self, base_value: f64) -> f64 {
        base_value / self.factor()
    }

    fn conversion_factor(&self) -> Result<f64, QuantityError> {
        Ok(self.factor())
    }
}
