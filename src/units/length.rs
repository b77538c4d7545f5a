use serde::{Deserialize, Serialize};

use super::{Measurable, UnitFamily};
use crate::error::QuantityError;

/// 길이 단위. 내부 기준은 피트이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LengthUnit {
    Feet,
    Inch,
    Yard,
    Centimeter,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Feet,
        LengthUnit::Inch,
        LengthUnit::Yard,
        LengthUnit::Centimeter,
    ];

    /// 1 단위가 몇 피트인지.
    pub const fn factor(self) -> f64 {
        match self {
            LengthUnit::Feet => 1.0,
            LengthUnit::Inch => 1.0 / 12.0,
            LengthUnit::Yard => 3.0,
            LengthUnit::Centimeter => 1.0 / 30.48,
        }
    }
}

impl Measurable for LengthUnit {
    fn family(&self) -> UnitFamily {
        UnitFamily::Length
    }

    fn unit_name(&self) -> &'static str {
        match self {
            LengthUnit::Feet => "FEET",
            LengthUnit::Inch => "INCH",
            LengthUnit::Yard => "YARD",
            LengthUnit::Centimeter => "CENTIMETER",
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn inch_and_yard_relative_to_feet() {
        assert_relative_eq!(LengthUnit::Inch.convert_to_base_unit(12.0).unwrap(), 1.0);
        assert_relative_eq!(LengthUnit::Yard.convert_to_base_unit(1.0).unwrap(), 3.0);
        assert_relative_eq!(LengthUnit::Feet.convert_from_base_unit(3.0).unwrap(), 3.0);
    }

    #[test]
    fn centimeter_uses_exact_inch_definition() {
        // 1 in = 2.54 cm
        let base = LengthUnit::Centimeter.convert_to_base_unit(2.54).unwrap();
        assert_relative_eq!(
            LengthUnit::Inch.convert_from_base_unit(base).unwrap(),
            1.0,
            epsilon = 1e-12
        );
    }
}
