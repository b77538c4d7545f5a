use serde::{Deserialize, Serialize};

use super::{Measurable, UnitFamily};
use crate::error::QuantityError;

/// 무게(질량) 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightUnit {
    Kilogram,
    Gram,
    Pound,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 3] = [WeightUnit::Kilogram, WeightUnit::Gram, WeightUnit::Pound];

    pub const fn factor(self) -> f64 {
        match self {
            WeightUnit::Kilogram => 1.0,
            WeightUnit::Gram => 0.001,
            WeightUnit::Pound => 0.453592,
        }
    }
}

impl Measurable for WeightUnit {
    fn family(&self) -> UnitFamily {
        UnitFamily::Weight
    }

    fn unit_name(&self) -> &'static str {
        match self {
            WeightUnit::Kilogram => "KILOGRAM",
            WeightUnit::Gram => "GRAM",
            WeightUnit::Pound => "POUND",
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
    fn gram_and_pound_to_kilogram() {
        assert_relative_eq!(WeightUnit::Gram.convert_to_base_unit(1000.0).unwrap(), 1.0);
        assert_relative_eq!(
            WeightUnit::Pound.convert_to_base_unit(1.0).unwrap(),
            0.453592
        );
        assert_relative_eq!(
            WeightUnit::Pound.convert_from_base_unit(0.453592).unwrap(),
            1.0
        );
    }
}
