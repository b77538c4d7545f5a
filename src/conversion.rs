use std::str::FromStr;

use crate::error::QuantityError;
use crate::quantity::Quantity;
use crate::units::*;

/// 문자열로 전달된 단위명을 해석한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열은 대소문자를 구분하지 않으며 `feet`, `INCH`, `kg`, `gal`, `C` 등을
/// 사용할 수 있다.
pub fn convert(value: f64, from_unit_str: &str, to_unit_str: &str) -> Result<f64, QuantityError> {
    let from: Unit = from_unit_str.parse()?;
    let to: Unit = to_unit_str.parse()?;
    Ok(Quantity::new(value, from)?.convert_to(to)?.value())
}

/// `"<숫자> <단위>"` 형식의 문자열을 물리량으로 해석한다.
pub fn parse_quantity(s: &str) -> Result<Quantity<Unit>, QuantityError> {
    let mut parts = s.split_whitespace();
    let value = parse_value(parts.next().unwrap_or_default())?;
    let unit = match parts.next() {
        Some(name) => Some(name.parse::<Unit>()?),
        None => None,
    };
    if parts.next().is_some() {
        return Err(QuantityError::InvalidUnit);
    }
    Quantity::from_parts(value, unit)
}

/// 숫자 문자열을 해석한다. 유한하지 않은 값은 거부한다.
pub fn parse_value(s: &str) -> Result<f64, QuantityError> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(QuantityError::InvalidValue)
}

impl FromStr for Unit {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<LengthUnit>()
            .map(Unit::from)
            .or_else(|_| s.parse::<WeightUnit>().map(Unit::from))
            .or_else(|_| s.parse::<VolumeUnit>().map(Unit::from))
            .or_else(|_| s.parse::<TemperatureUnit>().map(Unit::from))
    }
}

impl FromStr for LengthUnit {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "feet" | "foot" | "ft" => Ok(LengthUnit::Feet),
            "inch" | "inches" | "in" => Ok(LengthUnit::Inch),
            "yard" | "yards" | "yd" => Ok(LengthUnit::Yard),
            "centimeter" | "centimetre" | "cm" => Ok(LengthUnit::Centimeter),
            _ => Err(QuantityError::InvalidUnit),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kilogram" | "kg" => Ok(WeightUnit::Kilogram),
            "gram" | "g" => Ok(WeightUnit::Gram),
            "pound" | "lb" | "lbs" => Ok(WeightUnit::Pound),
            _ => Err(QuantityError::InvalidUnit),
        }
    }
}

impl FromStr for VolumeUnit {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "litre" | "liter" | "l" => Ok(VolumeUnit::Litre),
            "millilitre" | "milliliter" | "ml" => Ok(VolumeUnit::Millilitre),
            "gallon" | "gal" => Ok(VolumeUnit::Gallon),
            _ => Err(QuantityError::InvalidUnit),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kelvin" | "k" => Ok(TemperatureUnit::Kelvin),
            "celsius" | "c" | "°c" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" | "°f" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(QuantityError::InvalidUnit),
        }
    }
}
