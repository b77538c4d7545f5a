//! 대표 사용 시나리오 회귀 테스트.
use approx::assert_relative_eq;
use quantity_measurement::{
    LengthUnit, Measurable, Quantity, QuantityError, TemperatureUnit, Unit, UnitFamily,
    VolumeUnit, WeightUnit,
};

#[test]
fn one_foot_is_twelve_inches() {
    let inches = Quantity::new(1.0, LengthUnit::Feet)
        .unwrap()
        .convert_to(LengthUnit::Inch)
        .unwrap();
    assert_eq!(inches.value(), 12.0);
    assert_eq!(inches.unit(), LengthUnit::Inch);
}

#[test]
fn kilogram_plus_grams_stays_in_kilograms() {
    let kg = Quantity::new(1.0, WeightUnit::Kilogram).unwrap();
    let grams = Quantity::new(1000.0, WeightUnit::Gram).unwrap();
    let sum = kg.add(&grams).unwrap();
    assert_eq!(sum.value(), 2.0);
    assert_eq!(sum.unit(), WeightUnit::Kilogram);
}

#[test]
fn freezing_point_celsius_equals_fahrenheit() {
    let c = Quantity::new(0.0, TemperatureUnit::Celsius).unwrap();
    let f = Quantity::new(32.0, TemperatureUnit::Fahrenheit).unwrap();
    assert_eq!(c, f);
}

#[test]
fn dividing_by_zero_feet_fails() {
    let ten = Quantity::new(10.0, LengthUnit::Feet).unwrap();
    let zero = Quantity::new(0.0, LengthUnit::Feet).unwrap();
    assert_eq!(ten.divide(&zero), Err(QuantityError::DivisionByZero));
}

#[test]
fn subtracting_inches_from_feet_rounds() {
    let ten = Quantity::new(10.0, LengthUnit::Feet).unwrap();
    let six_inches = Quantity::new(6.0, LengthUnit::Inch).unwrap();
    let diff = ten.subtract(&six_inches).unwrap();
    assert_eq!(diff.value(), 9.5);
    assert_eq!(diff.unit(), LengthUnit::Feet);
}

#[test]
fn adding_length_to_weight_is_a_category_mismatch() {
    let feet = Quantity::new(1.0, Unit::from(LengthUnit::Feet)).unwrap();
    let kilogram = Quantity::new(1.0, Unit::from(WeightUnit::Kilogram)).unwrap();
    let expected = QuantityError::CategoryMismatch {
        expected: UnitFamily::Length,
        found: UnitFamily::Weight,
    };
    assert_eq!(feet.add(&kilogram), Err(expected));
    assert_eq!(feet.subtract(&kilogram), Err(expected));
    assert_eq!(feet.divide(&kilogram), Err(expected));
}

#[test]
fn temperature_rejects_every_arithmetic_operation() {
    let a = Quantity::new(100.0, TemperatureUnit::Celsius).unwrap();
    let b = Quantity::new(50.0, TemperatureUnit::Fahrenheit).unwrap();
    let unsupported = QuantityError::UnsupportedOperation(UnitFamily::Temperature);
    assert_eq!(a.add(&b), Err(unsupported));
    assert_eq!(a.subtract(&b), Err(unsupported));
    assert_eq!(a.divide(&b), Err(unsupported));
    assert_eq!(a.add_in(&b, TemperatureUnit::Kelvin), Err(unsupported));

    // 변환 자체는 허용된다.
    let k = a.convert_to(TemperatureUnit::Kelvin).unwrap();
    assert_relative_eq!(k.value(), 373.15, epsilon = 1e-9);
}

#[test]
fn volume_mixed_units() {
    let gallon = Quantity::new(1.0, VolumeUnit::Gallon).unwrap();
    let litre = Quantity::new(3.78541, VolumeUnit::Litre).unwrap();
    assert_eq!(gallon, litre);

    let sum = gallon
        .add_in(&Quantity::new(500.0, VolumeUnit::Millilitre).unwrap(), VolumeUnit::Litre)
        .unwrap();
    assert_relative_eq!(sum.value(), 4.28541, epsilon = 1e-9);

    let ratio = litre.divide(&Quantity::new(1.0, VolumeUnit::Litre).unwrap()).unwrap();
    assert_relative_eq!(ratio, 3.78541, epsilon = 1e-12);
}

#[test]
fn conversion_factor_of_every_unit() {
    assert_relative_eq!(LengthUnit::Yard.conversion_factor().unwrap(), 3.0);
    assert_relative_eq!(WeightUnit::Gram.conversion_factor().unwrap(), 0.001);
    assert_relative_eq!(VolumeUnit::Gallon.conversion_factor().unwrap(), 3.78541);
    for unit in TemperatureUnit::ALL {
        assert_eq!(
            unit.conversion_factor(),
            Err(QuantityError::UnsupportedOperation(UnitFamily::Temperature))
        );
    }
}

#[test]
fn display_is_value_then_unit_name() {
    let q = Quantity::new(1.0, LengthUnit::Feet)
        .unwrap()
        .convert_to(LengthUnit::Inch)
        .unwrap();
    assert_eq!(q.to_string(), "12.0 INCH");
    assert_eq!(
        Quantity::new(-3.5, TemperatureUnit::Celsius).unwrap().to_string(),
        "-3.5 CELSIUS"
    );
}

#[test]
fn runtime_units_from_text() {
    let q = quantity_measurement::parse_quantity("2 yard").unwrap();
    let feet = q.convert_to(Unit::from(LengthUnit::Feet)).unwrap();
    assert_relative_eq!(feet.value(), 6.0);
    assert_eq!(q.family(), UnitFamily::Length);
}
