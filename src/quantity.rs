//! 값과 단위를 묶는 제네릭 물리량 컨테이너.
//!
//! 모든 변환은 계열의 기준 단위를 거치고, 덧셈/뺄셈/나눗셈은 하나의 내부 헬퍼
//! [`Quantity::perform_base_arithmetic`]를 통과한다. 검증 순서(피연산자 →
//! 계열 → 연산 지원 여부 → 0 나눗셈)는 세 연산 모두 동일해야 한다.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, QuantityError};
use crate::units::{Measurable, UnitFamily};

/// 동등 비교와 해시에 쓰는 절대 허용 오차.
pub const EPSILON: f64 = 0.0001;

/// 기준 단위 값에 적용할 산술 연산.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOperation {
    Add,
    Subtract,
    Divide,
}

impl ArithmeticOperation {
    fn compute(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            ArithmeticOperation::Add => lhs + rhs,
            ArithmeticOperation::Subtract => lhs - rhs,
            ArithmeticOperation::Divide => lhs / rhs,
        }
    }
}

/// [`Quantity::apply`]의 결과. 나눗셈만 단위 없는 비율을 돌려준다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArithmeticOutcome<U: Measurable> {
    Quantity(Quantity<U>),
    Scalar(f64),
}

/// 불변 물리량. `value`는 항상 유한하다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawQuantity<U>")]
#[serde(bound(deserialize = "U: Deserialize<'de>"))]
pub struct Quantity<U: Measurable> {
    value: f64,
    unit: U,
}

#[derive(Deserialize)]
struct RawQuantity<U> {
    value: f64,
    unit: U,
}

impl<U: Measurable> TryFrom<RawQuantity<U>> for Quantity<U> {
    type Error = QuantityError;

    fn try_from(raw: RawQuantity<U>) -> Result<Self, Self::Error> {
        Quantity::new(raw.value, raw.unit)
    }
}

impl<U: Measurable> Quantity<U> {
    pub fn new(value: f64, unit: U) -> Result<Self, QuantityError> {
        let value = ensure_finite(value)?;
        Ok(Self { value, unit })
    }

    /// 단위가 없을 수도 있는 입력에서 생성한다.
    pub fn from_parts(value: f64, unit: Option<U>) -> Result<Self, QuantityError> {
        let value = ensure_finite(value)?;
        let unit = unit.ok_or(QuantityError::InvalidUnit)?;
        Ok(Self { value, unit })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    pub fn family(&self) -> UnitFamily {
        self.unit.family()
    }

    /// 기준 단위로 환산한 값.
    pub fn to_base(&self) -> f64 {
        self.unit.to_base(self.value)
    }

    /// 같은 계열의 다른 단위로 변환한다.
    pub fn convert_to(&self, target: U) -> Result<Self, QuantityError> {
        self.ensure_same_family(target.family())?;
        let base = self.unit.convert_to_base_unit(self.value)?;
        Quantity::new(target.convert_from_base_unit(base)?, target)
    }

    /// 결과 단위는 `self`의 단위를 따른다.
    pub fn add(&self, other: &Self) -> Result<Self, QuantityError> {
        self.add_in(other, self.unit)
    }

    pub fn add_in(&self, other: &Self, target: U) -> Result<Self, QuantityError> {
        self.combine(Some(other), Some(target), ArithmeticOperation::Add)
    }

    /// 결과는 소수 둘째 자리에서 반올림된다.
    pub fn subtract(&self, other: &Self) -> Result<Self, QuantityError> {
        self.subtract_in(other, self.unit)
    }

    pub fn subtract_in(&self, other: &Self, target: U) -> Result<Self, QuantityError> {
        self.combine(Some(other), Some(target), ArithmeticOperation::Subtract)
    }

    /// 기준 단위 값끼리의 비율을 돌려준다.
    pub fn divide(&self, other: &Self) -> Result<f64, QuantityError> {
        self.perform_base_arithmetic(Some(other), ArithmeticOperation::Divide)
    }

    /// 피연산자와 결과 단위가 없을 수도 있는 호출자를 위한 진입점.
    ///
    /// 덧셈/뺄셈은 `target`이 반드시 있어야 하며, 나눗셈은 `target`을 무시한다.
    pub fn apply(
        &self,
        operation: ArithmeticOperation,
        other: Option<&Self>,
        target: Option<U>,
    ) -> Result<ArithmeticOutcome<U>, QuantityError> {
        match operation {
            ArithmeticOperation::Divide => self
                .perform_base_arithmetic(other, operation)
                .map(ArithmeticOutcome::Scalar),
            ArithmeticOperation::Add | ArithmeticOperation::Subtract => self
                .combine(other, target, operation)
                .map(ArithmeticOutcome::Quantity),
        }
    }

    fn combine(
        &self,
        other: Option<&Self>,
        target: Option<U>,
        operation: ArithmeticOperation,
    ) -> Result<Self, QuantityError> {
        if other.is_none() {
            return Err(QuantityError::InvalidOperand);
        }
        let target = target.ok_or(QuantityError::InvalidUnit)?;
        let base = self.perform_base_arithmetic(other, operation)?;
        self.ensure_same_family(target.family())?;

        let converted = target.convert_from_base_unit(base)?;
        let value = match operation {
            ArithmeticOperation::Subtract => round_to_two_decimals(converted),
            ArithmeticOperation::Add | ArithmeticOperation::Divide => converted,
        };
        Quantity::new(value, target)
    }

    /// 모든 산술 연산이 지나는 유일한 검증/계산 지점.
    ///
    /// 덧셈/뺄셈은 기준 단위 결과를, 나눗셈은 최종 비율을 돌려준다.
    fn perform_base_arithmetic(
        &self,
        other: Option<&Self>,
        operation: ArithmeticOperation,
    ) -> Result<f64, QuantityError> {
        let other = other.ok_or(QuantityError::InvalidOperand)?;
        self.ensure_same_family(other.family())?;
        if !self.unit.supports_arithmetic() {
            return Err(QuantityError::UnsupportedOperation(self.family()));
        }

        let lhs = self.unit.convert_to_base_unit(self.value)?;
        let rhs = other.unit.convert_to_base_unit(other.value)?;

        if operation == ArithmeticOperation::Divide && rhs.abs() < EPSILON {
            return Err(QuantityError::DivisionByZero);
        }

        ensure_finite(operation.compute(lhs, rhs))
    }

    fn ensure_same_family(&self, found: UnitFamily) -> Result<(), QuantityError> {
        let expected = self.family();
        if expected == found {
            Ok(())
        } else {
            Err(QuantityError::CategoryMismatch { expected, found })
        }
    }

    fn hash_bucket(&self) -> i64 {
        // EPSILON 격자에 맞춰 반올림한다.
        (self.to_base() / EPSILON).round() as i64
    }
}

fn round_to_two_decimals(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        // 이 크기에서는 소수부가 없다.
        value
    }
}

impl<U: Measurable, V: Measurable> PartialEq<Quantity<V>> for Quantity<U> {
    fn eq(&self, other: &Quantity<V>) -> bool {
        if self.family() != other.family() {
            return false;
        }
        // 기준 단위 환산이 넘칠 수 있으므로 같은 단위/같은 값은 먼저 판정한다.
        if self.unit.unit_name() == other.unit.unit_name() && self.value == other.value {
            return true;
        }
        (self.to_base() - other.to_base()).abs() < EPSILON
    }
}

impl<U: Measurable> Eq for Quantity<U> {}

impl<U: Measurable> Hash for Quantity<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_bucket().hash(state);
        self.family().hash(state);
    }
}

impl<U: Measurable> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} {}", p, self.value, self.unit.unit_name()),
            None if self.value.fract() == 0.0 && self.value.abs() < 1e16 => {
                write!(f, "{:.1} {}", self.value, self.unit.unit_name())
            }
            None => write!(f, "{} {}", self.value, self.unit.unit_name()),
        }
    }
}
