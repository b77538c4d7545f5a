//! 길이/무게/체적/온도를 값과 단위의 쌍으로 다루는 물리량 라이브러리.
//!
//! 핵심은 제네릭 [`Quantity`]이며, 단위 계열은 [`Measurable`] 계약만 구현하면
//! 같은 변환/비교/산술 로직을 그대로 재사용한다. CLI는 이 라이브러리를 호출하는
//! 얇은 외부 계층이다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod error;
pub mod i18n;
pub mod quantity;
pub mod ui_cli;
pub mod units;

pub use app::AppError;
pub use conversion::{convert, parse_quantity, parse_value};
pub use error::QuantityError;
pub use quantity::{ArithmeticOperation, ArithmeticOutcome, Quantity, EPSILON};
pub use units::{
    LengthUnit, Measurable, TemperatureUnit, Unit, UnitFamily, VolumeUnit, WeightUnit,
};
