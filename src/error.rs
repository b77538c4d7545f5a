use crate::units::UnitFamily;

/// 물리량 생성/변환/연산 중 발생 가능한 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// NaN 또는 무한대 값
    #[error("값은 유한한 실수여야 합니다.")]
    InvalidValue,
    /// 단위가 없거나 알 수 없는 단위
    #[error("단위가 지정되지 않았거나 알 수 없는 단위입니다.")]
    InvalidUnit,
    /// 연산 대상 피연산자가 없음
    #[error("피연산자가 지정되지 않았습니다.")]
    InvalidOperand,
    /// 서로 다른 단위 계열 간 연산
    #[error("단위 계열이 다릅니다: {expected} 와 {found}")]
    CategoryMismatch {
        expected: UnitFamily,
        found: UnitFamily,
    },
    /// 해당 단위 계열에서 지원하지 않는 연산
    #[error("{0} 단위에서는 지원하지 않는 연산입니다.")]
    UnsupportedOperation(UnitFamily),
    /// 0(허용 오차 이내)으로 나눔
    #[error("0으로 나눌 수 없습니다.")]
    DivisionByZero,
}

/// 값이 유한한지 확인한다.
pub(crate) fn ensure_finite(value: f64) -> Result<f64, QuantityError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(QuantityError::InvalidValue)
    }
}
