//! Present-value discounting.

use crate::domain::Decimal;
use crate::engine::EngineError;

/// Discount factor 1 / (1 + rate)^periods.
///
/// Defined for periods = 0 (returns 1). Rates at or below -1 make the
/// base non-positive and are a caller error; they surface as
/// [`EngineError::NonPositiveDiscountBase`] rather than a garbage value.
pub fn discount_factor(discount_rate: Decimal, periods: u32) -> Result<Decimal, EngineError> {
    let base = Decimal::one() + discount_rate;
    if !base.is_positive() {
        return Err(EngineError::NonPositiveDiscountBase(discount_rate));
    }
    let compounded = base
        .checked_powi(periods)
        .ok_or(EngineError::Overflow("discount factor"))?;
    Decimal::one()
        .checked_div(compounded)
        .ok_or(EngineError::Overflow("discount factor"))
}

/// Present value of `future_value` received `periods` years out:
/// future_value / (1 + rate)^periods.
pub fn present_value(
    future_value: Decimal,
    discount_rate: Decimal,
    periods: u32,
) -> Result<Decimal, EngineError> {
    let base = Decimal::one() + discount_rate;
    if !base.is_positive() {
        return Err(EngineError::NonPositiveDiscountBase(discount_rate));
    }
    let compounded = base
        .checked_powi(periods)
        .ok_or(EngineError::Overflow("present value"))?;
    future_value
        .checked_div(compounded)
        .ok_or(EngineError::Overflow("present value"))
}
