//! IRR sensitivity to the discount rate.

use crate::domain::{CashFlowSeries, Decimal, ValuationInputs, ValuationResult};
use crate::engine::{discount, irr, EngineError};
use serde::{Deserialize, Serialize};

/// One sample of the sensitivity curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityPoint {
    pub discount_rate: Decimal,
    pub irr: Decimal,
}

/// Sweep the discount rate over [0.15, 0.35) in 0.01 steps (20 points,
/// ascending) and recompute the entry price and implied IRR at each
/// sample.
///
/// The base case's equity value and exit proceeds are held fixed across
/// the sweep; only the discounting, and therefore the investment
/// amount, varies per rate. This isolates entry-price sensitivity
/// rather than re-deriving the exit outcome per rate.
pub fn sensitivity_sweep(
    inputs: &ValuationInputs,
    base: &ValuationResult,
) -> Result<Vec<SensitivityPoint>, EngineError> {
    let mut points = Vec::with_capacity(20);
    for step in 15u32..35 {
        let rate = Decimal::from_scaled(step as i64, 2);
        let present_value = discount::present_value(base.equity_value, rate, inputs.exit_year)?;
        let investment = present_value * inputs.equity_stake_entry;
        let flows = CashFlowSeries::entry_exit(investment, base.exit_proceeds, inputs.exit_year);
        points.push(SensitivityPoint {
            discount_rate: rate,
            irr: irr::internal_rate_of_return(&flows),
        });
    }
    Ok(points)
}
