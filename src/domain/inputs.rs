//! Valuation input bundle and boundary clamping.

use crate::domain::Decimal;
use serde::{Deserialize, Serialize};

/// Exit year bounds offered by the input boundary.
pub const MIN_EXIT_YEAR: u32 = 1;
pub const MAX_EXIT_YEAR: u32 = 10;

/// Immutable assumption bundle for one valuation run.
///
/// The engine never mutates these; every output is recomputed wholesale
/// from a fresh bundle. Construct via [`ValuationInputs::clamped`] at the
/// input boundary so that out-of-range values are pulled into the ranges
/// the model is defined over rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationInputs {
    /// Forecast year of exit, counted from the valuation date (year 0).
    pub exit_year: u32,
    /// Revenue in the exit year.
    pub exit_revenue: Decimal,
    /// EV/Revenue multiple applied at exit.
    pub ev_revenue_multiple: Decimal,
    /// Financial debt outstanding in the exit year.
    pub financial_debt: Decimal,
    /// Cash balance in the exit year.
    pub cash_balance: Decimal,
    /// Required annual return, as a fraction (0.25 = 25%).
    pub discount_rate: Decimal,
    /// Investor equity stake at entry, as a fraction of the company.
    pub equity_stake_entry: Decimal,
    /// Proportional stake reduction between entry and exit.
    pub dilution_effect: Decimal,
}

impl ValuationInputs {
    /// Stake held at exit: entry stake reduced by the dilution effect.
    pub fn equity_stake_exit(&self) -> Decimal {
        self.equity_stake_entry * (Decimal::one() - self.dilution_effect)
    }

    /// Pull every field into the range the input boundary offers:
    /// exit year [1, 10], revenue/debt/cash >= 0, multiple >= 0.1,
    /// discount rate [0.05, 0.50], entry stake [0.01, 1.00],
    /// dilution [0.00, 0.50].
    pub fn clamped(self) -> Self {
        let zero = Decimal::zero();
        let big = Decimal::from_int(i64::MAX);
        ValuationInputs {
            exit_year: self.exit_year.clamp(MIN_EXIT_YEAR, MAX_EXIT_YEAR),
            exit_revenue: self.exit_revenue.clamp(zero, big),
            ev_revenue_multiple: self.ev_revenue_multiple.clamp(Decimal::from_scaled(1, 1), big),
            financial_debt: self.financial_debt.clamp(zero, big),
            cash_balance: self.cash_balance.clamp(zero, big),
            discount_rate: self
                .discount_rate
                .clamp(Decimal::from_scaled(5, 2), Decimal::from_scaled(50, 2)),
            equity_stake_entry: self
                .equity_stake_entry
                .clamp(Decimal::from_scaled(1, 2), Decimal::one()),
            dilution_effect: self.dilution_effect.clamp(zero, Decimal::from_scaled(50, 2)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn base_inputs() -> ValuationInputs {
        ValuationInputs {
            exit_year: 7,
            exit_revenue: Decimal::from_int(10_000_000),
            ev_revenue_multiple: Decimal::from_int(10),
            financial_debt: Decimal::zero(),
            cash_balance: Decimal::zero(),
            discount_rate: Decimal::from_scaled(25, 2),
            equity_stake_entry: Decimal::from_scaled(10, 2),
            dilution_effect: Decimal::zero(),
        }
    }

    #[test]
    fn test_equity_stake_exit_no_dilution() {
        let inputs = base_inputs();
        assert_eq!(inputs.equity_stake_exit(), inputs.equity_stake_entry);
    }

    #[test]
    fn test_equity_stake_exit_with_dilution() {
        let mut inputs = base_inputs();
        inputs.dilution_effect = Decimal::from_scaled(20, 2);
        assert_eq!(
            inputs.equity_stake_exit(),
            Decimal::from_str("0.08").unwrap()
        );
        assert!(inputs.equity_stake_exit() < inputs.equity_stake_entry);
    }

    #[test]
    fn test_clamped_pulls_fields_into_range() {
        let mut inputs = base_inputs();
        inputs.exit_year = 25;
        inputs.discount_rate = Decimal::from_str("0.99").unwrap();
        inputs.equity_stake_entry = Decimal::zero();
        inputs.dilution_effect = Decimal::from_str("0.9").unwrap();
        inputs.exit_revenue = Decimal::from_int(-5);

        let clamped = inputs.clamped();
        assert_eq!(clamped.exit_year, 10);
        assert_eq!(clamped.discount_rate, Decimal::from_scaled(50, 2));
        assert_eq!(clamped.equity_stake_entry, Decimal::from_scaled(1, 2));
        assert_eq!(clamped.dilution_effect, Decimal::from_scaled(50, 2));
        assert_eq!(clamped.exit_revenue, Decimal::zero());
    }

    #[test]
    fn test_clamped_leaves_in_range_values_alone() {
        let inputs = base_inputs();
        assert_eq!(inputs.clone().clamped(), inputs);
    }

    #[test]
    fn test_inputs_json_roundtrip() {
        let inputs = base_inputs();
        let json = serde_json::to_string(&inputs).unwrap();
        assert!(json.contains("exitYear"));
        assert!(json.contains("evRevenueMultiple"));
        let back: ValuationInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(back, inputs);
    }
}
