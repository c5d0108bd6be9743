//! Base-case valuation orchestrator.

use crate::domain::{CashFlowSeries, Decimal, ValuationInputs, ValuationResult};
use crate::engine::{discount, irr, EngineError};

/// Run the full valuation bridge for one input bundle:
/// revenue -> enterprise value -> equity value -> present value ->
/// investor cash flows -> IRR and cash-on-cash multiple.
///
/// A zero investment amount yields a cash multiple of 0 by explicit
/// guard, never a division error. Arithmetic failure anywhere else
/// fails the whole run; no partial result is returned.
pub fn compute_valuation(inputs: &ValuationInputs) -> Result<ValuationResult, EngineError> {
    let enterprise_value = inputs
        .exit_revenue
        .checked_mul(inputs.ev_revenue_multiple)
        .ok_or(EngineError::Overflow("enterprise value"))?;
    let equity_value = enterprise_value
        .checked_sub(inputs.financial_debt)
        .and_then(|v| v.checked_add(inputs.cash_balance))
        .ok_or(EngineError::Overflow("equity value"))?;
    let present_value =
        discount::present_value(equity_value, inputs.discount_rate, inputs.exit_year)?;

    let investment_amount = present_value
        .checked_mul(inputs.equity_stake_entry)
        .ok_or(EngineError::Overflow("investment amount"))?;
    let exit_proceeds = equity_value
        .checked_mul(inputs.equity_stake_exit())
        .ok_or(EngineError::Overflow("exit proceeds"))?;

    let cash_flows = CashFlowSeries::entry_exit(investment_amount, exit_proceeds, inputs.exit_year);
    let irr = irr::internal_rate_of_return(&cash_flows);

    let cash_multiple = if investment_amount.is_positive() {
        exit_proceeds
            .checked_div(investment_amount)
            .ok_or(EngineError::Overflow("cash multiple"))?
    } else {
        Decimal::zero()
    };

    Ok(ValuationResult {
        enterprise_value,
        equity_value,
        present_value,
        investment_amount,
        exit_proceeds,
        irr,
        cash_multiple,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::irr::fallback_irr;
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
    fn test_reference_case() {
        // 10M revenue at 10x, no debt or cash, 25% over 7 years, 10% stake
        let result = compute_valuation(&base_inputs()).unwrap();

        assert_eq!(result.enterprise_value, Decimal::from_int(100_000_000));
        assert_eq!(result.equity_value, Decimal::from_int(100_000_000));

        let expected_pv = Decimal::from_int(100_000_000)
            / Decimal::from_str("1.25").unwrap().checked_powi(7).unwrap();
        assert_eq!(result.present_value.round_dp(2), expected_pv.round_dp(2));
        assert_eq!(
            result.investment_amount.round_dp(2),
            (expected_pv * Decimal::from_scaled(10, 2)).round_dp(2)
        );
        assert_eq!(result.exit_proceeds, Decimal::from_int(10_000_000));

        // proceeds/investment = 1.25^7, annualized back over 7 years = 25%
        assert_eq!(result.irr.round_dp(4), Decimal::from_scaled(25, 2));
        assert_eq!(
            result.cash_multiple.round_dp(4),
            Decimal::from_str("1.25").unwrap().checked_powi(7).unwrap().round_dp(4)
        );
    }

    #[test]
    fn test_debt_and_cash_bridge() {
        let mut inputs = base_inputs();
        inputs.financial_debt = Decimal::from_int(20_000_000);
        inputs.cash_balance = Decimal::from_int(5_000_000);

        let result = compute_valuation(&inputs).unwrap();
        assert_eq!(result.enterprise_value, Decimal::from_int(100_000_000));
        assert_eq!(result.equity_value, Decimal::from_int(85_000_000));
    }

    #[test]
    fn test_dilution_shrinks_proceeds_only() {
        let mut inputs = base_inputs();
        inputs.dilution_effect = Decimal::from_scaled(20, 2);

        let diluted = compute_valuation(&inputs).unwrap();
        let undiluted = compute_valuation(&base_inputs()).unwrap();

        assert_eq!(diluted.investment_amount, undiluted.investment_amount);
        assert_eq!(
            diluted.exit_proceeds,
            undiluted.exit_proceeds * Decimal::from_scaled(80, 2)
        );
    }

    #[test]
    fn test_zero_revenue_degenerates_to_defaults() {
        let mut inputs = base_inputs();
        inputs.exit_revenue = Decimal::zero();

        let result = compute_valuation(&inputs).unwrap();
        assert_eq!(result.investment_amount, Decimal::zero());
        assert_eq!(result.cash_multiple, Decimal::zero());
        assert_eq!(result.irr, fallback_irr());
    }

    #[test]
    fn test_overflow_surfaces_as_error_not_panic() {
        // Revenue and multiple each pass boundary clamping on their own;
        // the product exceeds what Decimal can hold. The run must fail
        // whole with a typed error.
        let mut inputs = base_inputs();
        inputs.exit_revenue = Decimal::from_int(9_000_000_000_000_000_000);
        inputs.ev_revenue_multiple = Decimal::from_int(90_000_000_000);

        let err = compute_valuation(&inputs).unwrap_err();
        assert!(matches!(err, EngineError::Overflow(_)));
    }

    #[test]
    fn test_exit_year_one() {
        let mut inputs = base_inputs();
        inputs.exit_year = 1;

        let result = compute_valuation(&inputs).unwrap();
        // PV = 100M / 1.25, investment = PV * 10%, proceeds = 10M
        // IRR over one year = proceeds/investment - 1 = 0.25
        assert_eq!(result.irr.round_dp(6), Decimal::from_scaled(25, 2));
    }
}
