//! Internal rate of return.
//!
//! Two-tier policy: the canonical two-flow series takes a closed-form
//! path, everything else goes through a best-effort NPV root solve, and
//! every failure lands on the named fallback rate. The fallback is a
//! deliberate "never crash the dashboard" default that downstream
//! displays rely on being deterministic for degenerate inputs.

use crate::domain::{CashFlowSeries, Decimal};

/// Fixed fallback rate (25%) returned whenever the IRR cannot be
/// derived from the flows.
pub fn fallback_irr() -> Decimal {
    Decimal::from_scaled(25, 2)
}

/// Annualized rate of return implied by a cash-flow sequence.
///
/// A two-flow series with a strictly positive investment magnitude and
/// strictly positive exit value is solved in closed form:
/// (exit / investment)^(1 / years) - 1, where years is the span between
/// the two flows. Any other shape is handed to a bisection solve of the
/// NPV polynomial. Neither path ever errors: degenerate flows, a
/// rootless polynomial, or arithmetic overflow all return
/// [`fallback_irr`].
pub fn internal_rate_of_return(series: &CashFlowSeries) -> Decimal {
    if series.len() == 2 {
        let investment = series.flows()[0].amount.abs();
        let exit_value = series.flows()[1].amount;
        if investment.is_positive() && exit_value.is_positive() {
            return closed_form_two_flow(investment, exit_value, series.span_years())
                .unwrap_or_else(fallback_irr);
        }
    }
    solve_npv_root(series).unwrap_or_else(fallback_irr)
}

/// (exit / investment)^(1 / years) - 1. None when years is 0 or the
/// power cannot be taken.
fn closed_form_two_flow(investment: Decimal, exit_value: Decimal, years: u32) -> Option<Decimal> {
    if years == 0 {
        return None;
    }
    let ratio = exit_value.checked_div(investment)?;
    let exponent = Decimal::one().checked_div(Decimal::from_int(years as i64))?;
    let grown = ratio.checked_powd(exponent)?;
    Some(grown - Decimal::one())
}

/// Net present value of the series at `rate`. None on overflow or a
/// non-positive discount base.
fn npv(series: &CashFlowSeries, rate: Decimal) -> Option<Decimal> {
    let base = Decimal::one() + rate;
    if !base.is_positive() {
        return None;
    }
    let mut total = Decimal::zero();
    for flow in series.flows() {
        let compounded = base.checked_powi(flow.year)?;
        total = total + flow.amount.checked_div(compounded)?;
    }
    Some(total)
}

/// Bisection on the NPV polynomial over rates (-0.99, 10.00). None when
/// the series has fewer than two flows or the NPV does not change sign
/// over the bracket.
fn solve_npv_root(series: &CashFlowSeries) -> Option<Decimal> {
    if series.len() < 2 {
        return None;
    }

    let mut lo = Decimal::from_scaled(-99, 2);
    let mut hi = Decimal::from_int(10);
    let mut f_lo = npv(series, lo)?;
    let f_hi = npv(series, hi)?;

    // Require a strict sign change over the bracket. This also sends an
    // identically-zero polynomial (all-zero flows) to the fallback.
    let bracketed = (f_lo.is_positive() && f_hi.is_negative())
        || (f_lo.is_negative() && f_hi.is_positive());
    if !bracketed {
        return None;
    }

    let two = Decimal::from_int(2);
    let tolerance = Decimal::from_scaled(1, 9);
    let mut mid = lo;
    for _ in 0..128 {
        mid = (lo + hi) / two;
        let f_mid = npv(series, mid)?;
        if f_mid.is_zero() || (hi - lo).abs() < tolerance {
            return Some(mid);
        }
        if f_mid.is_positive() == f_lo.is_positive() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    Some(mid)
}
