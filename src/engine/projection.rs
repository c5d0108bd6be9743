//! Year-indexed projection and investor-flow tables.
//!
//! Both tables are deliberately sparse: every figure sits on the single
//! row it belongs to (entry or exit), with zero-filled placeholders
//! elsewhere. Downstream consumers render them as-is.

use crate::domain::{Decimal, ValuationInputs, ValuationResult};
use crate::engine::{discount, EngineError};
use crate::format;
use serde::{Deserialize, Serialize};

/// One row of the projection table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRow {
    /// Calendar year (anchor + offset).
    pub year: i32,
    /// Assumed cash-flow date, 31-Dec of the calendar year.
    pub cash_flow_date: String,
    /// Forecast label, "Year N" with N the offset from the anchor.
    pub forecast_year: String,
    pub revenue: Decimal,
    pub enterprise_value: Decimal,
    pub equity_value: Decimal,
    /// 1 / (1 + discount rate)^offset; present on every row.
    pub discount_factor: Decimal,
    pub present_value: Decimal,
}

/// One row of the investor cash-flow table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestorFlowRow {
    pub year: i32,
    /// Entry outflow; non-zero only on the anchor row.
    pub investment: Decimal,
    /// Exit inflow; non-zero only on the exit row.
    pub exit_proceeds: Decimal,
    pub net_cash_flow: Decimal,
    /// Entry stake (formatted percent) through the exit year, blank after.
    pub equity_stake: String,
}

/// Number of table rows: the exit year plus a three-year tail, counted
/// from offset 0.
fn row_count(exit_year: u32) -> u32 {
    exit_year + 4
}

/// Build the projection table from a fixed anchor year. Only the row
/// whose offset equals the exit year carries revenue/EV/equity/PV; the
/// discount factor is populated on every row.
pub fn projection_table(
    anchor_year: i32,
    inputs: &ValuationInputs,
    result: &ValuationResult,
) -> Result<Vec<ProjectionRow>, EngineError> {
    let mut rows = Vec::with_capacity(row_count(inputs.exit_year) as usize);
    for offset in 0..row_count(inputs.exit_year) {
        let year = anchor_year + offset as i32;
        let is_exit = offset == inputs.exit_year;
        rows.push(ProjectionRow {
            year,
            cash_flow_date: format!("31-Dec-{}", year),
            forecast_year: format!("Year {}", offset),
            revenue: if is_exit { inputs.exit_revenue } else { Decimal::zero() },
            enterprise_value: if is_exit { result.enterprise_value } else { Decimal::zero() },
            equity_value: if is_exit { result.equity_value } else { Decimal::zero() },
            discount_factor: discount::discount_factor(inputs.discount_rate, offset)?,
            present_value: if is_exit { result.present_value } else { Decimal::zero() },
        });
    }
    Ok(rows)
}

/// Build the investor cash-flow table over the same year range: the
/// investment leaves at the anchor year, the proceeds arrive at the
/// exit row, and the entry stake is shown through the exit year.
pub fn investor_flow_table(
    anchor_year: i32,
    inputs: &ValuationInputs,
    result: &ValuationResult,
) -> Vec<InvestorFlowRow> {
    let mut rows = Vec::with_capacity(row_count(inputs.exit_year) as usize);
    for offset in 0..row_count(inputs.exit_year) {
        let investment = if offset == 0 {
            -result.investment_amount
        } else {
            Decimal::zero()
        };
        let exit_proceeds = if offset == inputs.exit_year {
            result.exit_proceeds
        } else {
            Decimal::zero()
        };
        rows.push(InvestorFlowRow {
            year: anchor_year + offset as i32,
            investment,
            exit_proceeds,
            net_cash_flow: investment + exit_proceeds,
            equity_stake: if offset <= inputs.exit_year {
                format::percent(inputs.equity_stake_entry)
            } else {
                String::new()
            },
        });
    }
    rows
}
