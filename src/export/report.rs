//! Markdown report export: base-case key metrics plus the assumptions
//! behind them, date-stamped for download.

use crate::domain::{Currency, ValuationInputs, ValuationResult};
use crate::format;
use chrono::NaiveDate;

/// The rendered report and the filename it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub filename: String,
    pub markdown: String,
}

/// Render the base-case report. `valuation_date` is the as-of date
/// shown in the header; `today` drives the VC_Report_YYYYMMDD filename.
pub fn build_report(
    currency: Currency,
    inputs: &ValuationInputs,
    result: &ValuationResult,
    valuation_date: NaiveDate,
    today: NaiveDate,
) -> Report {
    let markdown = format!(
        "# VC Valuation Report\n\
         \n\
         **Valuation Date:** {valuation_date}\n\
         **Exit Year:** Year {exit_year}\n\
         **Currency:** {currency}\n\
         \n\
         ## Key Metrics\n\
         - **Company Equity Value:** {equity_value}\n\
         - **Present Value:** {present_value}\n\
         - **Investor IRR:** {irr}\n\
         - **Cash Multiple:** {cash_multiple}\n\
         - **Investment Required:** {investment}\n\
         \n\
         ## Assumptions\n\
         - **Exit Revenue:** {exit_revenue}\n\
         - **EV/Revenue Multiple:** {ev_multiple}\n\
         - **Discount Rate:** {discount_rate}\n\
         - **Equity Stake:** {equity_stake}\n",
        valuation_date = valuation_date,
        exit_year = inputs.exit_year,
        currency = currency,
        equity_value = format::currency(currency, result.equity_value),
        present_value = format::currency(currency, result.present_value),
        irr = format::percent(result.irr),
        cash_multiple = format::multiple(result.cash_multiple),
        investment = format::currency(currency, result.investment_amount),
        exit_revenue = format::currency(currency, inputs.exit_revenue),
        ev_multiple = format::multiple(inputs.ev_revenue_multiple),
        discount_rate = format::percent(inputs.discount_rate),
        equity_stake = format::percent(inputs.equity_stake_entry),
    );

    Report {
        filename: format!("VC_Report_{}.md", today.format("%Y%m%d")),
        markdown,
    }
}
