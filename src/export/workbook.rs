//! Workbook export: the three result tables as named CSV sheets.
//!
//! Sheets are built synchronously into in-memory buffers; writing them
//! anywhere is the caller's concern.

use crate::domain::{Currency, Decimal};
use crate::engine::{InvestorFlowRow, ProjectionRow, ScenarioOutcome};
use crate::export::ExportError;
use crate::format;
use chrono::NaiveDate;

/// A single named sheet holding CSV text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub csv: String,
}

/// The exported workbook: a date-stamped filename stem plus the sheets
/// Projections, Investor_Flows and Scenarios, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workbook {
    pub filename_stem: String,
    pub sheets: Vec<Sheet>,
}

fn finish_sheet(name: &str, writer: csv::Writer<Vec<u8>>) -> Result<Sheet, ExportError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    let csv = String::from_utf8(bytes).map_err(|e| ExportError::Buffer(e.to_string()))?;
    Ok(Sheet {
        name: name.to_string(),
        csv,
    })
}

fn projections_sheet(rows: &[ProjectionRow]) -> Result<Sheet, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Year",
        "Cash Flow Date",
        "Forecast Year",
        "Revenue",
        "Enterprise Value",
        "Equity Value",
        "Discount Factor",
        "Present Value",
    ])?;
    for row in rows {
        writer.write_record([
            row.year.to_string(),
            row.cash_flow_date.clone(),
            row.forecast_year.clone(),
            row.revenue.to_canonical_string(),
            row.enterprise_value.to_canonical_string(),
            row.equity_value.to_canonical_string(),
            row.discount_factor.round_dp(6).to_canonical_string(),
            row.present_value.to_canonical_string(),
        ])?;
    }
    finish_sheet("Projections", writer)
}

fn investor_flows_sheet(rows: &[InvestorFlowRow]) -> Result<Sheet, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Year",
        "Investment",
        "Exit Proceeds",
        "Net Cash Flow",
        "Equity Stake",
    ])?;
    for row in rows {
        writer.write_record([
            row.year.to_string(),
            row.investment.to_canonical_string(),
            row.exit_proceeds.to_canonical_string(),
            row.net_cash_flow.to_canonical_string(),
            row.equity_stake.clone(),
        ])?;
    }
    finish_sheet("Investor_Flows", writer)
}

fn scenarios_sheet(
    currency: Currency,
    outcomes: &[ScenarioOutcome],
) -> Result<Sheet, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Scenario", "IRR", "Multiple", "Investment"])?;
    for outcome in outcomes {
        let multiple = outcome
            .result
            .exit_proceeds
            .checked_div(outcome.result.investment_amount)
            .unwrap_or_else(Decimal::zero);
        writer.write_record([
            outcome.name.to_string(),
            format::percent(outcome.result.irr),
            format::multiple(multiple),
            format::currency(currency, outcome.result.investment_amount),
        ])?;
    }
    finish_sheet("Scenarios", writer)
}

/// Assemble the full workbook. `today` drives the VC_Valuation_YYYYMMDD
/// filename stem.
pub fn build_workbook(
    currency: Currency,
    projections: &[ProjectionRow],
    investor_flows: &[InvestorFlowRow],
    scenarios: &[ScenarioOutcome],
    today: NaiveDate,
) -> Result<Workbook, ExportError> {
    Ok(Workbook {
        filename_stem: format!("VC_Valuation_{}", today.format("%Y%m%d")),
        sheets: vec![
            projections_sheet(projections)?,
            investor_flows_sheet(investor_flows)?,
            scenarios_sheet(currency, scenarios)?,
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValuationInputs;
    use crate::engine::{compute_valuation, investor_flow_table, projection_table, run_scenarios};

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

    fn build() -> Workbook {
        let inputs = base_inputs();
        let result = compute_valuation(&inputs).unwrap();
        let projections = projection_table(2023, &inputs, &result).unwrap();
        let flows = investor_flow_table(2023, &inputs, &result);
        let scenarios = run_scenarios(&inputs).unwrap();
        build_workbook(
            Currency::Usd,
            &projections,
            &flows,
            &scenarios,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_sheet_names_and_order() {
        let workbook = build();
        let names: Vec<&str> = workbook.sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Projections", "Investor_Flows", "Scenarios"]);
    }

    #[test]
    fn test_filename_stem_embeds_date() {
        let workbook = build();
        assert_eq!(workbook.filename_stem, "VC_Valuation_20240315");
    }

    #[test]
    fn test_projections_sheet_shape() {
        let workbook = build();
        let sheet = &workbook.sheets[0];
        let lines: Vec<&str> = sheet.csv.lines().collect();
        assert_eq!(lines.len(), 12); // header + 11 rows
        assert!(lines[0].starts_with("Year,Cash Flow Date,Forecast Year"));
        assert!(lines[1].starts_with("2023,31-Dec-2023,Year 0,0,"));
        // exit row carries the figures
        assert!(lines[8].contains("10000000"));
    }

    #[test]
    fn test_scenarios_sheet_rows() {
        let workbook = build();
        let sheet = &workbook.sheets[2];
        let lines: Vec<&str> = sheet.csv.lines().collect();
        assert_eq!(lines.len(), 4); // header + 3 scenarios
        assert!(lines[1].starts_with("Conservative,"));
        assert!(lines[2].starts_with("Base Case,"));
        assert!(lines[3].starts_with("Optimistic,"));
        assert!(lines[2].contains("25.0%"));
        assert!(lines[2].contains("USD "));
    }

    #[test]
    fn test_workbook_sheets_write_to_disk() {
        // Sheets are plain CSV text a caller can persist directly.
        let workbook = build();
        let dir = tempfile::tempdir().unwrap();
        for sheet in &workbook.sheets {
            let path = dir
                .path()
                .join(format!("{}_{}.csv", workbook.filename_stem, sheet.name));
            std::fs::write(&path, &sheet.csv).unwrap();
            let back = std::fs::read_to_string(&path).unwrap();
            assert_eq!(back, sheet.csv);
        }
    }
}
