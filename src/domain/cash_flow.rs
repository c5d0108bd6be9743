//! Investor cash-flow series.

use crate::domain::Decimal;
use serde::{Deserialize, Serialize};

/// A single dated investor cash flow. Negative = outflow (investment),
/// positive = inflow (proceeds). `year` is an offset from the valuation
/// date, not a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    pub year: u32,
    pub amount: Decimal,
}

/// Ordered cash-flow sequence. The base model carries exactly two
/// non-zero flows: the entry outflow at year 0 and the exit inflow at
/// the exit year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowSeries(Vec<CashFlow>);

impl CashFlowSeries {
    pub fn new(flows: Vec<CashFlow>) -> Self {
        CashFlowSeries(flows)
    }

    /// The canonical two-flow series: `investment` out at year 0 and
    /// `proceeds` in at `exit_year`. The investment is given as a
    /// positive magnitude and stored negated.
    pub fn entry_exit(investment: Decimal, proceeds: Decimal, exit_year: u32) -> Self {
        CashFlowSeries(vec![
            CashFlow {
                year: 0,
                amount: -investment,
            },
            CashFlow {
                year: exit_year,
                amount: proceeds,
            },
        ])
    }

    pub fn flows(&self) -> &[CashFlow] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Years spanned between the first and last flow. Zero for empty or
    /// single-flow series.
    pub fn span_years(&self) -> u32 {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => last.year.saturating_sub(first.year),
            _ => 0,
        }
    }
}
