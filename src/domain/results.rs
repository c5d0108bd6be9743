//! Derived valuation outputs.

use crate::domain::Decimal;
use serde::{Deserialize, Serialize};

/// Full output of one valuation run. Every field is derived from the
/// input bundle; nothing here is independently mutable and nothing
/// persists across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    /// Exit revenue x EV/Revenue multiple.
    pub enterprise_value: Decimal,
    /// Enterprise value less debt plus cash.
    pub equity_value: Decimal,
    /// Equity value discounted back to the valuation date.
    pub present_value: Decimal,
    /// Present value x entry stake: the cheque written today.
    pub investment_amount: Decimal,
    /// Equity value x exit stake: what the investor receives at exit.
    pub exit_proceeds: Decimal,
    /// Annualized return implied by the investor cash flows.
    pub irr: Decimal,
    /// Exit proceeds / investment amount; 0 when the investment is 0.
    pub cash_multiple: Decimal,
}

/// Named scenario perturbations, in their fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioName {
    Conservative,
    BaseCase,
    Optimistic,
}

impl ScenarioName {
    /// All scenarios, in the order they are always reported.
    pub const ALL: [ScenarioName; 3] = [
        ScenarioName::Conservative,
        ScenarioName::BaseCase,
        ScenarioName::Optimistic,
    ];
}

impl std::fmt::Display for ScenarioName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioName::Conservative => write!(f, "Conservative"),
            ScenarioName::BaseCase => write!(f, "Base Case"),
            ScenarioName::Optimistic => write!(f, "Optimistic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_order() {
        assert_eq!(ScenarioName::ALL[0], ScenarioName::Conservative);
        assert_eq!(ScenarioName::ALL[1], ScenarioName::BaseCase);
        assert_eq!(ScenarioName::ALL[2], ScenarioName::Optimistic);
    }

    #[test]
    fn test_scenario_display() {
        assert_eq!(ScenarioName::BaseCase.to_string(), "Base Case");
        assert_eq!(ScenarioName::Conservative.to_string(), "Conservative");
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = ValuationResult {
            enterprise_value: Decimal::from_int(100),
            equity_value: Decimal::from_int(100),
            present_value: Decimal::from_int(50),
            investment_amount: Decimal::from_int(5),
            exit_proceeds: Decimal::from_int(10),
            irr: Decimal::from_scaled(25, 2),
            cash_multiple: Decimal::from_int(2),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("enterpriseValue").is_some());
        assert!(json.get("cashMultiple").is_some());
    }
}
