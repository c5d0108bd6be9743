//! Conservative / base / optimistic scenario set.

use crate::domain::{Decimal, ScenarioName, ValuationInputs, ValuationResult};
use crate::engine::{valuation, EngineError};
use serde::{Deserialize, Serialize};

/// One scenario's fully recomputed valuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioOutcome {
    pub name: ScenarioName,
    pub result: ValuationResult,
}

/// Perturbation applied to the base inputs for one scenario. Only the
/// multiple and revenue move; debt, cash, discount rate, stake and
/// dilution are held constant across scenarios.
fn perturb(inputs: &ValuationInputs, name: ScenarioName) -> ValuationInputs {
    let (multiple_factor, revenue_factor) = match name {
        ScenarioName::Conservative => (Decimal::from_scaled(7, 1), Decimal::from_scaled(8, 1)),
        ScenarioName::BaseCase => (Decimal::one(), Decimal::one()),
        ScenarioName::Optimistic => (Decimal::from_scaled(13, 1), Decimal::from_scaled(12, 1)),
    };
    ValuationInputs {
        ev_revenue_multiple: inputs.ev_revenue_multiple * multiple_factor,
        exit_revenue: inputs.exit_revenue * revenue_factor,
        ..inputs.clone()
    }
}

/// Run all three scenarios through the full valuation, always in the
/// fixed order Conservative, Base Case, Optimistic.
pub fn run_scenarios(inputs: &ValuationInputs) -> Result<Vec<ScenarioOutcome>, EngineError> {
    ScenarioName::ALL
        .iter()
        .map(|&name| {
            let result = valuation::compute_valuation(&perturb(inputs, name))?;
            Ok(ScenarioOutcome { name, result })
        })
        .collect()
}
