use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::{AppState, ValuationRequest};
use crate::domain::Decimal;
use crate::engine;
use crate::error::AppError;
use crate::format;

/// One formatted scenario row, as rendered in the comparison table.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRow {
    pub scenario: String,
    pub irr: String,
    pub multiple: String,
    pub investment: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenariosResponse {
    pub scenarios: Vec<ScenarioRow>,
}

pub async fn post_scenarios(
    State(state): State<AppState>,
    Json(request): Json<ValuationRequest>,
) -> Result<Json<ScenariosResponse>, AppError> {
    let inputs = request.inputs.clamped();
    let outcomes = engine::run_scenarios(&inputs)?;
    let currency = state.currency_or(request.currency);

    let scenarios = outcomes
        .into_iter()
        .map(|outcome| {
            let multiple = outcome
                .result
                .exit_proceeds
                .checked_div(outcome.result.investment_amount)
                .unwrap_or_else(Decimal::zero);
            ScenarioRow {
                scenario: outcome.name.to_string(),
                irr: format::percent(outcome.result.irr),
                multiple: format::multiple(multiple),
                investment: format::currency(currency, outcome.result.investment_amount),
            }
        })
        .collect();

    Ok(Json(ScenariosResponse { scenarios }))
}
