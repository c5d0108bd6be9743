use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::{AppState, ValuationRequest};
use crate::domain::{ValuationInputs, ValuationResult};
use crate::engine;
use crate::error::AppError;
use crate::format;

/// Formatted metric card strings for direct display.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricStrings {
    pub equity_value: String,
    pub present_value: String,
    pub irr: String,
    pub cash_multiple: String,
    pub investment_amount: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResponse {
    /// The inputs the engine actually ran, after boundary clamping.
    pub inputs: ValuationInputs,
    pub result: ValuationResult,
    pub metrics: MetricStrings,
}

pub async fn post_valuation(
    State(state): State<AppState>,
    Json(request): Json<ValuationRequest>,
) -> Result<Json<ValuationResponse>, AppError> {
    let inputs = request.inputs.clamped();
    let result = engine::compute_valuation(&inputs)?;
    tracing::debug!(
        exit_year = inputs.exit_year,
        equity_value = %result.equity_value,
        "computed base-case valuation"
    );

    let currency = state.currency_or(request.currency);
    let metrics = MetricStrings {
        equity_value: format::currency(currency, result.equity_value),
        present_value: format::currency(currency, result.present_value),
        irr: format::percent(result.irr),
        cash_multiple: format::multiple(result.cash_multiple),
        investment_amount: format::currency(currency, result.investment_amount),
    };

    Ok(Json(ValuationResponse {
        inputs,
        result,
        metrics,
    }))
}
