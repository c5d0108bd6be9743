use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::ValuationInputs;
use crate::engine::{self, SensitivityPoint};
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensitivityResponse {
    pub points: Vec<SensitivityPoint>,
}

pub async fn post_sensitivity(
    Json(inputs): Json<ValuationInputs>,
) -> Result<Json<SensitivityResponse>, AppError> {
    let inputs = inputs.clamped();
    let base = engine::compute_valuation(&inputs)?;
    let points = engine::sensitivity_sweep(&inputs, &base)?;
    Ok(Json(SensitivityResponse { points }))
}
