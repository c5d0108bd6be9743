use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::domain::ValuationInputs;
use crate::engine::{self, InvestorFlowRow, ProjectionRow};
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionsResponse {
    pub projections: Vec<ProjectionRow>,
    pub investor_flows: Vec<InvestorFlowRow>,
}

pub async fn post_projections(
    State(state): State<AppState>,
    Json(inputs): Json<ValuationInputs>,
) -> Result<Json<ProjectionsResponse>, AppError> {
    let inputs = inputs.clamped();
    let result = engine::compute_valuation(&inputs)?;
    let anchor = state.config.anchor_year;

    Ok(Json(ProjectionsResponse {
        projections: engine::projection_table(anchor, &inputs, &result)?,
        investor_flows: engine::investor_flow_table(anchor, &inputs, &result),
    }))
}
