use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::api::{AppState, ValuationRequest};
use crate::engine;
use crate::error::AppError;
use crate::export;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetPayload {
    pub name: String,
    pub csv: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkbookResponse {
    pub filename_stem: String,
    pub sheets: Vec<SheetPayload>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub filename: String,
    pub markdown: String,
}

pub async fn post_workbook(
    State(state): State<AppState>,
    Json(request): Json<ValuationRequest>,
) -> Result<Json<WorkbookResponse>, AppError> {
    let inputs = request.inputs.clamped();
    let result = engine::compute_valuation(&inputs)?;
    let anchor = state.config.anchor_year;

    let projections = engine::projection_table(anchor, &inputs, &result)?;
    let flows = engine::investor_flow_table(anchor, &inputs, &result);
    let scenarios = engine::run_scenarios(&inputs)?;

    let workbook = export::build_workbook(
        state.currency_or(request.currency),
        &projections,
        &flows,
        &scenarios,
        Utc::now().date_naive(),
    )?;

    tracing::info!(stem = %workbook.filename_stem, "built workbook export");

    Ok(Json(WorkbookResponse {
        filename_stem: workbook.filename_stem,
        sheets: workbook
            .sheets
            .into_iter()
            .map(|sheet| SheetPayload {
                name: sheet.name,
                csv: sheet.csv,
            })
            .collect(),
    }))
}

pub async fn post_report(
    State(state): State<AppState>,
    Json(request): Json<ValuationRequest>,
) -> Result<Json<ReportResponse>, AppError> {
    let inputs = request.inputs.clamped();
    let result = engine::compute_valuation(&inputs)?;
    let today = Utc::now().date_naive();

    let report = export::build_report(
        state.currency_or(request.currency),
        &inputs,
        &result,
        today,
        today,
    );

    Ok(Json(ReportResponse {
        filename: report.filename,
        markdown: report.markdown,
    }))
}
