pub mod export;
pub mod health;
pub mod projections;
pub mod scenarios;
pub mod sensitivity;
pub mod valuation;

use crate::config::Config;
use crate::domain::{Currency, ValuationInputs};
use axum::{routing::get, routing::post, Router};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Per-request currency override, falling back to the configured one.
    pub fn currency_or(&self, requested: Option<Currency>) -> Currency {
        requested.unwrap_or(self.config.currency)
    }
}

/// Request body for endpoints that format currency figures: the input
/// bundle plus an optional reporting currency for this interaction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRequest {
    #[serde(flatten)]
    pub inputs: ValuationInputs,
    #[serde(default)]
    pub currency: Option<Currency>,
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/valuation", post(valuation::post_valuation))
        .route("/v1/sensitivity", post(sensitivity::post_sensitivity))
        .route("/v1/scenarios", post(scenarios::post_scenarios))
        .route("/v1/projections", post(projections::post_projections))
        .route("/v1/export/workbook", post(export::post_workbook))
        .route("/v1/export/report", post(export::post_report))
        .layer(cors)
        .with_state(state)
}
