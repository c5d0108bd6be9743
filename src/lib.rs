pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod export;
pub mod format;

pub use config::Config;
pub use domain::{
    CashFlow, CashFlowSeries, Currency, Decimal, ScenarioName, ValuationInputs, ValuationResult,
};
pub use engine::EngineError;
pub use error::AppError;
