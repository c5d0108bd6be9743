//! Domain types and determinism layer for the valuation engine.
//!
//! This module provides:
//! - Lossless numeric handling via Decimal wrapper
//! - Domain primitives: Currency
//! - The immutable ValuationInputs bundle with boundary clamping
//! - Derived result types and the investor CashFlowSeries

pub mod cash_flow;
pub mod decimal;
pub mod inputs;
pub mod primitives;
pub mod results;

pub use cash_flow::{CashFlow, CashFlowSeries};
pub use decimal::Decimal;
pub use inputs::{ValuationInputs, MAX_EXIT_YEAR, MIN_EXIT_YEAR};
pub use primitives::{Currency, CurrencyParseError};
pub use results::{ScenarioName, ValuationResult};
