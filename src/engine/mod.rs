//! Pure computation engine for deterministic valuation logic.
//!
//! Every function here is synchronous, stateless, and recomputes its
//! output wholesale from the inputs it is handed. The presentation
//! layer calls in once for the base case and repeatedly for sweeps.

use crate::domain::Decimal;
use thiserror::Error;

pub mod discount;
pub mod irr;
pub mod projection;
pub mod scenario;
pub mod sensitivity;
pub mod valuation;

pub use discount::{discount_factor, present_value};
pub use irr::{fallback_irr, internal_rate_of_return};
pub use projection::{investor_flow_table, projection_table, InvestorFlowRow, ProjectionRow};
pub use scenario::{run_scenarios, ScenarioOutcome};
pub use sensitivity::{sensitivity_sweep, SensitivityPoint};
pub use valuation::compute_valuation;

/// Arithmetic failure inside the engine. Surfaced whole: a failing run
/// produces no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("arithmetic overflow while computing {0}")]
    Overflow(&'static str),
    #[error("discount base 1 + rate is not positive (rate = {0})")]
    NonPositiveDiscountBase(Decimal),
}
