//! In-memory export builders: CSV workbook sheets and markdown report.

use thiserror::Error;

pub mod report;
pub mod workbook;

pub use report::{build_report, Report};
pub use workbook::{build_workbook, Sheet, Workbook};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV buffer error: {0}")]
    Buffer(String),
}
