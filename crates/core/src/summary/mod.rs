//! Summary module - the monthly financial snapshot shown on the dashboard.

mod summary_model;
mod summary_service;

pub use summary_model::{compute_summary, FinancialSummary, SummaryInputs};
pub use summary_service::{SummaryService, SummaryServiceTrait};
