//! Income module - salary and other earnings.

mod income_model;
mod income_service;
mod income_traits;

pub use income_model::{IncomeEntry, IncomeOverview, NewIncomeEntry};
pub use income_service::IncomeService;
pub use income_traits::{IncomeRepositoryTrait, IncomeServiceTrait};
