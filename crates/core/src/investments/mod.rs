//! Investments module - holdings, allocation and growth projections.

mod investments_model;
mod investments_service;
mod investments_traits;
pub mod projection;

pub use investments_model::{
    AllocationSlice, Investment, InvestmentKind, InvestmentsOverview, NewInvestment,
};
pub use investments_service::InvestmentService;
pub use investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
pub use projection::{future_value, project_investments, InvestmentProjection};
