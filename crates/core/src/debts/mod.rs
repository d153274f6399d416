//! Debts module - outstanding debts, payoff ordering and estimates.

mod debts_model;
mod debts_service;
mod debts_traits;
pub mod strategy;

pub use debts_model::{Debt, DebtStatus, DebtsOverview, NewDebt};
pub use debts_service::DebtService;
pub use debts_traits::{DebtRepositoryTrait, DebtServiceTrait};
pub use strategy::{order_debts, payoff_months, simulate_payoff, PayoffSimulation, PayoffStrategy};
