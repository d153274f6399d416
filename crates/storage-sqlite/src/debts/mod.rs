//! SQLite storage implementation for debts.

mod model;
mod repository;

pub use model::DebtDB;
pub use repository::DebtRepository;
