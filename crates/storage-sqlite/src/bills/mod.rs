//! SQLite storage implementation for bills.

mod model;
mod repository;

pub use model::BillDB;
pub use repository::BillRepository;
