//! Bills module - recurring fixed monthly bills.

mod bills_model;
mod bills_service;
mod bills_traits;

pub use bills_model::{Bill, BillStatus, BillsOverview, NewBill};
pub use bills_service::BillService;
pub use bills_traits::{BillRepositoryTrait, BillServiceTrait};
