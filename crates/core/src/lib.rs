//! Finboard Core - Domain entities, calculations, services, and traits.
//!
//! This crate contains the business logic for the Finboard dashboard.
//! It is database-agnostic and defines repository traits that are
//! implemented by the `storage-sqlite` crate.

pub mod bills;
pub mod cards;
pub mod categories;
pub mod constants;
pub mod debts;
pub mod dreams;
pub mod errors;
pub mod income;
pub mod investments;
pub mod subscription;
pub mod summary;
pub mod users;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
