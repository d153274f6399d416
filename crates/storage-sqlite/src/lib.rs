//! SQLite storage implementation for Finboard.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `finboard-core` and contains:
//! - Database connection pooling and the single writer actor
//! - Diesel migrations (including the seeded category list)
//! - Repository implementations for every user-owned record
//! - Database-specific model types (with Diesel derives)
//!
//! ```text
//!   server (HTTP)
//!        │
//!        ▼
//!   core (domain, traits)
//!        ▲
//!        │ implements
//!   storage-sqlite (this crate)
//!        │
//!        ▼
//!    SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod bills;
pub mod cards;
pub mod categories;
pub mod debts;
pub mod dreams;
pub mod income;
pub mod investments;
pub mod subscription;
pub mod users;

#[cfg(test)]
mod test_utils;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use bills::BillRepository;
pub use cards::CardRepository;
pub use categories::CategoryRepository;
pub use debts::DebtRepository;
pub use dreams::DreamRepository;
pub use income::IncomeRepository;
pub use investments::InvestmentRepository;
pub use subscription::SubscriberRepository;
pub use users::UserRepository;

// Re-export from finboard-core for convenience
pub use finboard_core::errors::{DatabaseError, Error, Result};
