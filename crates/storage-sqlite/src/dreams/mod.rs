//! SQLite storage implementation for dreams and their contributions.

mod model;
mod repository;

pub use model::{DreamContributionDB, DreamDB};
pub use repository::DreamRepository;
