//! SQLite storage implementation for subscribers.

mod model;
mod repository;

pub use model::{SubscriberChangesDB, SubscriberDB};
pub use repository::SubscriberRepository;
