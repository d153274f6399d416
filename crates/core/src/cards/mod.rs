//! Cards module - credit cards and their limits.

mod cards_model;
mod cards_service;
mod cards_traits;

pub use cards_model::{CardsOverview, CreditCard, NewCreditCard};
pub use cards_service::CardService;
pub use cards_traits::{CardRepositoryTrait, CardServiceTrait};
