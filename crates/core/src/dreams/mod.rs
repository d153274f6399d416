//! Dreams module - savings goals on the dream board and their contributions.

mod dreams_model;
mod dreams_service;
mod dreams_traits;

pub use dreams_model::{
    months_to_goal, Dream, DreamContribution, DreamPriority, DreamProgress, DreamStatus,
    DreamsOverview, NewDream, NewDreamContribution,
};
pub use dreams_service::DreamService;
pub use dreams_traits::{DreamRepositoryTrait, DreamServiceTrait};
