//! Users module - account records used by the auth layer.

mod users_model;
mod users_service;
mod users_traits;

pub use users_model::{normalize_email, NewUser, User, UserCredentials};
pub use users_service::UserService;
pub use users_traits::{UserRepositoryTrait, UserServiceTrait};
