use async_trait::async_trait;

use super::users_model::{NewUser, User, UserCredentials};
use crate::errors::Result;

/// Trait for user repository operations
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>>;
    async fn insert_user(&self, user: User, password_hash: String) -> Result<User>;
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    fn get_user(&self, user_id: &str) -> Result<User>;
    fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>>;
    async fn create_user(&self, new_user: NewUser) -> Result<User>;
}
