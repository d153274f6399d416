use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::users_model::{normalize_email, NewUser, User, UserCredentials};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{DatabaseError, Error, Result};

pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        UserService { repository }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository.get_user(user_id)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
        let email = normalize_email(email)?;
        self.repository.find_by_email(&email)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;
        let email = normalize_email(&new_user.email)?;
        if self.repository.find_by_email(&email)?.is_some() {
            return Err(Error::Database(DatabaseError::UniqueViolation(format!(
                "A user with email '{}' already exists",
                email
            ))));
        }

        let now = Utc::now().naive_utc();
        let user = User {
            id: Uuid::new_v4().to_string(),
            email,
            display_name: new_user
                .display_name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            created_at: now,
            updated_at: now,
        };
        self.repository.insert_user(user, new_user.password_hash).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockUserRepository {
        rows: Mutex<Vec<UserCredentials>>,
    }

    #[async_trait]
    impl UserRepositoryTrait for MockUserRepository {
        fn get_user(&self, user_id: &str) -> Result<User> {
            self.rows
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.user.id == user_id)
                .map(|c| c.user.clone())
                .ok_or_else(|| Error::not_found("User", user_id))
        }

        fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.user.email == email)
                .cloned())
        }

        async fn insert_user(&self, user: User, password_hash: String) -> Result<User> {
            self.rows.lock().unwrap().push(UserCredentials {
                user: user.clone(),
                password_hash,
            });
            Ok(user)
        }
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            display_name: Some(" Ana ".to_string()),
            password_hash: "$argon2id$stub".to_string(),
        }
    }

    #[tokio::test]
    async fn create_user_normalizes_email_and_name() {
        let service = UserService::new(Arc::new(MockUserRepository::default()));
        let user = service.create_user(new_user("Ana@Example.com")).await.unwrap();
        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.display_name.as_deref(), Some("Ana"));

        let creds = service.find_by_email("ANA@example.com").unwrap().unwrap();
        assert_eq!(creds.user.id, user.id);
        assert_eq!(creds.password_hash, "$argon2id$stub");
    }

    #[tokio::test]
    async fn duplicate_email_is_a_unique_violation() {
        let service = UserService::new(Arc::new(MockUserRepository::default()));
        service.create_user(new_user("ana@example.com")).await.unwrap();
        let err = service
            .create_user(new_user(" ANA@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Database(DatabaseError::UniqueViolation(_))
        ));
    }
}
