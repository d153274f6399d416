//! User domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::utils::validation::ensure_not_blank;

/// A registered dashboard user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub display_name: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input for registering a user. The password is hashed before it reaches core.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub display_name: Option<String>,
    pub password_hash: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        normalize_email(&self.email)?;
        ensure_not_blank("passwordHash", &self.password_hash)?;
        Ok(())
    }
}

/// A user together with the stored password hash, for credential checks.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Trims and lower-cases an email address, rejecting obviously malformed ones.
pub fn normalize_email(email: &str) -> Result<String> {
    let email = email.trim().to_lowercase();
    ensure_not_blank("email", &email)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(Error::invalid_input(format!(
            "'{}' is not a valid email address",
            email
        ))),
    }
}
