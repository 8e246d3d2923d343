use anyhow::Result;
use chrono::{DateTime, Utc};

use super::password::{hash_password, verify_password};
use crate::common::auth::{Principal, Role};
use crate::common::UserId;

/// User account. One account per email; the role is fixed at signup.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    /// Whether the account's email address has been confirmed.
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a new unverified account with a freshly hashed password.
    pub fn create(email: &str, password: &str, role: Role) -> Result<Self> {
        Ok(Self {
            id: UserId::new(),
            email: email.to_string(),
            password_hash: hash_password(password)?,
            role,
            verified: false,
            created_at: Utc::now(),
        })
    }

    /// Check a login attempt against the stored hash.
    pub fn check_password(&self, password: &str) -> bool {
        verify_password(password, &self.password_hash)
    }

    /// The request-scoped identity this account resolves to.
    pub fn principal(&self) -> Principal {
        Principal {
            id: self.id,
            role: self.role,
        }
    }
}
