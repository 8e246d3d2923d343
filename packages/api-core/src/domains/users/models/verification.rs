use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::common::UserId;

/// Pending email verification. One per user; replaced whenever the email
/// changes.
#[derive(Debug, Clone)]
pub struct Verification {
    pub code: String,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Verification {
    pub fn new(user_id: UserId) -> Self {
        Self {
            code: Uuid::new_v4().to_string(),
            user_id,
            created_at: Utc::now(),
        }
    }
}
