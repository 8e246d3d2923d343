use chrono::{DateTime, Utc};

use crate::common::{RestaurantId, UserId};

/// Restaurant operated by a single owner.
#[derive(Debug, Clone)]
pub struct Restaurant {
    pub id: RestaurantId,
    /// The one principal allowed to mutate this restaurant and its dishes.
    pub owner_id: UserId,
    pub name: String,
    pub address: String,
    pub is_promoted: bool,
    pub promoted_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Restaurant {
    pub fn new(owner_id: UserId, name: String, address: String) -> Self {
        Self {
            id: RestaurantId::new(),
            owner_id,
            name,
            address,
            is_promoted: false,
            promoted_until: None,
            created_at: Utc::now(),
        }
    }
}
