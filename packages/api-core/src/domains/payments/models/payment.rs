use chrono::{DateTime, Utc};

use crate::common::{PaymentId, RestaurantId, UserId};

/// A promotion purchase by a restaurant's owner.
///
/// The transaction id comes from the external payment provider; this core
/// only records it.
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: PaymentId,
    pub transaction_id: String,
    pub user_id: UserId,
    pub restaurant_id: RestaurantId,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(transaction_id: String, user_id: UserId, restaurant_id: RestaurantId) -> Self {
        Self {
            id: PaymentId::new(),
            transaction_id,
            user_id,
            restaurant_id,
            created_at: Utc::now(),
        }
    }
}
