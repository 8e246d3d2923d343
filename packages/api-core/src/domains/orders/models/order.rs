use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{DishId, OrderId, RestaurantId, UserId};

/// Order lifecycle.
///
/// The progression is linear: Pending → Cooking → Cooked → PickedUp →
/// Delivered. No skips, no back-transitions; Delivered is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Cooking,
    Cooked,
    PickedUp,
    Delivered,
}

impl OrderStatus {
    /// The only status this one may advance to, if any.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Cooking),
            OrderStatus::Cooking => Some(OrderStatus::Cooked),
            OrderStatus::Cooked => Some(OrderStatus::PickedUp),
            OrderStatus::PickedUp => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }
}

/// A customer's order against a restaurant.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: UserId,
    /// Assigned at most once, by a Delivery principal.
    pub driver_id: Option<UserId>,
    pub restaurant_id: RestaurantId,
    /// Denormalized from the restaurant; the visibility predicate needs it
    /// without a second lookup.
    pub restaurant_owner_id: UserId,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    /// Total in integer cents, priced at creation time.
    pub total: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct OrderItem {
    pub dish_id: DishId,
    pub options: Vec<OrderItemOption>,
}

/// An option the customer picked, with the chosen choice when the option
/// has per-choice pricing.
#[derive(Debug, Clone)]
pub struct OrderItemOption {
    pub name: String,
    pub choice: Option<String>,
}

impl Order {
    pub fn new(
        customer_id: UserId,
        restaurant_id: RestaurantId,
        restaurant_owner_id: UserId,
        items: Vec<OrderItem>,
        total: i64,
    ) -> Self {
        Self {
            id: OrderId::new(),
            customer_id,
            driver_id: None,
            restaurant_id,
            restaurant_owner_id,
            status: OrderStatus::Pending,
            items,
            total,
            created_at: Utc::now(),
        }
    }
}
