// Repository traits for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic. Domain actions
// decide; stores only fetch and persist snapshots. A relational or
// document-backed implementation plugs in here; `memory::InMemoryStore` is
// the reference implementation.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::common::{DishId, OrderId, RestaurantId, UserId};
use crate::domains::orders::models::{Order, OrderStatus};
use crate::domains::payments::models::Payment;
use crate::domains::restaurants::models::{Dish, Restaurant};
use crate::domains::users::models::{User, Verification};

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;
    async fn insert_user(&self, user: User) -> Result<User>;
    async fn update_user(&self, user: User) -> Result<User>;

    async fn insert_verification(&self, verification: Verification) -> Result<()>;
    async fn find_verification_by_code(&self, code: &str) -> Result<Option<Verification>>;
    async fn delete_verification(&self, user_id: UserId) -> Result<()>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn find_order_by_id(&self, id: OrderId) -> Result<Option<Order>>;
    async fn insert_order(&self, order: Order) -> Result<Order>;
    async fn update_order_status(&self, id: OrderId, status: OrderStatus)
        -> Result<Option<Order>>;

    /// Atomically assign a driver, only if none is assigned yet.
    ///
    /// Returns `false` when a driver was already set. This is the one
    /// operation where the store must provide compare-and-set semantics:
    /// two concurrent assignments on the same order must not both succeed.
    async fn cas_assign_driver(&self, id: OrderId, driver_id: UserId) -> Result<bool>;

    async fn orders_for_customer(
        &self,
        customer_id: UserId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>>;
    async fn orders_for_driver(
        &self,
        driver_id: UserId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>>;
    async fn orders_for_owner(
        &self,
        owner_id: UserId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>>;
}

#[async_trait]
pub trait RestaurantStore: Send + Sync {
    async fn find_restaurant_by_id(&self, id: RestaurantId) -> Result<Option<Restaurant>>;
    async fn insert_restaurant(&self, restaurant: Restaurant) -> Result<Restaurant>;
    async fn update_restaurant(&self, restaurant: Restaurant) -> Result<Restaurant>;
    async fn delete_restaurant(&self, id: RestaurantId) -> Result<()>;
    async fn all_restaurants(&self) -> Result<Vec<Restaurant>>;
    async fn search_restaurants_by_name(&self, query: &str) -> Result<Vec<Restaurant>>;

    async fn insert_dish(&self, dish: Dish) -> Result<Dish>;
    async fn find_dish_by_id(&self, id: DishId) -> Result<Option<Dish>>;

    /// Restaurants whose promotion window has lapsed but are still flagged.
    async fn expired_promotions(&self, now: DateTime<Utc>) -> Result<Vec<Restaurant>>;
}

#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn insert_payment(&self, payment: Payment) -> Result<Payment>;
    async fn payments_for_user(&self, user_id: UserId) -> Result<Vec<Payment>>;
}
