use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::common::{DishId, OrderId, PaymentId, RestaurantId, UserId};
use crate::domains::orders::models::{Order, OrderStatus};
use crate::domains::payments::models::Payment;
use crate::domains::restaurants::models::{Dish, Restaurant};
use crate::domains::users::models::{User, Verification};

use super::store::{OrderStore, PaymentStore, RestaurantStore, UserStore};

/// In-memory store
///
/// Reference implementation of the repository traits, also used by the
/// test harness. Each entity map sits behind its own `RwLock`; the driver
/// compare-and-set runs under the orders write lock, which makes it atomic
/// with respect to every other order mutation.
#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<UserId, User>>,
    verifications: RwLock<HashMap<UserId, Verification>>,
    orders: RwLock<HashMap<OrderId, Order>>,
    restaurants: RwLock<HashMap<RestaurantId, Restaurant>>,
    dishes: RwLock<HashMap<DishId, Dish>>,
    payments: RwLock<HashMap<PaymentId, Payment>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn insert_user(&self, user: User) -> Result<User> {
        self.users.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_user(&self, user: User) -> Result<User> {
        self.users.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn insert_verification(&self, verification: Verification) -> Result<()> {
        // One pending verification per user; a new one replaces the old
        self.verifications
            .write()
            .await
            .insert(verification.user_id, verification);
        Ok(())
    }

    async fn find_verification_by_code(&self, code: &str) -> Result<Option<Verification>> {
        Ok(self
            .verifications
            .read()
            .await
            .values()
            .find(|v| v.code == code)
            .cloned())
    }

    async fn delete_verification(&self, user_id: UserId) -> Result<()> {
        self.verifications.write().await.remove(&user_id);
        Ok(())
    }
}

#[async_trait]
impl OrderStore for InMemoryStore {
    async fn find_order_by_id(&self, id: OrderId) -> Result<Option<Order>> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn insert_order(&self, order: Order) -> Result<Order> {
        self.orders.write().await.insert(order.id, order.clone());
        Ok(order)
    }

    async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Option<Order>> {
        let mut orders = self.orders.write().await;
        Ok(orders.get_mut(&id).map(|order| {
            order.status = status;
            order.clone()
        }))
    }

    async fn cas_assign_driver(&self, id: OrderId, driver_id: UserId) -> Result<bool> {
        let mut orders = self.orders.write().await;
        match orders.get_mut(&id) {
            Some(order) if order.driver_id.is_none() => {
                order.driver_id = Some(driver_id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn orders_for_customer(
        &self,
        customer_id: UserId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>> {
        Ok(self
            .orders
            .read()
            .await
            .values()
            .filter(|o| o.customer_id == customer_id)
            .filter(|o| status.map_or(true, |s| o.status == s))
            .cloned()
            .collect())
    }

    async fn orders_for_driver(
        &self,
        driver_id: UserId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>> {
        Ok(self
            .orders
            .read()
            .await
            .values()
            .filter(|o| o.driver_id == Some(driver_id))
            .filter(|o| status.map_or(true, |s| o.status == s))
            .cloned()
            .collect())
    }

    async fn orders_for_owner(
        &self,
        owner_id: UserId,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>> {
        Ok(self
            .orders
            .read()
            .await
            .values()
            .filter(|o| o.restaurant_owner_id == owner_id)
            .filter(|o| status.map_or(true, |s| o.status == s))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RestaurantStore for InMemoryStore {
    async fn find_restaurant_by_id(&self, id: RestaurantId) -> Result<Option<Restaurant>> {
        Ok(self.restaurants.read().await.get(&id).cloned())
    }

    async fn insert_restaurant(&self, restaurant: Restaurant) -> Result<Restaurant> {
        self.restaurants
            .write()
            .await
            .insert(restaurant.id, restaurant.clone());
        Ok(restaurant)
    }

    async fn update_restaurant(&self, restaurant: Restaurant) -> Result<Restaurant> {
        self.restaurants
            .write()
            .await
            .insert(restaurant.id, restaurant.clone());
        Ok(restaurant)
    }

    async fn delete_restaurant(&self, id: RestaurantId) -> Result<()> {
        self.restaurants.write().await.remove(&id);
        Ok(())
    }

    async fn all_restaurants(&self) -> Result<Vec<Restaurant>> {
        Ok(self.restaurants.read().await.values().cloned().collect())
    }

    async fn search_restaurants_by_name(&self, query: &str) -> Result<Vec<Restaurant>> {
        let query = query.to_lowercase();
        Ok(self
            .restaurants
            .read()
            .await
            .values()
            .filter(|r| r.name.to_lowercase().contains(&query))
            .cloned()
            .collect())
    }

    async fn insert_dish(&self, dish: Dish) -> Result<Dish> {
        self.dishes.write().await.insert(dish.id, dish.clone());
        Ok(dish)
    }

    async fn find_dish_by_id(&self, id: DishId) -> Result<Option<Dish>> {
        Ok(self.dishes.read().await.get(&id).cloned())
    }

    async fn expired_promotions(&self, now: DateTime<Utc>) -> Result<Vec<Restaurant>> {
        Ok(self
            .restaurants
            .read()
            .await
            .values()
            .filter(|r| r.is_promoted && r.promoted_until.is_some_and(|until| until < now))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PaymentStore for InMemoryStore {
    async fn insert_payment(&self, payment: Payment) -> Result<Payment> {
        self.payments
            .write()
            .await
            .insert(payment.id, payment.clone());
        Ok(payment)
    }

    async fn payments_for_user(&self, user_id: UserId) -> Result<Vec<Payment>> {
        Ok(self
            .payments
            .read()
            .await
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }
}
