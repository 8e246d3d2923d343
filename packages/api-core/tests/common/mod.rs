//! Shared test harness: the full API wired to one in-memory store with
//! recording collaborator doubles.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use api_core::api::Api;
use api_core::common::auth::Role;
use api_core::common::{OrderId, RestaurantId, UserId};
use api_core::domains::auth::JwtService;
use api_core::domains::orders::models::Order;
use api_core::domains::restaurants::models::{Dish, Restaurant};
use api_core::domains::users::models::User;
use api_core::kernel::{BaseMailer, BaseNotifier, Deps, InMemoryStore};

/// What the notifier double observed, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierEvent {
    PendingCreated {
        order_id: OrderId,
        owner_id: UserId,
    },
    Cooked {
        order_id: OrderId,
    },
    Updated {
        order_id: OrderId,
    },
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub events: Mutex<Vec<NotifierEvent>>,
}

#[async_trait]
impl BaseNotifier for RecordingNotifier {
    async fn pending_order_created(&self, order: &Order, restaurant_owner_id: UserId) {
        self.events.lock().unwrap().push(NotifierEvent::PendingCreated {
            order_id: order.id,
            owner_id: restaurant_owner_id,
        });
    }

    async fn order_cooked(&self, order: &Order) {
        self.events
            .lock()
            .unwrap()
            .push(NotifierEvent::Cooked { order_id: order.id });
    }

    async fn order_status_changed(&self, order: &Order) {
        self.events
            .lock()
            .unwrap()
            .push(NotifierEvent::Updated { order_id: order.id });
    }
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<NotifierEvent> {
        self.events.lock().unwrap().clone()
    }
}

/// Mailer double that records (email, code) pairs instead of sending.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl BaseMailer for RecordingMailer {
    async fn send_verification_email(&self, email: &str, code: &str) {
        self.sent
            .lock()
            .unwrap()
            .push((email.to_string(), code.to_string()));
    }
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

pub struct TestHarness {
    pub api: Api,
    pub store: Arc<InMemoryStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub mailer: Arc<RecordingMailer>,
    pub jwt: JwtService,
}

impl TestHarness {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let mailer = Arc::new(RecordingMailer::default());
        let jwt = JwtService::new("integration_test_secret");

        let deps = Deps {
            users: store.clone(),
            orders: store.clone(),
            restaurants: store.clone(),
            payments: store.clone(),
            notifier: notifier.clone(),
            mailer: mailer.clone(),
            jwt: jwt.clone(),
        };

        Self {
            api: Api::new(deps),
            store,
            notifier,
            mailer,
            jwt,
        }
    }

    /// Create an account and log it in, returning the user and a token.
    pub async fn signed_up(&self, email: &str, role: Role) -> (User, String) {
        let user = self
            .api
            .create_account(None, email, "password", role)
            .await
            .expect("account creation failed");
        let token = self
            .api
            .login(None, email, "password")
            .await
            .expect("login failed");
        (user, token)
    }

    /// An owner with a restaurant and one priced dish on the menu.
    pub async fn owner_with_restaurant(
        &self,
        email: &str,
    ) -> (User, String, Restaurant, Dish) {
        use api_core::domains::restaurants::actions::CreateDishInput;

        let (owner, token) = self.signed_up(email, Role::Owner).await;
        let restaurant = self
            .api
            .create_restaurant(Some(&token), "Test Kitchen".into(), "1 Main St".into())
            .await
            .expect("restaurant creation failed");
        let dish = self
            .api
            .create_dish(
                Some(&token),
                CreateDishInput {
                    restaurant_id: restaurant.id,
                    name: "House Special".into(),
                    price: 1200,
                    options: Vec::new(),
                },
            )
            .await
            .expect("dish creation failed");
        (owner, token, restaurant, dish)
    }

    /// Place a one-dish order as a fresh client against the restaurant.
    pub async fn placed_order(
        &self,
        client_email: &str,
        restaurant: &Restaurant,
        dish: &Dish,
    ) -> (User, String, Order) {
        use api_core::domains::orders::actions::{CreateOrderInput, OrderItemInput};

        let (client, token) = self.signed_up(client_email, Role::Client).await;
        let order = self
            .api
            .create_order(
                Some(&token),
                CreateOrderInput {
                    restaurant_id: restaurant.id,
                    items: vec![OrderItemInput {
                        dish_id: dish.id,
                        options: Vec::new(),
                    }],
                },
            )
            .await
            .expect("order creation failed");
        (client, token, order)
    }

    /// A correctly signed token whose subject was never stored.
    pub fn token_for_unknown_user(&self) -> String {
        self.jwt.sign(UserId::new()).expect("signing failed")
    }
}

/// Convenience: an id that exists nowhere.
pub fn missing_restaurant_id() -> RestaurantId {
    RestaurantId::new()
}
