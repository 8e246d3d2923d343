use std::sync::Arc;

use crate::domains::auth::JwtService;

use super::memory::InMemoryStore;
use super::notify::{BaseMailer, BaseNotifier, LogMailer, LogNotifier};
use super::store::{OrderStore, PaymentStore, RestaurantStore, UserStore};

/// Shared dependencies threaded into every action.
#[derive(Clone)]
pub struct Deps {
    pub users: Arc<dyn UserStore>,
    pub orders: Arc<dyn OrderStore>,
    pub restaurants: Arc<dyn RestaurantStore>,
    pub payments: Arc<dyn PaymentStore>,
    pub notifier: Arc<dyn BaseNotifier>,
    pub mailer: Arc<dyn BaseMailer>,
    pub jwt: JwtService,
}

impl Deps {
    /// Wire every store to one shared in-memory instance with logging
    /// collaborators. Development and test setup; production wiring
    /// substitutes real implementations per seam.
    pub fn in_memory(jwt_secret: &str) -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self {
            users: store.clone(),
            orders: store.clone(),
            restaurants: store.clone(),
            payments: store,
            notifier: Arc::new(LogNotifier),
            mailer: Arc::new(LogMailer),
            jwt: JwtService::new(jwt_secret),
        }
    }
}
