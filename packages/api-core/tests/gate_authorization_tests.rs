//! Gate-level authorization tests.
//!
//! Each role-gated operation must deny anonymous, malformed, and
//! wrong-role callers uniformly, while public operations stay open and
//! never touch the identity machinery.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use api_core::api::Api;
use api_core::common::auth::Role;
use api_core::common::UserId;
use api_core::domains::auth::JwtService;
use api_core::domains::orders::OrderError;
use api_core::domains::restaurants::RestaurantError;
use api_core::domains::users::models::{User, Verification};
use api_core::domains::users::UserError;
use api_core::kernel::store::UserStore;
use api_core::kernel::{Deps, InMemoryStore, LogMailer, LogNotifier};

use crate::common::{missing_restaurant_id, TestHarness};

#[tokio::test]
async fn public_operations_allow_anonymous_callers() {
    let harness = TestHarness::new();

    // No credential anywhere; both must succeed
    let restaurants = harness.api.restaurants(None).await.unwrap();
    assert!(restaurants.is_empty());

    harness
        .api
        .create_account(None, "anyone@example.com", "pw", Role::Client)
        .await
        .unwrap();
}

#[tokio::test]
async fn gated_operation_denies_anonymous() {
    let harness = TestHarness::new();

    let result = harness.api.get_orders(None, None).await;
    assert!(matches!(result, Err(OrderError::Forbidden(_))));
}

#[tokio::test]
async fn gated_operation_denies_malformed_token() {
    let harness = TestHarness::new();

    let result = harness.api.get_orders(Some("not-a-jwt"), None).await;
    assert!(matches!(result, Err(OrderError::Forbidden(_))));
}

#[tokio::test]
async fn gated_operation_denies_token_signed_with_other_secret() {
    let harness = TestHarness::new();
    let (user, _) = harness.signed_up("client@example.com", Role::Client).await;

    let foreign = JwtService::new("some-other-secret");
    let forged = foreign.sign(user.id).unwrap();

    let result = harness.api.get_orders(Some(&forged), None).await;
    assert!(matches!(result, Err(OrderError::Forbidden(_))));
}

#[tokio::test]
async fn gated_operation_denies_token_for_unknown_subject() {
    let harness = TestHarness::new();
    let token = harness.token_for_unknown_user();

    let result = harness.api.get_orders(Some(&token), None).await;
    assert!(matches!(result, Err(OrderError::Forbidden(_))));
}

#[tokio::test]
async fn any_requirement_admits_every_authenticated_role() {
    let harness = TestHarness::new();

    for (email, role) in [
        ("c@example.com", Role::Client),
        ("o@example.com", Role::Owner),
        ("d@example.com", Role::Delivery),
    ] {
        let (_, token) = harness.signed_up(email, role).await;
        harness.api.get_orders(Some(&token), None).await.unwrap();
        harness.api.me(Some(&token)).await.unwrap();
    }
}

#[tokio::test]
async fn wrong_role_is_denied_uniformly() {
    let harness = TestHarness::new();
    let (_, client_token) = harness.signed_up("client@example.com", Role::Client).await;
    let (_, driver_token) = harness.signed_up("driver@example.com", Role::Delivery).await;

    // Owner-only operation as a client
    let result = harness
        .api
        .create_restaurant(Some(&client_token), "Nope".into(), "2 St".into())
        .await;
    assert!(matches!(result, Err(RestaurantError::Forbidden(_))));

    // Delivery-only operation as a client
    let result = harness
        .api
        .take_order(Some(&client_token), api_core::common::OrderId::new())
        .await;
    assert!(matches!(result, Err(OrderError::Forbidden(_))));

    // Client-only operation as a driver
    let result = harness
        .api
        .create_order(
            Some(&driver_token),
            api_core::domains::orders::actions::CreateOrderInput {
                restaurant_id: missing_restaurant_id(),
                items: Vec::new(),
            },
        )
        .await;
    assert!(matches!(result, Err(OrderError::Forbidden(_))));
}

#[tokio::test]
async fn denial_for_wrong_role_matches_denial_for_no_auth() {
    // Uniform "forbidden": the two failure classes must not be
    // distinguishable through the error text.
    let harness = TestHarness::new();
    let (_, client_token) = harness.signed_up("client@example.com", Role::Client).await;

    let anon = harness.api.get_payments(None).await.unwrap_err();
    let wrong_role = harness.api.get_payments(Some(&client_token)).await.unwrap_err();

    assert_eq!(anon.to_string(), wrong_role.to_string());
}

// ============================================================================
// Short-circuit: a missing credential must not reach the user store
// ============================================================================

/// Delegating user store that counts principal lookups.
struct CountingUserStore {
    inner: Arc<InMemoryStore>,
    lookups: AtomicUsize,
}

#[async_trait]
impl UserStore for CountingUserStore {
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.find_user_by_id(id).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.inner.find_user_by_email(email).await
    }

    async fn insert_user(&self, user: User) -> Result<User> {
        self.inner.insert_user(user).await
    }

    async fn update_user(&self, user: User) -> Result<User> {
        self.inner.update_user(user).await
    }

    async fn insert_verification(&self, verification: Verification) -> Result<()> {
        self.inner.insert_verification(verification).await
    }

    async fn find_verification_by_code(&self, code: &str) -> Result<Option<Verification>> {
        self.inner.find_verification_by_code(code).await
    }

    async fn delete_verification(&self, user_id: UserId) -> Result<()> {
        self.inner.delete_verification(user_id).await
    }
}

#[tokio::test]
async fn anonymous_denial_performs_no_principal_lookup() {
    let store = Arc::new(InMemoryStore::new());
    let counting = Arc::new(CountingUserStore {
        inner: store.clone(),
        lookups: AtomicUsize::new(0),
    });

    let deps = Deps {
        users: counting.clone(),
        orders: store.clone(),
        restaurants: store.clone(),
        payments: store,
        notifier: Arc::new(LogNotifier),
        mailer: Arc::new(LogMailer),
        jwt: JwtService::new("integration_test_secret"),
    };
    let api = Api::new(deps);

    let result = api.get_payments(None).await;
    assert!(matches!(result, Err(api_core::domains::payments::PaymentError::Forbidden(_))));
    assert_eq!(counting.lookups.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn authenticated_me_round_trips_through_the_resolver() {
    let harness = TestHarness::new();
    let (user, token) = harness.signed_up("me@example.com", Role::Owner).await;

    let me = harness.api.me(Some(&token)).await.unwrap();
    assert_eq!(me.id, user.id);
    assert_eq!(me.role, Role::Owner);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let harness = TestHarness::new();
    harness.signed_up("login@example.com", Role::Client).await;

    let result = harness.api.login(None, "login@example.com", "wrong").await;
    assert!(matches!(result, Err(UserError::WrongPassword)));

    let result = harness.api.login(None, "ghost@example.com", "pw").await;
    assert!(matches!(result, Err(UserError::NotFound)));
}
