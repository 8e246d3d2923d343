// Outbound collaborator traits: order notifications and mail.
//
// Fire-and-forget: no delivery guarantee is promised to callers, so the
// methods return nothing. Real transports (push, websocket fan-out, SMTP)
// implement these; `Log*` implementations emit tracing events and are the
// default wiring for development.

use async_trait::async_trait;
use tracing::info;

use crate::common::UserId;
use crate::domains::orders::models::Order;

/// Order lifecycle signals consumed by subscription/push transports.
#[async_trait]
pub trait BaseNotifier: Send + Sync {
    /// A client placed a new order; the restaurant's owner should hear
    /// about it.
    async fn pending_order_created(&self, order: &Order, restaurant_owner_id: UserId);

    /// The owner marked the order Cooked; drivers should hear about it.
    async fn order_cooked(&self, order: &Order);

    /// Any status or assignment change on the order.
    async fn order_status_changed(&self, order: &Order);
}

/// Outbound mail.
#[async_trait]
pub trait BaseMailer: Send + Sync {
    async fn send_verification_email(&self, email: &str, code: &str);
}

/// Notifier that only logs. Default wiring when no push transport is
/// attached.
pub struct LogNotifier;

#[async_trait]
impl BaseNotifier for LogNotifier {
    async fn pending_order_created(&self, order: &Order, restaurant_owner_id: UserId) {
        info!(order_id = %order.id, owner_id = %restaurant_owner_id, "pending order created");
    }

    async fn order_cooked(&self, order: &Order) {
        info!(order_id = %order.id, "order cooked");
    }

    async fn order_status_changed(&self, order: &Order) {
        info!(order_id = %order.id, status = ?order.status, "order updated");
    }
}

/// Mailer that only logs the code instead of sending anything.
pub struct LogMailer;

#[async_trait]
impl BaseMailer for LogMailer {
    async fn send_verification_email(&self, email: &str, code: &str) {
        info!(email, code, "verification email (log only)");
    }
}
