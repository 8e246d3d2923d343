use tracing::info;

use crate::common::auth::{RequestContext, Role};
use crate::common::OrderId;
use crate::domains::orders::errors::OrderError;
use crate::domains::orders::models::{Order, OrderStatus};
use crate::domains::orders::policy;
use crate::kernel::Deps;

/// Advance an order's status.
///
/// Defense in depth on top of the role gate: the caller must be able to
/// see this specific order, and the requested status must be one their
/// role may set from the order's current state. When the owner marks the
/// order Cooked, the cooked signal fires for drivers; every successful
/// edit fires the generic update signal.
pub async fn edit_order(
    ctx: &RequestContext,
    order_id: OrderId,
    status: OrderStatus,
    deps: &Deps,
) -> Result<Order, OrderError> {
    let principal = ctx.current_user()?;

    let order = deps
        .orders
        .find_order_by_id(order_id)
        .await?
        .ok_or(OrderError::NotFound)?;

    if !policy::can_view(principal, &order) {
        return Err(OrderError::CannotSee);
    }
    if !policy::can_edit_status(principal, &order, status) {
        return Err(OrderError::CannotEdit);
    }

    let updated = deps
        .orders
        .update_order_status(order.id, status)
        .await?
        .ok_or(OrderError::NotFound)?;

    if principal.role == Role::Owner && updated.status == OrderStatus::Cooked {
        deps.notifier.order_cooked(&updated).await;
    }
    deps.notifier.order_status_changed(&updated).await;

    info!(order_id = %updated.id, status = ?updated.status, "order status advanced");
    Ok(updated)
}
