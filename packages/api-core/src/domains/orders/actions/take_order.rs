use tracing::{debug, info};

use crate::common::auth::RequestContext;
use crate::common::OrderId;
use crate::domains::orders::errors::OrderError;
use crate::domains::orders::models::Order;
use crate::kernel::Deps;

/// Claim an unassigned order as its driver.
///
/// Assignment happens at most once. The store's compare-and-set is the
/// authority: under a race, both callers can observe `driver_id` unset,
/// and only the CAS decides the winner; the loser gets the same conflict
/// as a late arrival.
pub async fn take_order(
    ctx: &RequestContext,
    order_id: OrderId,
    deps: &Deps,
) -> Result<Order, OrderError> {
    let principal = ctx.current_user()?;

    let order = deps
        .orders
        .find_order_by_id(order_id)
        .await?
        .ok_or(OrderError::NotFound)?;

    if order.driver_id.is_some() {
        return Err(OrderError::AlreadyTaken);
    }

    if !deps.orders.cas_assign_driver(order.id, principal.id).await? {
        debug!(order_id = %order.id, "lost driver assignment race");
        return Err(OrderError::AlreadyTaken);
    }

    let order = deps
        .orders
        .find_order_by_id(order.id)
        .await?
        .ok_or(OrderError::NotFound)?;

    deps.notifier.order_status_changed(&order).await;

    info!(order_id = %order.id, driver_id = %principal.id, "order taken");
    Ok(order)
}
