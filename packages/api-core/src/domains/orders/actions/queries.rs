use crate::common::auth::{RequestContext, Role};
use crate::common::OrderId;
use crate::domains::orders::errors::OrderError;
use crate::domains::orders::models::{Order, OrderStatus};
use crate::domains::orders::policy;
use crate::kernel::Deps;

/// The caller's orders, scoped by role: a client's own orders, a driver's
/// assigned orders, or every order against an owner's restaurants.
pub async fn get_orders(
    ctx: &RequestContext,
    status: Option<OrderStatus>,
    deps: &Deps,
) -> Result<Vec<Order>, OrderError> {
    let principal = ctx.current_user()?;

    let orders = match principal.role {
        Role::Client => deps.orders.orders_for_customer(principal.id, status).await?,
        Role::Delivery => deps.orders.orders_for_driver(principal.id, status).await?,
        Role::Owner => deps.orders.orders_for_owner(principal.id, status).await?,
    };

    Ok(orders)
}

/// A single order, if the caller may see it.
pub async fn get_order(
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

    if !policy::can_view(principal, &order) {
        return Err(OrderError::CannotSee);
    }

    Ok(order)
}
