//! Ownership policy for orders: pure predicates, no I/O.
//!
//! Handlers call these after the gate's role check has passed and after the
//! order has been loaded. Passing the coarse role gate never implies
//! passing these per-instance checks.

use super::models::{Order, OrderStatus};
use crate::common::auth::{Principal, Role};

/// Whether this principal may see the order at all.
///
/// Clients see their own orders, drivers the orders assigned to them,
/// owners the orders placed against their restaurants. An unassigned order
/// is invisible to every driver.
pub fn can_view(principal: &Principal, order: &Order) -> bool {
    match principal.role {
        Role::Client => order.customer_id == principal.id,
        Role::Delivery => order.driver_id == Some(principal.id),
        Role::Owner => order.restaurant_owner_id == principal.id,
    }
}

/// Whether this principal may move the order to `target`.
///
/// Owners cook (Pending→Cooking→Cooked), drivers deliver
/// (Cooked→PickedUp→Delivered), clients never edit status. The target must
/// be the immediate successor of the order's current status, so a
/// delivered order can never be edited again and no step can be skipped or
/// reversed.
pub fn can_edit_status(principal: &Principal, order: &Order, target: OrderStatus) -> bool {
    let role_allows = match principal.role {
        Role::Client => false,
        Role::Owner => matches!(target, OrderStatus::Cooking | OrderStatus::Cooked),
        Role::Delivery => matches!(target, OrderStatus::PickedUp | OrderStatus::Delivered),
    };

    role_allows && order.status.next() == Some(target)
}
