//! Ownership policy for restaurants (and the payments hanging off them).

use super::models::Restaurant;
use crate::common::auth::Principal;

/// Single-owner model: mutation rights require an exact id match. There is
/// no role-based escape hatch; another Owner is as unauthorized as anyone.
pub fn is_owner(principal: &Principal, restaurant: &Restaurant) -> bool {
    restaurant.owner_id == principal.id
}
