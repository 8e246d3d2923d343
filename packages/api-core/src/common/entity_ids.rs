//! Typed ID definitions for all domain entities.
//!
//! Type aliases over [`Id`] give compile-time safety for ID usage: a
//! `UserId` cannot be passed where an `OrderId` is expected.

pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for User entities (customers, owners, drivers).
pub struct User;

/// Marker type for Restaurant entities.
pub struct Restaurant;

/// Marker type for Dish entities (menu items).
pub struct Dish;

/// Marker type for Order entities.
pub struct Order;

/// Marker type for Payment entities (promotion purchases).
pub struct Payment;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for User entities.
pub type UserId = Id<User>;

/// Typed ID for Restaurant entities.
pub type RestaurantId = Id<Restaurant>;

/// Typed ID for Dish entities.
pub type DishId = Id<Dish>;

/// Typed ID for Order entities.
pub type OrderId = Id<Order>;

/// Typed ID for Payment entities.
pub type PaymentId = Id<Payment>;
