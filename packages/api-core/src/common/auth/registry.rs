//! Static role declarations, one per exposed operation.
//!
//! The gate consults this table before dispatch. An operation that is
//! absent from the table (returns `None`) is public and requires no
//! authentication at all; `Some(Any)` requires a valid principal of any
//! role.

use super::role::{Role, RoleRequirement};

/// Every operation the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    // users
    CreateAccount,
    Login,
    Me,
    UserProfile,
    EditProfile,
    VerifyEmail,
    // restaurants
    Restaurants,
    Restaurant,
    SearchRestaurant,
    CreateRestaurant,
    EditRestaurant,
    DeleteRestaurant,
    CreateDish,
    // orders
    CreateOrder,
    GetOrders,
    GetOrder,
    EditOrder,
    TakeOrder,
    // payments
    CreatePayment,
    GetPayments,
}

/// The declared role requirement for an operation, or `None` if public.
pub fn role_requirement(op: Operation) -> Option<RoleRequirement> {
    use Operation::*;

    match op {
        CreateAccount | Login | Restaurants | Restaurant | SearchRestaurant => None,
        Me | UserProfile | EditProfile | VerifyEmail | GetOrders | GetOrder | EditOrder => {
            Some(RoleRequirement::Any)
        }
        CreateRestaurant | EditRestaurant | DeleteRestaurant | CreateDish | CreatePayment
        | GetPayments => Some(RoleRequirement::OneOf(&[Role::Owner])),
        CreateOrder => Some(RoleRequirement::OneOf(&[Role::Client])),
        TakeOrder => Some(RoleRequirement::OneOf(&[Role::Delivery])),
    }
}
