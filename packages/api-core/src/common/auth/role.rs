use serde::{Deserialize, Serialize};

/// The three roles a user account can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Customer: places orders against restaurants.
    Client,
    /// Restaurant owner: manages restaurants, dishes, and payments.
    Owner,
    /// Delivery driver: takes cooked orders and delivers them.
    Delivery,
}

/// Roles declared for an operation.
///
/// Operations with no declaration at all are public; see
/// [`role_requirement`](super::role_requirement).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleRequirement {
    /// Any authenticated principal, regardless of role.
    Any,
    /// Only principals holding one of the listed roles.
    OneOf(&'static [Role]),
}

impl RoleRequirement {
    /// Whether a principal with the given role satisfies this requirement.
    pub fn permits(&self, role: Role) -> bool {
        match self {
            RoleRequirement::Any => true,
            RoleRequirement::OneOf(roles) => roles.contains(&role),
        }
    }
}
