/// Authorization module for the marketplace API
///
/// Every inbound operation passes through the access gate before its
/// handler runs:
///
/// ```rust,ignore
/// use api_core::common::auth::{authorize, Operation};
///
/// let ctx = authorize(Operation::EditOrder, raw_token, &resolver).await?;
/// let order = actions::edit_order(&ctx, input, &deps).await?;
/// ```
///
/// The gate only answers the coarse question "may this role call this
/// operation at all". Per-instance rules (who may see or mutate a specific
/// order or restaurant) live in the domain policy modules and run after the
/// target entity is loaded; passing the gate never implies passing those.
mod context;
mod errors;
mod gate;
mod registry;
mod role;

pub use context::{Principal, RequestContext};
pub use errors::AuthError;
pub use gate::{authorize, Resolution, ResolveIdentity};
pub use registry::{role_requirement, Operation};
pub use role::{Role, RoleRequirement};
