use crate::common::auth::RequestContext;
use crate::common::UserId;
use crate::domains::users::errors::UserError;
use crate::domains::users::models::User;
use crate::kernel::Deps;

/// The caller's own account.
pub async fn me(ctx: &RequestContext, deps: &Deps) -> Result<User, UserError> {
    let principal = ctx.current_user()?;
    deps.users
        .find_user_by_id(principal.id)
        .await?
        .ok_or(UserError::NotFound)
}

/// Another user's profile by id.
pub async fn user_profile(user_id: UserId, deps: &Deps) -> Result<User, UserError> {
    deps.users
        .find_user_by_id(user_id)
        .await?
        .ok_or(UserError::NotFound)
}
