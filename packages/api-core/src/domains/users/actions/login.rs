use tracing::{debug, info};

use crate::domains::users::errors::UserError;
use crate::kernel::Deps;

/// Verify credentials and issue a bearer token for the account.
pub async fn login(email: &str, password: &str, deps: &Deps) -> Result<String, UserError> {
    let user = deps
        .users
        .find_user_by_email(email)
        .await?
        .ok_or(UserError::NotFound)?;

    if !user.check_password(password) {
        debug!(user_id = %user.id, "login with wrong password");
        return Err(UserError::WrongPassword);
    }

    let token = deps.jwt.sign(user.id)?;
    info!(user_id = %user.id, "login succeeded");
    Ok(token)
}
