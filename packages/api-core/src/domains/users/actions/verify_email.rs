use tracing::info;

use crate::domains::users::errors::UserError;
use crate::kernel::Deps;

/// Confirm an email address with the mailed code.
///
/// The code is single-use: the verification row is deleted once consumed.
pub async fn verify_email(code: &str, deps: &Deps) -> Result<(), UserError> {
    let verification = deps
        .users
        .find_verification_by_code(code)
        .await?
        .ok_or(UserError::VerificationNotFound)?;

    let mut user = deps
        .users
        .find_user_by_id(verification.user_id)
        .await?
        .ok_or(UserError::NotFound)?;

    user.verified = true;
    deps.users.update_user(user).await?;
    deps.users.delete_verification(verification.user_id).await?;

    info!(user_id = %verification.user_id, "email verified");
    Ok(())
}
