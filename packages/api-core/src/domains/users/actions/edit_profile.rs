use tracing::info;

use crate::common::auth::RequestContext;
use crate::domains::users::errors::UserError;
use crate::domains::users::models::{hash_password, User, Verification};
use crate::kernel::Deps;

#[derive(Debug, Default, Clone)]
pub struct EditProfileInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Update the caller's own profile.
///
/// Changing the email resets the verified flag and issues a fresh
/// verification code; the old code is superseded. Changing the password
/// re-hashes it.
pub async fn edit_profile(
    ctx: &RequestContext,
    input: EditProfileInput,
    deps: &Deps,
) -> Result<User, UserError> {
    let principal = ctx.current_user()?;

    let mut user = deps
        .users
        .find_user_by_id(principal.id)
        .await?
        .ok_or(UserError::NotFound)?;

    if let Some(email) = input.email {
        if email != user.email {
            user.email = email;
            user.verified = false;

            let verification = Verification::new(user.id);
            deps.users.insert_verification(verification.clone()).await?;
            deps.mailer
                .send_verification_email(&user.email, &verification.code)
                .await;
        }
    }

    if let Some(password) = input.password {
        user.password_hash = hash_password(&password)?;
    }

    let user = deps.users.update_user(user).await?;
    info!(user_id = %user.id, "profile updated");
    Ok(user)
}
