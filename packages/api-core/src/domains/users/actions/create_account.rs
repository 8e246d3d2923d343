use tracing::info;

use crate::common::auth::Role;
use crate::domains::users::errors::UserError;
use crate::domains::users::models::{User, Verification};
use crate::kernel::Deps;

/// Create a new account.
///
/// Rejects duplicate emails. The account starts unverified; a verification
/// code is stored and mailed out.
pub async fn create_account(
    email: &str,
    password: &str,
    role: Role,
    deps: &Deps,
) -> Result<User, UserError> {
    if deps.users.find_user_by_email(email).await?.is_some() {
        return Err(UserError::EmailTaken);
    }

    let user = User::create(email, password, role)?;
    let user = deps.users.insert_user(user).await?;

    let verification = Verification::new(user.id);
    deps.users.insert_verification(verification.clone()).await?;
    deps.mailer
        .send_verification_email(&user.email, &verification.code)
        .await;

    info!(user_id = %user.id, role = ?role, "account created");
    Ok(user)
}
