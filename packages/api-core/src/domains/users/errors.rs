use thiserror::Error;

use crate::common::auth::AuthError;

/// User operation failures.
#[derive(Error, Debug)]
pub enum UserError {
    #[error("forbidden")]
    Forbidden(#[from] AuthError),

    #[error("there is already a user with that email")]
    EmailTaken,

    #[error("user not found")]
    NotFound,

    #[error("wrong password")]
    WrongPassword,

    #[error("verification not found")]
    VerificationNotFound,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
