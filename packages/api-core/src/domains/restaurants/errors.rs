use thiserror::Error;

use crate::common::auth::AuthError;

/// Restaurant operation failures.
#[derive(Error, Debug)]
pub enum RestaurantError {
    #[error("forbidden")]
    Forbidden(#[from] AuthError),

    #[error("restaurant not found")]
    NotFound,

    #[error("no permission to edit a restaurant you do not own")]
    NotOwner,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
