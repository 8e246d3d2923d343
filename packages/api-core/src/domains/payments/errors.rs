use thiserror::Error;

use crate::common::auth::AuthError;

/// Payment operation failures.
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("forbidden")]
    Forbidden(#[from] AuthError),

    #[error("restaurant not found")]
    RestaurantNotFound,

    #[error("no permission to create a payment for this restaurant")]
    NotOwner,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
