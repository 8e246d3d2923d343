use thiserror::Error;

use crate::common::auth::AuthError;

/// Order operation failures.
///
/// Visibility and edit denials are distinct from the gate's uniform
/// `Forbidden`: by the time they fire the caller is authenticated with an
/// admissible role, and the message may name the resource class.
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("forbidden")]
    Forbidden(#[from] AuthError),

    #[error("order not found")]
    NotFound,

    #[error("restaurant not found")]
    RestaurantNotFound,

    #[error("dish not found")]
    DishNotFound,

    #[error("no permission to see this order")]
    CannotSee,

    #[error("no permission to edit this order")]
    CannotEdit,

    #[error("order already has a driver")]
    AlreadyTaken,

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}
