use thiserror::Error;

/// Gate-level authorization errors.
///
/// A denial carries no reason: a missing credential, a bad signature, an
/// unknown subject, and a wrong role all surface as the same `Forbidden`.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("forbidden")]
    Forbidden,
}
