mod password;
mod user;
mod verification;

pub use password::{hash_password, verify_password};
pub use user::User;
pub use verification::Verification;
