mod create_account;
mod edit_profile;
mod login;
mod queries;
mod verify_email;

pub use create_account::create_account;
pub use edit_profile::{edit_profile, EditProfileInput};
pub use login::login;
pub use queries::{me, user_profile};
pub use verify_email::verify_email;
