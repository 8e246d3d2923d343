// Authentication: token codec and identity resolution.
//
// Authorization (role gate, ownership policies) lives in common::auth and
// the domain policy modules; this module only answers "who is calling".

pub mod jwt;
pub mod resolver;

pub use jwt::{Claims, JwtService};
pub use resolver::IdentityResolver;
