// Food Delivery Marketplace - API Core
//
// Authorization core for a multi-role marketplace API (customers,
// restaurant owners, delivery drivers): token-based identity resolution,
// the per-operation role gate, per-entity ownership policies, and the
// role-gated order lifecycle. Transport and persistence are collaborators
// behind the seams in kernel/.

pub mod api;
pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
