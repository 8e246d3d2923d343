// Operation surface
//
// One method per exposed operation, split by domain. Every method runs the
// access gate first with the raw bearer token the transport extracted
// (header, connection params - not this crate's concern), then hands the
// resulting request context to the domain action. Transports bind these
// methods 1:1 to their resolvers or routes.

mod orders;
mod payments;
mod restaurants;
mod users;

use crate::domains::auth::IdentityResolver;
use crate::kernel::Deps;

pub struct Api {
    deps: Deps,
    resolver: IdentityResolver,
}

impl Api {
    pub fn new(deps: Deps) -> Self {
        let resolver = IdentityResolver::new(deps.jwt.clone(), deps.users.clone());
        Self { deps, resolver }
    }

    pub fn deps(&self) -> &Deps {
        &self.deps
    }
}
