use super::errors::AuthError;
use super::role::Role;
use crate::common::entity_ids::UserId;

/// The resolved, authenticated identity making a request.
///
/// Loaded fresh from the user store on every request; only the subject id
/// travels inside the credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub id: UserId,
    pub role: Role,
}

/// Per-request context threaded through every handler call.
///
/// The principal is set once by the gate and immutable afterwards; there is
/// no way to attach one later.
#[derive(Debug, Clone)]
pub struct RequestContext {
    principal: Option<Principal>,
}

impl RequestContext {
    /// Context for a request with no authenticated caller.
    pub fn anonymous() -> Self {
        Self { principal: None }
    }

    /// Context carrying the principal the gate resolved.
    pub fn authenticated(principal: Principal) -> Self {
        Self {
            principal: Some(principal),
        }
    }

    /// The resolved principal, if the gate attached one.
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    /// The resolved principal, failing closed when the request is anonymous.
    ///
    /// Handlers for role-gated operations can rely on this succeeding; a
    /// failure here means the operation was dispatched without passing the
    /// gate.
    pub fn current_user(&self) -> Result<&Principal, AuthError> {
        self.principal.as_ref().ok_or(AuthError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_context_has_no_user() {
        let ctx = RequestContext::anonymous();
        assert!(ctx.principal().is_none());
        assert!(ctx.current_user().is_err());
    }

    #[test]
    fn authenticated_context_returns_the_principal() {
        let principal = Principal {
            id: UserId::new(),
            role: Role::Client,
        };
        let ctx = RequestContext::authenticated(principal);
        assert_eq!(ctx.current_user().unwrap().id, principal.id);
    }
}
