use async_trait::async_trait;
use tracing::debug;

use super::context::{Principal, RequestContext};
use super::errors::AuthError;
use super::registry::{role_requirement, Operation};

/// Outcome of identity resolution.
///
/// Absence of valid authentication is not a fault: every failure mode
/// (missing credential, bad signature, unknown subject, storage error)
/// collapses to `Anonymous`.
#[derive(Debug, Clone)]
pub enum Resolution {
    Principal(Principal),
    Anonymous,
}

/// Seam between the gate and the identity resolver.
///
/// Keeps this module free of any dependency on the token codec or the user
/// store; the concrete resolver lives in `domains::auth`.
#[async_trait]
pub trait ResolveIdentity: Send + Sync {
    async fn resolve(&self, raw_token: Option<&str>) -> Resolution;
}

/// Request-level access decision.
///
/// 1. No declared requirement: allow unconditionally, no resolution is
///    attempted and the returned context is anonymous.
/// 2. Requirement declared but no credential supplied: deny without
///    touching the resolver or the user store.
/// 3. Credential resolves to `Anonymous`: deny.
/// 4. `Any` requirement: allow every authenticated principal.
/// 5. Otherwise allow iff the principal's role is declared for the
///    operation.
///
/// On allow, the resolved principal rides in the returned context for
/// downstream ownership checks and handlers.
pub async fn authorize<R>(
    op: Operation,
    raw_token: Option<&str>,
    resolver: &R,
) -> Result<RequestContext, AuthError>
where
    R: ResolveIdentity + ?Sized,
{
    let Some(requirement) = role_requirement(op) else {
        return Ok(RequestContext::anonymous());
    };

    let raw = raw_token.ok_or(AuthError::Forbidden)?;

    let principal = match resolver.resolve(Some(raw)).await {
        Resolution::Principal(principal) => principal,
        Resolution::Anonymous => return Err(AuthError::Forbidden),
    };

    if requirement.permits(principal.role) {
        debug!(?op, role = ?principal.role, "request authorized");
        Ok(RequestContext::authenticated(principal))
    } else {
        debug!(?op, role = ?principal.role, "role not permitted");
        Err(AuthError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::auth::Role;
    use crate::common::entity_ids::UserId;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Resolver double that counts how often it is consulted.
    struct FixedResolver {
        resolution: Resolution,
        calls: AtomicUsize,
    }

    impl FixedResolver {
        fn new(resolution: Resolution) -> Self {
            Self {
                resolution,
                calls: AtomicUsize::new(0),
            }
        }

        fn principal(role: Role) -> Self {
            Self::new(Resolution::Principal(Principal {
                id: UserId::new(),
                role,
            }))
        }
    }

    #[async_trait]
    impl ResolveIdentity for FixedResolver {
        async fn resolve(&self, _raw_token: Option<&str>) -> Resolution {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.resolution.clone()
        }
    }

    #[tokio::test]
    async fn public_operation_allows_anonymous_without_resolving() {
        let resolver = FixedResolver::new(Resolution::Anonymous);
        let ctx = authorize(Operation::Login, None, &resolver).await.unwrap();
        assert!(ctx.principal().is_none());
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn missing_credential_denies_without_resolving() {
        let resolver = FixedResolver::principal(Role::Owner);
        let result = authorize(Operation::CreateRestaurant, None, &resolver).await;
        assert!(matches!(result, Err(AuthError::Forbidden)));
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unresolvable_credential_is_denied() {
        let resolver = FixedResolver::new(Resolution::Anonymous);
        let result = authorize(Operation::CreateOrder, Some("garbage"), &resolver).await;
        assert!(matches!(result, Err(AuthError::Forbidden)));
    }

    #[tokio::test]
    async fn any_requirement_admits_every_role() {
        for role in [Role::Client, Role::Owner, Role::Delivery] {
            let resolver = FixedResolver::principal(role);
            let ctx = authorize(Operation::GetOrder, Some("token"), &resolver)
                .await
                .unwrap();
            assert_eq!(ctx.current_user().unwrap().role, role);
        }
    }

    #[tokio::test]
    async fn wrong_role_is_denied() {
        let resolver = FixedResolver::principal(Role::Client);
        let result = authorize(Operation::TakeOrder, Some("token"), &resolver).await;
        assert!(matches!(result, Err(AuthError::Forbidden)));
    }

    #[tokio::test]
    async fn matching_role_is_allowed_and_principal_attached() {
        let resolver = FixedResolver::principal(Role::Delivery);
        let ctx = authorize(Operation::TakeOrder, Some("token"), &resolver)
            .await
            .unwrap();
        assert_eq!(ctx.current_user().unwrap().role, Role::Delivery);
    }
}
