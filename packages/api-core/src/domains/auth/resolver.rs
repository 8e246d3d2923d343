use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::jwt::JwtService;
use crate::common::auth::{Resolution, ResolveIdentity};
use crate::kernel::store::UserStore;

/// Resolves a raw bearer credential into a principal.
///
/// Decodes the token, then loads the subject from the user store so the
/// role reflects the account as it is now, not as it was when the token
/// was signed.
pub struct IdentityResolver {
    jwt: JwtService,
    users: Arc<dyn UserStore>,
}

impl IdentityResolver {
    pub fn new(jwt: JwtService, users: Arc<dyn UserStore>) -> Self {
        Self { jwt, users }
    }
}

#[async_trait]
impl ResolveIdentity for IdentityResolver {
    async fn resolve(&self, raw_token: Option<&str>) -> Resolution {
        let Some(raw) = raw_token else {
            return Resolution::Anonymous;
        };

        let claims = match self.jwt.verify(raw) {
            Ok(claims) => claims,
            Err(err) => {
                debug!("token verification failed: {err}");
                return Resolution::Anonymous;
            }
        };

        match self.users.find_user_by_id(claims.id).await {
            Ok(Some(user)) => Resolution::Principal(user.principal()),
            Ok(None) => {
                debug!(user_id = %claims.id, "token subject no longer exists");
                Resolution::Anonymous
            }
            Err(err) => {
                warn!("principal lookup failed: {err}");
                Resolution::Anonymous
            }
        }
    }
}
