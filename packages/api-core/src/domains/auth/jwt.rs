use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::common::UserId;

/// JWT Claims - data stored in the token
///
/// Only the subject id travels in the credential; role and profile are
/// loaded fresh from the user store on every request.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub id: UserId,
}

/// JWT Service - creates and verifies bearer tokens
///
/// Tokens carry no `exp` claim: a signed token stays valid until the
/// signing secret rotates. Known limitation of the current credential
/// design; do not treat these tokens as short-lived.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Create new JWT service from the server secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign a new token for the given subject
    pub fn sign(&self, user_id: UserId) -> Result<String> {
        let claims = Claims { id: user_id };
        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a token.
    ///
    /// Fails closed: a tampered payload, a wrong signature, or a payload
    /// without the subject id field all return an error. Callers treat any
    /// failure uniformly as "unauthenticated".
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        // No expiry is modeled on these tokens.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}
