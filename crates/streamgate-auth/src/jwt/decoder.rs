//! Stateless JWT validation.
//!
//! The decoder only checks signature and expiry. Revocation and suspension
//! are stateful concerns handled by the [`Authenticator`](crate::Authenticator)
//! against the session store.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use streamgate_core::config::auth::AuthConfig;

use super::claims::Claims;

/// Validates session token signatures and expiry claims.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew
        validation.required_spec_claims.clear();

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes a token, returning its claims only when the signature is
    /// valid and the expiry claim has not passed. Any failure maps to
    /// `None` — a structurally invalid token never reaches the store.
    pub fn decode(&self, token: &str) -> Option<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .ok()
            .map(|data| data.claims)
    }
}
