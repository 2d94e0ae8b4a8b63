//! HS256 access tokens carrying the credential identifier in an `id` claim.

use chrono::Utc;
use domains::{AccessTokenVerifier, AuthError};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    id: String,
    exp: i64,
}

pub struct JwtAccessTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    age_secs: i64,
}

impl JwtAccessTokens {
    pub fn new(access_token_key: &SecretString, age_secs: u64) -> Self {
        let secret = access_token_key.expose_secret().as_bytes();
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            age_secs: i64::try_from(age_secs).unwrap_or(i64::MAX),
        }
    }

    /// Signs a token for `user_id` valid for the configured age.
    pub fn issue(&self, user_id: &str) -> Result<String, AuthError> {
        let claims = Claims {
            id: user_id.to_owned(),
            exp: Utc::now().timestamp().saturating_add(self.age_secs),
        };
        self.sign(&claims)
    }

    fn sign(&self, claims: &Claims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|err| AuthError::InvalidToken(err.to_string()))
    }
}

impl AccessTokenVerifier for JwtAccessTokens {
    fn verify(&self, token: &str) -> Result<String, AuthError> {
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|err| {
            tracing::debug!(error = %err, "access token rejected");
            match err.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidToken(err.to_string()),
            }
        })?;
        if data.claims.id.is_empty() {
            return Err(AuthError::InvalidToken("token carries no user id".into()));
        }
        Ok(data.claims.id)
    }
}
