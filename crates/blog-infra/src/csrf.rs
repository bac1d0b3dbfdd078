//! JWT-signed CSRF tokens.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use blog_core::ports::{CsrfError, CsrfGuard};

const PURPOSE: &str = "csrf";

/// CSRF token configuration.
#[derive(Debug, Clone)]
pub struct CsrfConfig {
    pub secret: String,
    pub ttl_secs: i64,
}

/// Internal claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    purpose: String,
    nonce: String,
    exp: i64,
    iat: i64,
}

/// Stateless CSRF protection: a token is valid if it carries our signature
/// and has not expired.
pub struct JwtCsrfService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl JwtCsrfService {
    pub fn new(config: CsrfConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl_secs: config.ttl_secs,
        }
    }
}

impl CsrfGuard for JwtCsrfService {
    fn issue(&self) -> Result<String, CsrfError> {
        let now = Utc::now();
        let exp = now + TimeDelta::seconds(self.ttl_secs);

        let claims = Claims {
            purpose: PURPOSE.to_string(),
            nonce: Uuid::new_v4().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| CsrfError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<(), CsrfError> {
        if token.trim().is_empty() {
            return Err(CsrfError::Missing);
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => CsrfError::Expired,
                _ => CsrfError::Invalid(e.to_string()),
            })?;

        if token_data.claims.purpose != PURPOSE {
            return Err(CsrfError::Invalid("wrong token purpose".to_string()));
        }

        Ok(())
    }
}
