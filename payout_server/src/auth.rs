//! Vendor access tokens.
//!
//! Vendors receive an HS256-signed JWT when they register or log in. Order and payout routes take a [`JwtClaims`]
//! argument, which is extracted from the `Authorization: Bearer <token>` header and verified against the
//! [`TokenIssuer`] registered as app data. Requests without a valid token are rejected with a 401 before the handler
//! runs.
use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::*;
use payout_engine::db_types::VendorId;
use serde::{Deserialize, Serialize};

use crate::{
    config::AuthConfig,
    errors::{AuthError, ServerError},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// The vendor the token was issued to
    pub sub: VendorId,
    pub iat: i64,
    pub exp: i64,
}

pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime_secs: i64,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        let secret = config.jwt_secret.reveal().as_bytes();
        let lifetime_secs = i64::try_from(config.token_lifetime.as_secs()).unwrap_or(i64::MAX);
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
            lifetime_secs,
        }
    }

    /// Issues a fresh access token for `vendor_id`.
    ///
    /// This method DOES NOT check the vendor's credentials. That must be done before calling it.
    pub fn issue_token(&self, vendor_id: &VendorId) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = JwtClaims { sub: vendor_id.clone(), iat: now, exp: now.saturating_add(self.lifetime_secs) };
        self.sign(&claims)
    }

    pub fn sign(&self, claims: &JwtClaims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenIssueError(e.to_string()))
    }

    /// Checks the signature and expiry of `token` and returns its claims.
    pub fn validate_token(&self, token: &str) -> Result<JwtClaims, AuthError> {
        decode::<JwtClaims>(token, &self.decoding_key, &self.validation).map(|data| data.claims).map_err(|e| {
            debug!("🔐️ Rejected access token. {e}");
            AuthError::InvalidToken
        })
    }
}

fn bearer_token(req: &HttpRequest) -> Option<&str> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    header.strip_prefix("Bearer ").map(str::trim).filter(|token| !token.is_empty())
}

fn claims_from_request(req: &HttpRequest) -> Result<JwtClaims, ServerError> {
    let issuer = req.app_data::<web::Data<TokenIssuer>>().ok_or_else(|| {
        ServerError::ConfigurationError("No token issuer is registered with the application".into())
    })?;
    let token = bearer_token(req).ok_or(AuthError::MissingToken)?;
    let claims = issuer.validate_token(token)?;
    trace!("🔐️ Request authenticated for vendor {}", claims.sub);
    Ok(claims)
}

impl FromRequest for JwtClaims {
    type Error = ServerError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(claims_from_request(req))
    }
}
