//! Bearer token issuing and checking.
//!
//! Tokens are HS256 JWTs. [`authorize`] runs in front of every protected
//! route: a missing, malformed, badly signed or expired token is rejected
//! with 401, a valid token issued for another audience or by another issuer
//! with 403. On success the [`Claims`] are stored in the request extensions.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
    typed_header::TypedHeaderRejection,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::server::ServerState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    /// The token cannot be trusted.
    Unauthorized,
    /// The token is genuine but not meant for this API.
    Forbidden,
}

impl From<AuthError> for StatusCode {
    fn from(value: AuthError) -> Self {
        match value {
            AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

#[derive(Clone)]
pub struct JwtService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    issuer: String,
    audience: String,
    expiry: Duration,
}

impl JwtService {
    pub fn new(secret: &[u8], issuer: String, audience: String, expiry: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            issuer,
            audience,
            expiry,
        }
    }

    /// Issue a token for `email`, valid from now for the configured expiry.
    pub fn generate_security_token(&self, email: &str) -> jsonwebtoken::errors::Result<String> {
        let now = Utc::now();
        let expires = now
            .checked_add_signed(self.expiry)
            .ok_or_else(|| ErrorKind::MissingRequiredClaim("exp".to_string()))?;
        let claims = Claims {
            sub: email.to_string(),
            email: email.to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        match decode::<Claims>(token, &self.decoding, &validation) {
            Ok(data) => Ok(data.claims),
            Err(err) => match err.kind() {
                ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => {
                    tracing::warn!("token rejected: {err}");
                    Err(AuthError::Forbidden)
                }
                _ => {
                    tracing::debug!("token rejected: {err}");
                    Err(AuthError::Unauthorized)
                }
            },
        }
    }
}

pub(crate) async fn authorize(
    State(state): State<ServerState>,
    auth_header: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Ok(TypedHeader(Authorization(bearer))) = auth_header else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    let claims = state.jwt.validate(bearer.token())?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
