use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::authz::{claim_types, Claim, Principal};
use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: Arc<Vec<u8>>,
    pub exp_hours: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<Vec<u8>>, exp_hours: i64) -> Self {
        Self {
            secret: Arc::new(secret.into()),
            exp_hours,
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        let secret = std::env::var("JWT_SECRET").map_err(|_| AppError::configuration("JWT_SECRET not set"))?;
        let exp_hours = std::env::var("JWT_EXP_HOURS")
            .map(|val| val.parse::<i64>())
            .unwrap_or(Ok(24))
            .map_err(|_| AppError::configuration("JWT_EXP_HOURS must be a valid integer"))?;

        Ok(Self::new(secret.into_bytes(), exp_hours))
    }

    /// Sign a token carrying the identity and the principal's claims.
    pub fn encode(&self, identity: &TokenIdentity) -> Result<String, AppError> {
        use chrono::{Duration, Utc};

        let now = Utc::now();
        let exp = Duration::try_hours(self.exp_hours)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| AppError::configuration("JWT_EXP_HOURS is out of range"))?;

        let claims = TokenClaims {
            sub: identity.subject.clone(),
            exp: exp.timestamp() as usize,
            iat: now.timestamp() as usize,
            name: identity.name.clone(),
            email: identity.email.clone(),
            claims: identity.claims.clone(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &EncodingKey::from_secret(&self.secret))
            .map_err(|err| AppError::token(err.to_string()))
    }

    pub fn decode(&self, token: &str) -> Result<TokenClaims, AppError> {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        jsonwebtoken::decode::<TokenClaims>(token, &DecodingKey::from_secret(&self.secret), &validation)
            .map(|data| data.claims)
            .map_err(|err| AppError::token(err.to_string()))
    }
}

/// Who a token is issued for.
#[derive(Debug, Clone, Default)]
pub struct TokenIdentity {
    pub subject: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub claims: Vec<Claim>,
}

impl TokenIdentity {
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_claim(mut self, claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.claims.push(Claim::new(claim_type, value));
        self
    }

    pub fn with_claims(mut self, claims: impl IntoIterator<Item = Claim>) -> Self {
        self.claims.extend(claims);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub claims: Vec<Claim>,
}

impl From<TokenClaims> for Principal {
    fn from(token: TokenClaims) -> Self {
        let mut principal = Principal::new(token.sub);
        if let Some(name) = token.name {
            principal = principal.with_claim(claim_types::NAME, name);
        }
        if let Some(email) = token.email {
            principal = principal.with_claim(claim_types::EMAIL, email);
        }
        principal.with_claims(token.claims)
    }
}

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub principal: Principal,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| AppError::unauthorized("Authorization header missing"))?;

        let claims = state.jwt.decode(token)?;

        Ok(AuthUser {
            principal: claims.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_keeps_claims() {
        let config = JwtConfig::new("test-secret", 1);
        let identity = TokenIdentity::new("user-1")
            .with_name("Ada")
            .with_claim(claim_types::HEAD_ADMIN, "CallOfDuty4");

        let token = config.encode(&identity).unwrap();
        let decoded = config.decode(&token).unwrap();

        assert_eq!(decoded.sub, "user-1");
        assert_eq!(decoded.name.as_deref(), Some("Ada"));
        assert_eq!(decoded.claims, vec![Claim::new(claim_types::HEAD_ADMIN, "CallOfDuty4")]);
    }

    #[test]
    fn test_encode_carries_email() {
        let config = JwtConfig::new("test-secret", 1);
        let identity = TokenIdentity::new("user-1").with_email("ada@example.com");

        let decoded = config.decode(&config.encode(&identity).unwrap()).unwrap();
        assert_eq!(decoded.email.as_deref(), Some("ada@example.com"));
        assert_eq!(decoded.name, None);
    }

    #[test]
    fn test_encode_rejects_out_of_range_expiry() {
        for exp_hours in [i64::MAX, i64::MIN] {
            let err = JwtConfig::new("s", exp_hours).encode(&TokenIdentity::new("u")).unwrap_err();
            assert!(matches!(err, AppError::Configuration(_)));
        }
    }

    #[test]
    fn test_decode_rejects_wrong_secret() {
        let token = JwtConfig::new("one", 1).encode(&TokenIdentity::new("u")).unwrap();
        let err = JwtConfig::new("two", 1).decode(&token).unwrap_err();
        assert!(matches!(err, AppError::Token(_)));
    }

    #[test]
    fn test_principal_from_token_adds_profile_claims() {
        let token = TokenClaims {
            sub: "u".to_string(),
            exp: 0,
            iat: 0,
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            claims: vec![Claim::new(claim_types::SENIOR_ADMIN, "true")],
        };
        let principal = Principal::from(token);
        assert_eq!(principal.username(), Some("Ada"));
        assert_eq!(principal.email(), Some("ada@example.com"));
        assert!(principal.is_senior_admin());
    }
}
