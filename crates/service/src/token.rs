//! Signed bearer tokens (HS256) carrying an administrator's email and role.
//!
//! Verification checks signature and expiry only; issuer and audience are not used.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::administrator::domain::Role;
use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub email: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Fails when `ttl_hours` does not fit a chrono `Duration`.
    pub fn new(secret: &str, ttl_hours: i64) -> Result<Self, ServiceError> {
        let ttl = Duration::try_hours(ttl_hours).ok_or(ServiceError::TokenTtl(ttl_hours))?;
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.validate_aud = false;
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        })
    }

    pub fn issue(&self, email: &str, role: Role) -> Result<String, ServiceError> {
        let now = Utc::now();
        let exp = now
            .checked_add_signed(self.ttl)
            .ok_or(ServiceError::TokenTtl(self.ttl.num_hours()))?;
        let claims = TokenClaims {
            email: email.to_string(),
            role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    pub fn verify(&self, token: &str) -> Result<TokenClaims, ServiceError> {
        let data = decode::<TokenClaims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_carries_email_and_role() {
        let svc = TokenService::new("test-secret", 24).unwrap();
        let token = svc.issue("adm@example.com", Role::Admin).unwrap();
        let claims = svc.verify(&token).unwrap();
        assert_eq!(claims.email, "adm@example.com");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn role_claim_uses_wire_name() {
        let svc = TokenService::new("test-secret", 1).unwrap();
        let token = svc.issue("e@example.com", Role::Editor).unwrap();
        let no_check = {
            let mut v = Validation::new(Algorithm::HS256);
            v.insecure_disable_signature_validation();
            v
        };
        let raw = decode::<serde_json::Value>(&token, &DecodingKey::from_secret(b"ignored"), &no_check).unwrap();
        assert_eq!(raw.claims["role"], "Editor");
        assert_eq!(raw.claims["email"], "e@example.com");
    }

    #[test]
    fn other_secret_is_rejected() {
        let token = TokenService::new("one", 1).unwrap().issue("a@b.com", Role::Admin).unwrap();
        assert!(matches!(TokenService::new("two", 1).unwrap().verify(&token), Err(ServiceError::Token(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let svc = TokenService::new("test-secret", 1).unwrap();
        let past = Utc::now() - Duration::hours(2);
        let claims = TokenClaims { email: "a@b.com".into(), role: Role::Admin, iat: past.timestamp(), exp: (past + Duration::minutes(30)).timestamp() };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"test-secret")).unwrap();
        assert!(svc.verify(&token).is_err());
    }

    #[test]
    fn ttl_outside_duration_range_is_an_error() {
        assert!(matches!(TokenService::new("s", i64::MAX), Err(ServiceError::TokenTtl(i64::MAX))));
    }

    #[test]
    fn ttl_past_calendar_range_fails_at_issue() {
        let svc = TokenService::new("s", 100_000_000_000).unwrap();
        assert!(matches!(svc.issue("a@b.com", Role::Admin), Err(ServiceError::TokenTtl(_))));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(TokenService::new("s", 1).unwrap().verify("not.a.token").is_err());
    }
}
