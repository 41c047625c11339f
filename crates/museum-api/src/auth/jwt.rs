//! HS256 token handling for reviewer sessions

use super::models::JwtClaims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Issue a token for `subject` valid for `ttl`.
pub fn issue_token(
    subject: &str,
    secret: &str,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = JwtClaims {
        sub: subject.to_string(),
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify signature and expiry, returning the claims.
pub fn decode_token(token: &str, secret: &str) -> Result<JwtClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-jwt-secret-that-is-at-least-32-chars";

    #[test]
    fn test_issued_token_decodes() {
        let token = issue_token("reviewer-1", SECRET, Duration::hours(1)).unwrap();
        let claims = decode_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, "reviewer-1");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issue_token("reviewer-1", SECRET, Duration::hours(1)).unwrap();
        assert!(decode_token(&token, "another-secret-that-is-32-chars-long!!").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let token = issue_token("reviewer-1", SECRET, Duration::hours(-1)).unwrap();
        assert!(decode_token(&token, SECRET).is_err());
    }
}
