/**
 * Token Service
 *
 * This module handles JWT issuance and verification for user identity.
 *
 * The signing key is loaded once at startup and injected through app state;
 * there is no hot rotation (restart to rotate) and no per-call environment
 * reads. Verification is synchronous and stateless so every protected route
 * can apply the same gate without a shared session table.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token lifetime in seconds (1 hour)
pub const TOKEN_LIFETIME_SECS: u64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Issues and verifies signed, time-bounded identity tokens
///
/// Cheap to clone; both keys are derived from the same HMAC secret at
/// construction time.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Create a token service from an HMAC secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    /// Mint a token for a user
    ///
    /// The claim subject is the user's ID, issued now and expiring after
    /// `TOKEN_LIFETIME_SECS`.
    pub fn issue(&self, subject: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_with_lifetime(subject, TOKEN_LIFETIME_SECS)
    }

    /// Mint a token with an explicit lifetime in seconds
    pub fn issue_with_lifetime(
        &self,
        subject: Uuid,
        lifetime_secs: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let claims = Claims {
            sub: subject.to_string(),
            exp: now + lifetime_secs,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// Verify a token and return its claims
    ///
    /// Fails if the signature does not match, the payload is malformed, or
    /// the token has expired. Expiry is checked with zero leeway so a token
    /// is rejected at exactly its expiration time.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;

        // The library's expiry check passes when exp == now; a token is only
        // valid strictly before its expiration time, so recheck here.
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        if now >= token_data.claims.exp {
            return Err(jsonwebtoken::errors::ErrorKind::ExpiredSignature.into());
        }

        Ok(token_data.claims)
    }

    /// Verify a token and return the embedded subject
    pub fn verify_subject(&self, token: &str) -> Result<Uuid, jsonwebtoken::errors::Error> {
        let claims = self.verify(token)?;
        Uuid::parse_str(&claims.sub)
            .map_err(|_| jsonwebtoken::errors::ErrorKind::InvalidSubject.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify() {
        let service = TokenService::new("test-secret");
        let user_id = Uuid::new_v4();

        let token = service.issue(user_id).unwrap();
        assert!(!token.is_empty());

        let claims = service.verify(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.exp, claims.iat + TOKEN_LIFETIME_SECS);
    }

    #[test]
    fn test_verify_subject() {
        let service = TokenService::new("test-secret");
        let user_id = Uuid::new_v4();

        let token = service.issue(user_id).unwrap();
        assert_eq!(service.verify_subject(&token).unwrap(), user_id);
    }

    #[test]
    fn test_verify_wrong_key() {
        let issuer = TokenService::new("secret-a");
        let verifier = TokenService::new("secret-b");

        let token = issuer.issue(Uuid::new_v4()).unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_verify_malformed_token() {
        let service = TokenService::new("test-secret");
        assert!(service.verify("invalid.token.here").is_err());
    }

    #[test]
    fn test_verify_at_expiry_boundary() {
        let service = TokenService::new("test-secret");

        // exp == now: the token must already be rejected
        let token = service.issue_with_lifetime(Uuid::new_v4(), 0).unwrap();
        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_verify_before_expiry_accepted() {
        let service = TokenService::new("test-secret");

        let token = service
            .issue_with_lifetime(Uuid::new_v4(), TOKEN_LIFETIME_SECS)
            .unwrap();
        assert!(service.verify(&token).is_ok());
    }
}
