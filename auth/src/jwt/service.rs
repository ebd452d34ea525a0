use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::AuthError;
use super::errors::SigningError;

/// Tokens are valid from a fixed date rather than their issuance time:
/// 2018-01-01T12:00:00Z.
const NOT_BEFORE_EPOCH: i64 = 1_514_808_000;

/// Issues and verifies bearer tokens signed with a symmetric server secret.
///
/// Stateless once constructed: operations perform no shared mutation and are
/// safe to call concurrently from any number of request tasks. Uses HS256
/// (HMAC with SHA-256).
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenService {
    /// Create a token service from the process-wide signing secret.
    ///
    /// The secret must be non-empty; configuration loading enforces this
    /// before the service is constructed.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a signed token for a username.
    ///
    /// # Errors
    /// * `SigningFailed` - HMAC signing failed
    pub fn issue(&self, username: &str) -> Result<String, SigningError> {
        self.issue_claims(&Claims::new(username, NOT_BEFORE_EPOCH))
    }

    fn issue_claims(&self, claims: &Claims) -> Result<String, SigningError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| SigningError::SigningFailed(e.to_string()))
    }

    /// Verify a token and return its embedded claims.
    ///
    /// Checks the signature against the configured secret and the not-before
    /// bound against the current time. Tokens carry no expiration claim, so
    /// `exp` is neither required nor validated.
    ///
    /// # Errors
    /// * `BadSignature` - Signature does not match the configured secret
    /// * `NotYetValid` - Current time is before the token's `nbf`
    /// * `Malformed` - Any other structural or decoding failure
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(self.algorithm);
        validation.required_spec_claims.clear();
        validation.validate_exp = false;
        validation.validate_nbf = true;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => AuthError::BadSignature,
                    ErrorKind::ImmatureSignature => AuthError::NotYetValid,
                    _ => AuthError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_verify_preserves_username() {
        let tokens = TokenService::new(SECRET);

        let token = tokens.issue("alice").expect("Failed to issue token");
        assert!(!token.is_empty());

        let claims = tokens.verify(&token).expect("Failed to verify token");
        assert_eq!(claims.user, "alice");
        assert_eq!(claims.nbf, NOT_BEFORE_EPOCH);
    }

    #[test]
    fn test_verify_garbage_token() {
        let tokens = TokenService::new(SECRET);

        let result = tokens.verify("not.a.token");
        assert!(matches!(result, Err(AuthError::Malformed(_))));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuer = TokenService::new(b"secret1_at_least_32_bytes_long_key!");
        let verifier = TokenService::new(b"secret2_at_least_32_bytes_long_key!");

        let token = issuer.issue("alice").expect("Failed to issue token");

        let result = verifier.verify(&token);
        assert_eq!(result, Err(AuthError::BadSignature));
    }

    #[test]
    fn test_verify_tampered_token() {
        let tokens = TokenService::new(SECRET);

        let mut token = tokens.issue("alice").expect("Failed to issue token");
        // Flip a character in the payload segment
        let payload_start = token.find('.').unwrap() + 1;
        let original = token.as_bytes()[payload_start];
        let replacement = if original == b'A' { 'B' } else { 'A' };
        token.replace_range(payload_start..payload_start + 1, &replacement.to_string());

        assert!(tokens.verify(&token).is_err());
    }

    #[test]
    fn test_verify_not_yet_valid() {
        let tokens = TokenService::new(SECRET);

        let future_nbf = chrono::Utc::now().timestamp() + 3600;
        let token = tokens
            .issue_claims(&Claims::new("alice", future_nbf))
            .expect("Failed to issue token");

        let result = tokens.verify(&token);
        assert_eq!(result, Err(AuthError::NotYetValid));
    }
}
