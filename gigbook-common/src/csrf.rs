//! Anti-forgery token signing and validation
//!
//! Tokens are stateless: `ISSUED_MS.SIGNATURE` where the signature is the
//! SHA-256 of `ISSUED_MS:SECRET_KEY` as 64 hex characters. A token is accepted
//! when the signature matches and its age is within the time limit.
//!
//! # Pure Functions
//!
//! No HTTP framework dependencies here; the axum middleware lives in
//! gigbook-web.

use sha2::{Digest, Sha256};
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Future-dated tokens within this window are tolerated (clock skew only)
const MAX_FUTURE_SKEW_MS: i64 = 5_000;

/// Token validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsrfError {
    /// No token in the header or form body
    Missing,

    /// Token is not `ISSUED_MS.HEX`
    Malformed,

    /// Signature does not match (forged or signed with another key)
    InvalidSignature,

    /// Token older than the configured time limit
    Expired { age_ms: i64 },

    /// Token issued further in the future than clock skew allows
    IssuedInFuture { ahead_ms: i64 },
}

impl fmt::Display for CsrfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsrfError::Missing => write!(f, "The CSRF token is missing."),
            CsrfError::Malformed => write!(f, "The CSRF token is malformed."),
            CsrfError::InvalidSignature => write!(f, "The CSRF token is invalid."),
            CsrfError::Expired { .. } => write!(f, "The CSRF token has expired."),
            CsrfError::IssuedInFuture { ahead_ms } => {
                write!(f, "The CSRF token was issued {}ms in the future.", ahead_ms)
            }
        }
    }
}

impl std::error::Error for CsrfError {}

/// Current Unix time in milliseconds
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Calculate the signature for a token issued at `issued_ms`
///
/// # Examples
///
/// ```
/// use gigbook_common::csrf::sign;
///
/// let sig = sign(1_730_000_000_000, "secret");
/// assert_eq!(sig.len(), 64);
/// assert_ne!(sig, sign(1_730_000_000_000, "other"));
/// ```
pub fn sign(issued_ms: i64, secret_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}:{}", issued_ms, secret_key).as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Issue a token at `issued_ms`
pub fn issue_token_at(issued_ms: i64, secret_key: &str) -> String {
    format!("{}.{}", issued_ms, sign(issued_ms, secret_key))
}

/// Issue a token at the current time
pub fn issue_token(secret_key: &str) -> String {
    issue_token_at(now_millis(), secret_key)
}

/// Validate `token` against `secret_key` at time `now_ms`
pub fn validate_token_at(
    token: &str,
    secret_key: &str,
    time_limit: Duration,
    now_ms: i64,
) -> Result<(), CsrfError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(CsrfError::Missing);
    }

    let (issued, signature) = token.split_once('.').ok_or(CsrfError::Malformed)?;
    let issued_ms: i64 = issued.parse().map_err(|_| CsrfError::Malformed)?;
    if signature.len() != 64 || !signature.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(CsrfError::Malformed);
    }

    if !constant_time_eq(signature.as_bytes(), sign(issued_ms, secret_key).as_bytes()) {
        return Err(CsrfError::InvalidSignature);
    }

    let age_ms = now_ms - issued_ms;
    if age_ms < -MAX_FUTURE_SKEW_MS {
        return Err(CsrfError::IssuedInFuture { ahead_ms: -age_ms });
    }
    if age_ms > time_limit.as_millis() as i64 {
        return Err(CsrfError::Expired { age_ms });
    }

    Ok(())
}

/// Validate `token` at the current time
pub fn validate_token(token: &str, secret_key: &str, time_limit: Duration) -> Result<(), CsrfError> {
    validate_token_at(token, secret_key, time_limit, now_millis())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "test-secret-key";
    const HOUR: Duration = Duration::from_secs(3600);
    const ISSUED: i64 = 1_730_000_000_000;

    #[test]
    fn test_fresh_token_is_valid() {
        let token = issue_token_at(ISSUED, KEY);
        assert_eq!(validate_token_at(&token, KEY, HOUR, ISSUED + 10), Ok(()));
    }

    #[test]
    fn test_live_token_round_trip() {
        let token = issue_token(KEY);
        assert!(validate_token(&token, KEY, HOUR).is_ok());
    }

    #[test]
    fn test_empty_token_is_missing() {
        assert_eq!(validate_token_at("  ", KEY, HOUR, ISSUED), Err(CsrfError::Missing));
    }

    #[test]
    fn test_malformed_tokens() {
        for token in ["abc", "123", "x.y", "123.nothex", "123.abcd"] {
            assert_eq!(
                validate_token_at(token, KEY, HOUR, ISSUED),
                Err(CsrfError::Malformed),
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn test_other_key_is_rejected() {
        let token = issue_token_at(ISSUED, "another-key");
        assert_eq!(
            validate_token_at(&token, KEY, HOUR, ISSUED),
            Err(CsrfError::InvalidSignature)
        );
    }

    #[test]
    fn test_tampered_timestamp_is_rejected() {
        let token = issue_token_at(ISSUED, KEY);
        let (_, sig) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", ISSUED + 3_600_000, sig);
        assert_eq!(
            validate_token_at(&forged, KEY, HOUR, ISSUED + 3_600_000),
            Err(CsrfError::InvalidSignature)
        );
    }

    #[test]
    fn test_expired_token() {
        let token = issue_token_at(ISSUED, KEY);
        let later = ISSUED + 3_600_001;
        assert_eq!(
            validate_token_at(&token, KEY, HOUR, later),
            Err(CsrfError::Expired { age_ms: 3_600_001 })
        );
        // Exactly at the limit is still accepted
        assert!(validate_token_at(&token, KEY, HOUR, ISSUED + 3_600_000).is_ok());
    }

    #[test]
    fn test_future_token_beyond_skew() {
        let token = issue_token_at(ISSUED + 60_000, KEY);
        assert_eq!(
            validate_token_at(&token, KEY, HOUR, ISSUED),
            Err(CsrfError::IssuedInFuture { ahead_ms: 60_000 })
        );
        let slightly_ahead = issue_token_at(ISSUED + 1_000, KEY);
        assert!(validate_token_at(&slightly_ahead, KEY, HOUR, ISSUED).is_ok());
    }
}
