pub mod cookies;
pub mod password;
pub mod session;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::MAX_SESSION_TTL_HOURS;
use crate::database::DatabaseError;

pub use session::{Identity, SessionService};

/// Signed session claims. `sub` is the user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: i64, now: DateTime<Utc>, ttl: Duration) -> Result<Self, AuthError> {
        let expires = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AuthError::Token("session expiry out of range".to_string()))?;
        Ok(Self {
            sub: user_id,
            exp: expires.timestamp(),
            iat: now.timestamp(),
        })
    }
}

/// Why a presented session was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRejection {
    NoToken,
    /// Malformed token, wrong signature or an algorithm other than HS256.
    Unverified,
    Expired,
    SubjectMissing,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("session rejected: {0:?}")]
    Unauthenticated(SessionRejection),

    #[error("JWT error: {0}")]
    Token(String),

    #[error("password hash error: {0}")]
    Hash(String),

    #[error(transparent)]
    Storage(#[from] DatabaseError),
}

/// HS256 signing material plus the session lifetime.
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl SessionKeys {
    pub fn new(secret: &str, ttl_secs: i64) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::Token("JWT secret not configured".to_string()));
        }
        let max_secs = (MAX_SESSION_TTL_HOURS * 3600) as i64;
        let ttl = Some(ttl_secs)
            .filter(|secs| (1..=max_secs).contains(secs))
            .and_then(Duration::try_seconds)
            .ok_or_else(|| AuthError::Token(format!("invalid session lifetime: {}s", ttl_secs)))?;
        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        })
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }

    pub fn issue(&self, user_id: i64, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims::new(user_id, now, self.ttl)?;
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Token(e.to_string()))
    }

    /// Verify signature and algorithm, then check expiry against `now`.
    pub fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, SessionRejection> {
        let mut validation = Validation::new(Algorithm::HS256);
        // expiry is checked below against the caller's clock
        validation.validate_exp = false;

        let claims = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| SessionRejection::Unverified)?
            .claims;

        if now.timestamp() >= claims.exp {
            return Err(SessionRejection::Expired);
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const WEEK: i64 = 604_800;

    fn issued_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn issued_token_carries_subject_and_week_expiry() {
        let keys = SessionKeys::new("s3cret", WEEK).unwrap();
        let token = keys.issue(7, issued_at()).unwrap();

        let claims = keys.decode(&token, issued_at()).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.iat, issued_at().timestamp());
        assert_eq!(claims.exp - claims.iat, WEEK);
    }

    #[test]
    fn token_is_valid_until_expiry_instant() {
        let keys = SessionKeys::new("s3cret", WEEK).unwrap();
        let token = keys.issue(7, issued_at()).unwrap();

        let just_before = issued_at() + Duration::seconds(WEEK - 1);
        let at_expiry = issued_at() + Duration::seconds(WEEK);
        let after = issued_at() + Duration::seconds(WEEK + 1);

        assert!(keys.decode(&token, just_before).is_ok());
        assert_eq!(keys.decode(&token, at_expiry), Err(SessionRejection::Expired));
        assert_eq!(keys.decode(&token, after), Err(SessionRejection::Expired));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let keys = SessionKeys::new("s3cret", WEEK).unwrap();
        let other = SessionKeys::new("different", WEEK).unwrap();
        let token = other.issue(7, issued_at()).unwrap();

        assert_eq!(keys.decode(&token, issued_at()), Err(SessionRejection::Unverified));
    }

    #[test]
    fn token_with_other_algorithm_is_rejected() {
        let keys = SessionKeys::new("s3cret", WEEK).unwrap();
        let claims = Claims::new(7, issued_at(), Duration::seconds(WEEK)).unwrap();
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(b"s3cret"),
        )
        .unwrap();

        assert_eq!(keys.decode(&token, issued_at()), Err(SessionRejection::Unverified));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let keys = SessionKeys::new("s3cret", WEEK).unwrap();
        assert_eq!(keys.decode("not.a.jwt", issued_at()), Err(SessionRejection::Unverified));
    }

    #[test]
    fn empty_secret_is_refused() {
        assert!(matches!(SessionKeys::new("", WEEK), Err(AuthError::Token(_))));
    }

    #[test]
    fn lifetime_must_be_positive_and_representable() {
        assert!(matches!(SessionKeys::new("s3cret", 0), Err(AuthError::Token(_))));
        assert!(matches!(SessionKeys::new("s3cret", -5), Err(AuthError::Token(_))));
        assert!(matches!(SessionKeys::new("s3cret", 3_600_000_000_000_000), Err(AuthError::Token(_))));
        assert!(matches!(SessionKeys::new("s3cret", i64::MAX), Err(AuthError::Token(_))));
    }

    #[test]
    fn expiry_past_the_calendar_is_an_error_not_a_panic() {
        // representable as a duration, but beyond the last representable date
        let ttl = Duration::seconds(9_000_000_000_000);
        assert!(matches!(Claims::new(7, issued_at(), ttl), Err(AuthError::Token(_))));
    }
}
