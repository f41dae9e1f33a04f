use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::database::models::User;
use crate::database::{DatabaseError, Store};

use super::password::{hash_password, is_hashed, verify_password};
use super::{AuthError, SessionKeys, SessionRejection};

/// Who is making the request, resolved from a verified session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Issues sessions on login and validates them on every protected request.
#[derive(Clone)]
pub struct SessionService {
    keys: SessionKeys,
    users: Arc<dyn Store<User>>,
}

impl SessionService {
    pub fn new(keys: SessionKeys, users: Arc<dyn Store<User>>) -> Self {
        Self { keys, users }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.keys.ttl_secs()
    }

    /// Check credentials and mint a token. Unknown email and wrong password
    /// are indistinguishable to the caller.
    pub async fn issue_session(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<(String, User), AuthError> {
        let user = self
            .users
            .find_one_where(&[("email", email.into())])
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password) {
            tracing::warn!("Login rejected for user {}: password mismatch", user.id);
            return Err(AuthError::InvalidCredentials);
        }

        let user = self.upgrade_legacy_password(user, password).await;
        let token = self.keys.issue(user.id, now)?;

        tracing::info!("Session issued for user {}", user.id);
        Ok((token, user))
    }

    /// Verify the token and re-resolve its subject. Every failure is an
    /// `Unauthenticated` rejection except storage outages.
    pub async fn validate(&self, token: Option<&str>, now: DateTime<Utc>) -> Result<Identity, AuthError> {
        let token = token.ok_or(AuthError::Unauthenticated(SessionRejection::NoToken))?;
        let claims = self
            .keys
            .decode(token, now)
            .map_err(AuthError::Unauthenticated)?;

        match self.users.find_by_id(claims.sub).await {
            Ok(user) => Ok(Identity::from(&user)),
            Err(DatabaseError::NotFound(_)) => {
                Err(AuthError::Unauthenticated(SessionRejection::SubjectMissing))
            }
            Err(e) => Err(e.into()),
        }
    }

    // Best effort: a failed rehash must not fail the login.
    async fn upgrade_legacy_password(&self, mut user: User, password: &str) -> User {
        if is_hashed(&user.password) {
            return user;
        }
        match hash_password(password) {
            Ok(hash) => {
                user.password = hash;
                match self.users.update(&user).await {
                    Ok(updated) => return updated,
                    Err(e) => tracing::warn!("Could not rehash password for user {}: {}", user.id, e),
                }
            }
            Err(e) => tracing::warn!("Could not rehash password for user {}: {}", user.id, e),
        }
        user
    }
}
