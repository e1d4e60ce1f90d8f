//! Account domain services.
//!
//! This module implements the driving port for registration and login over
//! a user repository, keeping password handling in one place: plaintext is
//! hashed or verified here and never reaches an adapter.

use std::sync::Arc;

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::auth::Credentials;
use crate::domain::error::Error;
use crate::domain::password::PasswordHash;
use crate::domain::ports::{
    AccountService, INCORRECT_CREDENTIALS_MESSAGE, NewUser, USERNAME_TAKEN_MESSAGE,
    UserPersistenceError, UserRepository,
};
use crate::domain::user::User;

/// Account service backed by hashed-password verification.
#[derive(Clone)]
pub struct PasswordAccountService<R> {
    users: Arc<R>,
}

impl<R> PasswordAccountService<R> {
    /// Create a new service over the given repository.
    pub const fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

impl<R> PasswordAccountService<R>
where
    R: UserRepository,
{
    fn map_persistence_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::DuplicateUsername { username } => {
                tracing::debug!(%username, "registration lost the uniqueness race");
                Error::conflict(USERNAME_TAKEN_MESSAGE)
            }
        }
    }

    /// Run bcrypt work off the async executor.
    async fn derive_hash(credentials: &Credentials) -> Result<PasswordHash, Error> {
        let plaintext = Zeroizing::new(credentials.password().to_owned());
        tokio::task::spawn_blocking(move || PasswordHash::derive(&plaintext))
            .await
            .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
            .map_err(|err| Error::internal(err.to_string()))
    }

    async fn verify_password(user: User, credentials: &Credentials) -> Result<(User, bool), Error> {
        let plaintext = Zeroizing::new(credentials.password().to_owned());
        tokio::task::spawn_blocking(move || {
            let matched = user.verify_password(&plaintext);
            (user, matched)
        })
        .await
        .map_err(|err| Error::internal(format!("password verification task failed: {err}")))
    }
}

#[async_trait]
impl<R> AccountService for PasswordAccountService<R>
where
    R: UserRepository,
{
    async fn register(&self, credentials: &Credentials) -> Result<User, Error> {
        let password_hash = Self::derive_hash(credentials).await?;
        let user = self
            .users
            .insert(NewUser {
                username: credentials.username().clone(),
                password_hash,
            })
            .await
            .map_err(Self::map_persistence_error)?;
        tracing::info!(user_id = %user.id(), "account registered");
        Ok(user)
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<User, Error> {
        let found = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(Self::map_persistence_error)?;
        let Some(user) = found else {
            return Err(Error::unauthorized(INCORRECT_CREDENTIALS_MESSAGE));
        };
        let (user, matched) = Self::verify_password(user, credentials).await?;
        if matched {
            tracing::info!(user_id = %user.id(), "login succeeded");
            Ok(user)
        } else {
            tracing::debug!(user_id = %user.id(), "login rejected on password mismatch");
            Err(Error::unauthorized(INCORRECT_CREDENTIALS_MESSAGE))
        }
    }
}
