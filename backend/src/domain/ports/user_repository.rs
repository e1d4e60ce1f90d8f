//! Port abstraction for user persistence adapters and their errors.
//!
//! The uniqueness of usernames is enforced by the store itself, so
//! concurrent registrations race safely: exactly one insert wins and the
//! rest surface [`UserPersistenceError::DuplicateUsername`].

use async_trait::async_trait;

use crate::domain::password::PasswordHash;
use crate::domain::user::{User, UserId, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another account already holds the requested username.
        DuplicateUsername { username: String } => "username already taken: {username}",
    }
}

/// A user record awaiting its store-assigned identifier.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Validated account name.
    pub username: Username,
    /// Derived password hash.
    pub password_hash: PasswordHash,
}

/// Port for reading and writing user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account and return it with its assigned identifier.
    ///
    /// Returns [`UserPersistenceError::DuplicateUsername`] when the store's
    /// uniqueness constraint rejects the name.
    async fn insert(&self, user: NewUser) -> Result<User, UserPersistenceError>;

    /// Fetch an account by username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch an account by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;
}

/// Fixture implementation for tests that do not exercise user persistence.
///
/// Inserts echo the record back with identifier 1; lookups find nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        Ok(User::new(UserId::new(1), user.username, user.password_hash))
    }

    async fn find_by_username(
        &self,
        _username: &Username,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(None)
    }

    async fn find_by_id(&self, _id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    fn sample_new_user() -> NewUser {
        NewUser {
            username: Username::new("ana").expect("valid username"),
            password_hash: PasswordHash::from_stored("$2b$12$fixture".to_owned()),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_insert_assigns_identifier_one() {
        let repo = FixtureUserRepository;
        let user = repo.insert(sample_new_user()).await.expect("insert");
        assert_eq!(user.id(), UserId::new(1));
        assert_eq!(user.username().as_str(), "ana");
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_lookups_find_nothing() {
        let repo = FixtureUserRepository;
        let by_name = repo
            .find_by_username(&Username::new("ana").expect("valid username"))
            .await
            .expect("lookup");
        let by_id = repo.find_by_id(UserId::new(1)).await.expect("lookup");
        assert!(by_name.is_none());
        assert!(by_id.is_none());
    }

    #[test]
    fn duplicate_error_names_the_username() {
        let err = UserPersistenceError::duplicate_username("ana");
        assert_eq!(err.to_string(), "username already taken: ana");
    }
}
