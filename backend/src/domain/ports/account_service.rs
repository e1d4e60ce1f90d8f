//! Driving port for account registration and login use-cases.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! register or authenticate accounts without knowing (or importing) the
//! backing infrastructure. This makes HTTP handler tests deterministic
//! because they can substitute a test double instead of wiring persistence.

use async_trait::async_trait;

use crate::domain::auth::Credentials;
use crate::domain::error::Error;
use crate::domain::password::PasswordHash;
use crate::domain::user::{User, UserId};

/// Message shown when login credentials do not match an account.
///
/// Unknown usernames and wrong passwords share this text so responses do
/// not reveal which accounts exist.
pub const INCORRECT_CREDENTIALS_MESSAGE: &str = "Incorrect username or password.";

/// Message shown when a registration races or repeats an existing name.
pub const USERNAME_TAKEN_MESSAGE: &str = "That username is already taken, please choose another.";

/// Domain use-case port for account management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create a new account and return it.
    ///
    /// Fails with an [`crate::domain::ErrorCode::Conflict`] error carrying
    /// [`USERNAME_TAKEN_MESSAGE`] when the username is already held.
    async fn register(&self, credentials: &Credentials) -> Result<User, Error>;

    /// Validate credentials and return the matching account.
    ///
    /// Fails with an [`crate::domain::ErrorCode::Unauthorized`] error
    /// carrying [`INCORRECT_CREDENTIALS_MESSAGE`] for unknown usernames and
    /// wrong passwords alike.
    async fn authenticate(&self, credentials: &Credentials) -> Result<User, Error>;
}

/// In-memory account service for tests that do not exercise persistence.
///
/// Registration echoes the credentials back under user id 1;
/// `ana` / `lapicera` authenticates successfully.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAccountService;

impl FixtureAccountService {
    fn fixture_user(credentials: &Credentials) -> User {
        User::new(
            UserId::new(1),
            credentials.username().clone(),
            PasswordHash::from_stored("$2b$12$fixture".to_owned()),
        )
    }
}

#[async_trait]
impl AccountService for FixtureAccountService {
    async fn register(&self, credentials: &Credentials) -> Result<User, Error> {
        Ok(Self::fixture_user(credentials))
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<User, Error> {
        if credentials.username().as_str() == "ana" && credentials.password() == "lapicera" {
            Ok(Self::fixture_user(credentials))
        } else {
            Err(Error::unauthorized(INCORRECT_CREDENTIALS_MESSAGE))
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[case("ana", "lapicera", true)]
    #[case("ana", "lapiz", false)]
    #[case("bruno", "lapicera", false)]
    #[tokio::test]
    async fn fixture_service_authenticates_only_the_built_in_account(
        #[case] username: &str,
        #[case] password: &str,
        #[case] should_succeed: bool,
    ) {
        let service = FixtureAccountService;
        let creds = Credentials::try_from_parts(username, password).expect("credentials shape");
        let result = service.authenticate(&creds).await;
        match (should_succeed, result) {
            (true, Ok(user)) => assert_eq!(user.id(), UserId::new(1)),
            (false, Err(err)) => {
                assert_eq!(err.code(), ErrorCode::Unauthorized);
                assert_eq!(err.message(), INCORRECT_CREDENTIALS_MESSAGE);
            }
            (true, Err(err)) => panic!("expected success, got error: {err:?}"),
            (false, Ok(user)) => panic!("expected failure, got user: {}", user.id()),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_service_registers_any_account() {
        let service = FixtureAccountService;
        let creds = Credentials::try_from_parts("bruno", "tiza").expect("credentials shape");
        let user = service.register(&creds).await.expect("registration");
        assert_eq!(user.username().as_str(), "bruno");
    }
}
