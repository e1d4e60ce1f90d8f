//! Authentication primitives such as login credentials.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::user::{Username, UsernameValidationError};

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Username exceeded the maximum accepted length.
    UsernameTooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::UsernameTooLong { max } => {
                write!(f, "username must be at most {max} characters")
            }
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

impl From<UsernameValidationError> for CredentialsValidationError {
    fn from(err: UsernameValidationError) -> Self {
        match err {
            UsernameValidationError::Empty => Self::EmptyUsername,
            UsernameValidationError::TooLong { max } => Self::UsernameTooLong { max },
        }
    }
}

/// Validated credentials used for registration and login.
///
/// ## Invariants
/// - `username` passes [`Username`] validation, so it is trimmed and
///   non-empty.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use aula_backend::domain::Credentials;
///
/// let creds = Credentials::try_from_parts("ana", "lapicera").unwrap();
/// assert_eq!(creds.username().as_str(), "ana");
/// assert_eq!(creds.password(), "lapicera");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: Username,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Validate raw form fields into credentials.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsValidationError`] when either field fails
    /// validation.
    pub fn try_from_parts(
        username: &str,
        password: &str,
    ) -> Result<Self, CredentialsValidationError> {
        let username = Username::new(username)?;
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }
        Ok(Self {
            username,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// The validated username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// The plaintext password for hashing or verification.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

// The plaintext must not leak through debug formatting.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"..")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;
    use crate::domain::user::USERNAME_MAX_LENGTH;

    #[rstest]
    #[case::plain("ana", "lapicera", "ana", "lapicera")]
    #[case::trims_username("  ana  ", "lapicera", "ana", "lapicera")]
    #[case::keeps_password_whitespace("ana", "  lapicera  ", "ana", "  lapicera  ")]
    fn accepts_valid_parts(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected_username: &str,
        #[case] expected_password: &str,
    ) {
        let creds = Credentials::try_from_parts(username, password).expect("valid credentials");
        assert_eq!(creds.username().as_str(), expected_username);
        assert_eq!(creds.password(), expected_password);
    }

    #[rstest]
    #[case::empty_username("", "lapicera", CredentialsValidationError::EmptyUsername)]
    #[case::blank_username("   ", "lapicera", CredentialsValidationError::EmptyUsername)]
    #[case::empty_password("ana", "", CredentialsValidationError::EmptyPassword)]
    fn rejects_invalid_parts(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: CredentialsValidationError,
    ) {
        assert_eq!(
            Credentials::try_from_parts(username, password),
            Err(expected)
        );
    }

    #[test]
    fn rejects_overlong_username() {
        let raw = "x".repeat(USERNAME_MAX_LENGTH + 1);
        assert_eq!(
            Credentials::try_from_parts(&raw, "lapicera"),
            Err(CredentialsValidationError::UsernameTooLong {
                max: USERNAME_MAX_LENGTH
            })
        );
    }

    #[test]
    fn debug_output_redacts_the_password() {
        let creds = Credentials::try_from_parts("ana", "lapicera").expect("valid credentials");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("ana"));
        assert!(!rendered.contains("lapicera"));
    }
}
