//! User identity and account types.

use std::fmt;

use serde::{Deserialize, Serialize};

use utoipa::ToSchema;

use crate::domain::password::PasswordHash;

/// Maximum accepted username length in characters.
pub const USERNAME_MAX_LENGTH: usize = 64;

/// Identifier for a stored user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw store identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// The raw store identifier.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated account name.
///
/// ## Invariants
/// - Trimmed of surrounding whitespace.
/// - Non-empty and at most [`USERNAME_MAX_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

/// Validation failures for [`Username`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsernameValidationError {
    /// The name was empty after trimming.
    Empty,
    /// The name exceeded the maximum length.
    TooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },
}

impl fmt::Display for UsernameValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "username must not be empty"),
            Self::TooLong { max } => {
                write!(f, "username must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for UsernameValidationError {}

impl Username {
    /// Validate and normalise an account name.
    ///
    /// # Errors
    ///
    /// Returns [`UsernameValidationError`] when the trimmed name is empty or
    /// longer than [`USERNAME_MAX_LENGTH`] characters.
    pub fn new(name: &str) -> Result<Self, UsernameValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(UsernameValidationError::Empty);
        }
        if trimmed.chars().count() > USERNAME_MAX_LENGTH {
            return Err(UsernameValidationError::TooLong {
                max: USERNAME_MAX_LENGTH,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The validated name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

/// A stored user account.
///
/// The password is held only in derived form and is deliberately
/// write-only: there is no accessor that recovers plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    password_hash: PasswordHash,
}

impl User {
    /// Assemble an account from its stored parts.
    #[must_use]
    pub const fn new(id: UserId, username: Username, password_hash: PasswordHash) -> Self {
        Self {
            id,
            username,
            password_hash,
        }
    }

    /// The account identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// The account name.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// The derived password hash, for persistence adapters.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Check a plaintext password against the stored hash.
    #[must_use]
    pub fn verify_password(&self, plaintext: &str) -> bool {
        self.password_hash.verify(plaintext)
    }
}
