//! Password hashing primitives.
//!
//! Wraps bcrypt behind a newtype so the rest of the domain never touches
//! plaintext after registration. The stored form is the opaque bcrypt
//! string, which embeds its own salt and cost.

use std::fmt;

/// A derived password hash.
///
/// ## Invariants
/// - Holds only the derived hash; no plaintext survives construction.
/// - Verification never panics: a malformed stored hash verifies as false.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

/// Error raised when hash derivation itself fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordHashError {
    message: String,
}

impl fmt::Display for PasswordHashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "password hashing failed: {}", self.message)
    }
}

impl std::error::Error for PasswordHashError {}

impl PasswordHash {
    /// Derive a salted hash from plaintext at the library default cost.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordHashError`] when the underlying derivation fails;
    /// this does not happen for ordinary UTF-8 passwords.
    pub fn derive(plaintext: &str) -> Result<Self, PasswordHashError> {
        bcrypt::hash(plaintext, bcrypt::DEFAULT_COST)
            .map(Self)
            .map_err(|err| PasswordHashError {
                message: err.to_string(),
            })
    }

    /// Wrap a hash string loaded from the store.
    ///
    /// No validation happens here; a corrupted value simply fails
    /// verification later.
    pub const fn from_stored(hash: String) -> Self {
        Self(hash)
    }

    /// Check plaintext against the stored hash.
    ///
    /// Returns false for mismatches and for malformed stored hashes alike.
    #[must_use]
    pub fn verify(&self, plaintext: &str) -> bool {
        bcrypt::verify(plaintext, &self.0).unwrap_or(false)
    }

    /// The opaque stored form, for persistence adapters.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

// The derived hash stays out of logs; only its presence is debuggable.
impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[test]
    fn derive_then_verify_round_trips() {
        let hash = PasswordHash::derive("correct horse battery staple").expect("derivation");
        assert!(hash.verify("correct horse battery staple"));
        assert!(!hash.verify("incorrect horse"));
    }

    #[test]
    fn salting_makes_hashes_unique() {
        let first = PasswordHash::derive("secret").expect("derivation");
        let second = PasswordHash::derive("secret").expect("derivation");
        assert_ne!(first.as_str(), second.as_str());
    }

    #[rstest]
    #[case::empty("")]
    #[case::garbage("not-a-bcrypt-hash")]
    #[case::truncated("$2b$12$abcdef")]
    fn malformed_stored_hashes_verify_false(#[case] stored: &str) {
        let hash = PasswordHash::from_stored(stored.to_owned());
        assert!(!hash.verify("anything"));
    }

    #[test]
    fn debug_output_redacts_the_hash() {
        let hash = PasswordHash::derive("secret").expect("derivation");
        assert_eq!(format!("{hash:?}"), "PasswordHash(..)");
    }
}
