//! Port abstraction for seeding the course catalogue.
//!
//! This port encapsulates the transactional persistence needed to load a
//! complete dataset into an empty store. Adapters must apply the whole
//! dataset atomically and leave an already-populated catalogue untouched.

use async_trait::async_trait;
use seed_data::SeedDataset;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by catalogue seed adapters.
    pub enum SeedRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "catalogue seeding connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "catalogue seeding query failed: {message}",
    }
}

/// Result of attempting to apply a seed dataset.
///
/// Distinguishes a freshly seeded store from one that already held
/// courses, so callers can skip quietly instead of treating a repeat
/// startup as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedingResult {
    /// The store was empty and the dataset was inserted.
    Applied,
    /// The store already held courses; nothing was written.
    AlreadySeeded,
}

/// Port for applying a seed dataset in a single transaction.
///
/// Implementations must:
/// - Check for existing courses and report `AlreadySeeded` without writing.
/// - Insert courses, lessons, and options together.
/// - Roll back all changes if any step fails.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedRepository: Send + Sync {
    /// Apply the dataset if the store holds no courses yet.
    async fn apply(&self, dataset: &SeedDataset) -> Result<SeedingResult, SeedRepositoryError>;
}

/// Fixture implementation that always reports the dataset as applied.
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSeedRepository;

#[cfg(test)]
#[async_trait]
impl SeedRepository for FixtureSeedRepository {
    async fn apply(&self, _dataset: &SeedDataset) -> Result<SeedingResult, SeedRepositoryError> {
        Ok(SeedingResult::Applied)
    }
}
