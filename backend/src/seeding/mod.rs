//! Startup seeding orchestration.
//!
//! When enabled, the catalogue is populated from the built-in demo dataset
//! (or a JSON file override) before the server starts accepting traffic.
//! Seeding is idempotent: a store that already holds courses is left
//! untouched and the startup logs say so.

use std::path::PathBuf;
use std::sync::Arc;

use mockable::Env;
use seed_data::{DatasetError, SeedDataset, demo_dataset};
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{SeedRepository, SeedRepositoryError, SeedingResult};

const ENABLED_ENV: &str = "SEED_DEMO_DATA";
const DATASET_FILE_ENV: &str = "SEED_DATASET_FILE";

/// Configuration values controlling catalogue seeding at startup.
#[derive(Debug, Clone, Default)]
pub struct SeedSettings {
    /// Enable seeding on startup.
    pub is_enabled: bool,
    /// Optional dataset file overriding the built-in demo dataset.
    pub dataset_path: Option<PathBuf>,
}

impl SeedSettings {
    /// Read seeding settings from the environment.
    ///
    /// `SEED_DEMO_DATA` enables seeding when set to `1`, `true`, `yes`, or
    /// `y`; any other value (or its absence) disables it. `SEED_DATASET_FILE`
    /// points at a JSON dataset to load instead of the demo data.
    pub fn from_env<E: Env>(env: &E) -> Self {
        let is_enabled = env.string(ENABLED_ENV).is_some_and(|value| {
            matches!(
                value.to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "y"
            )
        });
        let dataset_path = env.string(DATASET_FILE_ENV).map(PathBuf::from);
        Self {
            is_enabled,
            dataset_path,
        }
    }
}

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// Dataset loading or validation failed.
    #[error("seed dataset error: {0}")]
    Dataset(#[from] DatasetError),
    /// Applying the dataset to the store failed.
    #[error("seed persistence error: {0}")]
    Persistence(#[from] SeedRepositoryError),
}

/// Apply the seed dataset on startup when enabled.
///
/// Returns `None` when seeding is disabled, otherwise the outcome of the
/// apply attempt.
pub async fn seed_catalogue_on_startup(
    settings: &SeedSettings,
    repository: Arc<dyn SeedRepository>,
) -> Result<Option<SeedingResult>, StartupSeedingError> {
    if !settings.is_enabled {
        info!(reason = "disabled", "catalogue seeding skipped");
        return Ok(None);
    }

    let dataset = load_dataset(settings)?;
    let result = repository.apply(&dataset).await?;

    match result {
        SeedingResult::Applied => {
            info!(
                courses = dataset.courses().len(),
                lessons = dataset.lessons().len(),
                options = dataset.options().len(),
                "catalogue seeding applied"
            );
        }
        SeedingResult::AlreadySeeded => {
            info!("catalogue already seeded; skipping");
        }
    }

    Ok(Some(result))
}

fn load_dataset(settings: &SeedSettings) -> Result<SeedDataset, DatasetError> {
    match &settings.dataset_path {
        Some(path) => {
            info!(path = %path.display(), "loading seed dataset from file");
            SeedDataset::from_file(path)
        }
        None => Ok(demo_dataset()),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use mockable::MockEnv;
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::MockSeedRepository;

    fn env_with(enabled: Option<&str>, path: Option<&str>) -> MockEnv {
        let enabled = enabled.map(str::to_owned);
        let path = path.map(str::to_owned);
        let mut env = MockEnv::new();
        env.expect_string().returning(move |name| match name {
            ENABLED_ENV => enabled.clone(),
            DATASET_FILE_ENV => path.clone(),
            _ => None,
        });
        env
    }

    #[rstest]
    #[case::absent(None, false)]
    #[case::truthy(Some("1"), true)]
    #[case::wordy(Some("yes"), true)]
    #[case::falsy(Some("0"), false)]
    #[case::garbage(Some("sometimes"), false)]
    fn settings_parse_the_enabled_toggle(#[case] value: Option<&str>, #[case] expected: bool) {
        let settings = SeedSettings::from_env(&env_with(value, None));
        assert_eq!(settings.is_enabled, expected);
    }

    #[rstest]
    fn settings_pick_up_the_dataset_override() {
        let settings = SeedSettings::from_env(&env_with(Some("1"), Some("/tmp/dataset.json")));
        assert_eq!(settings.dataset_path, Some(PathBuf::from("/tmp/dataset.json")));
    }

    #[rstest]
    #[tokio::test]
    async fn disabled_seeding_never_touches_the_repository() {
        let settings = SeedSettings::default();
        let repo = MockSeedRepository::new();
        let outcome = seed_catalogue_on_startup(&settings, Arc::new(repo))
            .await
            .expect("skip");
        assert!(outcome.is_none());
    }

    #[rstest]
    #[case::fresh(SeedingResult::Applied)]
    #[case::repeat(SeedingResult::AlreadySeeded)]
    #[tokio::test]
    async fn enabled_seeding_reports_the_apply_outcome(#[case] result: SeedingResult) {
        let settings = SeedSettings {
            is_enabled: true,
            dataset_path: None,
        };
        let mut repo = MockSeedRepository::new();
        repo.expect_apply().returning(move |_| Ok(result));
        let outcome = seed_catalogue_on_startup(&settings, Arc::new(repo))
            .await
            .expect("apply");
        assert_eq!(outcome, Some(result));
    }

    #[rstest]
    #[tokio::test]
    async fn missing_dataset_files_surface_as_errors() {
        let settings = SeedSettings {
            is_enabled: true,
            dataset_path: Some(PathBuf::from("/nonexistent/dataset.json")),
        };
        let repo = MockSeedRepository::new();
        let err = seed_catalogue_on_startup(&settings, Arc::new(repo))
            .await
            .expect_err("missing file");
        assert!(matches!(err, StartupSeedingError::Dataset(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn persistence_failures_surface_as_errors() {
        let settings = SeedSettings {
            is_enabled: true,
            dataset_path: None,
        };
        let mut repo = MockSeedRepository::new();
        repo.expect_apply()
            .returning(|_| Err(SeedRepositoryError::connection("pool exhausted")));
        let err = seed_catalogue_on_startup(&settings, Arc::new(repo))
            .await
            .expect_err("apply failure");
        assert!(matches!(err, StartupSeedingError::Persistence(_)));
    }
}
