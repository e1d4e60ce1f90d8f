//! Read-side port for course catalogue retrieval.
//!
//! This port provides domain-owned views of the catalogue, keeping
//! persistence details behind the hexagonal boundary. Inbound adapters
//! consume these types without coupling to Diesel or any specific data
//! store.

use async_trait::async_trait;

use crate::domain::catalogue::{Course, CourseDetail, CourseId, LessonDetail, LessonId};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading from the catalogue.
    pub enum CatalogueRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "catalogue read connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "catalogue read query failed: {message}",
    }
}

/// Port for reading the course catalogue.
///
/// All collections come back in ascending id order. A missing course or
/// lesson yields `None` rather than an error; callers decide how absence
/// is reported.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueRepository: Send + Sync {
    /// List every course for the catalogue page.
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogueRepositoryError>;

    /// Fetch one course together with its lessons.
    async fn find_course(
        &self,
        id: CourseId,
    ) -> Result<Option<CourseDetail>, CatalogueRepositoryError>;

    /// Fetch one lesson together with its options.
    async fn find_lesson(
        &self,
        id: LessonId,
    ) -> Result<Option<LessonDetail>, CatalogueRepositoryError>;
}

/// Fixture implementation for tests that do not exercise catalogue reads.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCatalogueRepository;

#[async_trait]
impl CatalogueRepository for FixtureCatalogueRepository {
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogueRepositoryError> {
        Ok(Vec::new())
    }

    async fn find_course(
        &self,
        _id: CourseId,
    ) -> Result<Option<CourseDetail>, CatalogueRepositoryError> {
        Ok(None)
    }

    async fn find_lesson(
        &self,
        _id: LessonId,
    ) -> Result<Option<LessonDetail>, CatalogueRepositoryError> {
        Ok(None)
    }
}
