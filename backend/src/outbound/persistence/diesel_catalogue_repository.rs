//! SQLite-backed catalogue read adapter.
//!
//! All reads return collections in ascending id order, which matches the
//! insertion order of seeded data. Detail lookups fetch the parent row and
//! its children inside one blocking task so each call costs one checkout.

use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::catalogue::{Course, CourseDetail, CourseId, LessonDetail, LessonId};
use crate::domain::ports::{CatalogueRepository, CatalogueRepositoryError};

use super::models::{CourseRow, LessonRow, OptionRow};
use super::pool::{DbPool, RunError};
use super::schema::{courses, lessons, options};

/// Diesel-backed implementation of the catalogue read port.
#[derive(Clone)]
pub struct DieselCatalogueRepository {
    pool: DbPool,
}

impl DieselCatalogueRepository {
    /// Create a new repository over the given connection pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool and query failures to domain read errors.
fn map_run_error(error: RunError) -> CatalogueRepositoryError {
    match error {
        RunError::Pool(err) => CatalogueRepositoryError::connection(err.to_string()),
        RunError::Query(err) => CatalogueRepositoryError::query(err.to_string()),
    }
}

#[async_trait]
impl CatalogueRepository for DieselCatalogueRepository {
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogueRepositoryError> {
        let rows = self
            .pool
            .run(|conn| {
                courses::table
                    .order(courses::id.asc())
                    .select(CourseRow::as_select())
                    .load(conn)
            })
            .await
            .map_err(map_run_error)?;
        Ok(rows.into_iter().map(Course::from).collect())
    }

    async fn find_course(
        &self,
        id: CourseId,
    ) -> Result<Option<CourseDetail>, CatalogueRepositoryError> {
        let detail = self
            .pool
            .run(move |conn| {
                let Some(course) = courses::table
                    .find(id.value())
                    .select(CourseRow::as_select())
                    .first(conn)
                    .optional()?
                else {
                    return Ok(None);
                };
                let lesson_rows: Vec<LessonRow> = lessons::table
                    .filter(lessons::course_id.eq(id.value()))
                    .order(lessons::id.asc())
                    .select(LessonRow::as_select())
                    .load(conn)?;
                Ok(Some((course, lesson_rows)))
            })
            .await
            .map_err(map_run_error)?;
        Ok(detail.map(|(course, lesson_rows)| CourseDetail {
            course: course.into(),
            lessons: lesson_rows.into_iter().map(Into::into).collect(),
        }))
    }

    async fn find_lesson(
        &self,
        id: LessonId,
    ) -> Result<Option<LessonDetail>, CatalogueRepositoryError> {
        let detail = self
            .pool
            .run(move |conn| {
                let Some(lesson) = lessons::table
                    .find(id.value())
                    .select(LessonRow::as_select())
                    .first(conn)
                    .optional()?
                else {
                    return Ok(None);
                };
                let option_rows: Vec<OptionRow> = options::table
                    .filter(options::lesson_id.eq(id.value()))
                    .order(options::id.asc())
                    .select(OptionRow::as_select())
                    .load(conn)?;
                Ok(Some((lesson, option_rows)))
            })
            .await
            .map_err(map_run_error)?;
        Ok(detail.map(|(lesson, option_rows)| LessonDetail {
            lesson: lesson.into(),
            options: option_rows.into_iter().map(Into::into).collect(),
        }))
    }
}
