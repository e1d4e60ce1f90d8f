//! SQLite-backed catalogue seeding adapter.
//!
//! Applies a complete seed dataset inside one transaction: a store that
//! already holds courses is left untouched, and a failed insert rolls the
//! whole attempt back, so repeated startups are idempotent.

use async_trait::async_trait;
use diesel::prelude::*;
use seed_data::SeedDataset;

use crate::domain::ports::{SeedRepository, SeedRepositoryError, SeedingResult};

use super::models::{NewCourseRow, NewLessonRow, NewOptionRow};
use super::pool::{DbPool, RunError};
use super::schema::{courses, lessons, options};

/// Diesel-backed implementation of the catalogue seeding port.
#[derive(Clone)]
pub struct DieselSeedRepository {
    pool: DbPool,
}

impl DieselSeedRepository {
    /// Create a new repository over the given connection pool.
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool and query failures to domain seeding errors.
fn map_run_error(error: RunError) -> SeedRepositoryError {
    match error {
        RunError::Pool(err) => SeedRepositoryError::connection(err.to_string()),
        RunError::Query(err) => SeedRepositoryError::query(err.to_string()),
    }
}

fn apply_dataset(
    conn: &mut SqliteConnection,
    dataset: &SeedDataset,
) -> diesel::QueryResult<SeedingResult> {
    conn.transaction(|conn| {
        let existing: i64 = courses::table.count().get_result(conn)?;
        if existing > 0 {
            return Ok(SeedingResult::AlreadySeeded);
        }

        let course_rows: Vec<NewCourseRow<'_>> = dataset
            .courses()
            .iter()
            .map(|course| NewCourseRow {
                id: course.id,
                title: &course.title,
                short_description: &course.short_description,
                image_path: &course.image_path,
            })
            .collect();
        diesel::insert_into(courses::table)
            .values(&course_rows)
            .execute(conn)?;

        let lesson_rows: Vec<NewLessonRow<'_>> = dataset
            .lessons()
            .iter()
            .map(|lesson| NewLessonRow {
                id: lesson.id,
                title: &lesson.title,
                course_id: lesson.course_id,
            })
            .collect();
        diesel::insert_into(lessons::table)
            .values(&lesson_rows)
            .execute(conn)?;

        let option_rows: Vec<NewOptionRow<'_>> = dataset
            .options()
            .iter()
            .map(|option| NewOptionRow {
                title: &option.title,
                audio_filename: &option.audio_filename,
                image_filename: &option.image_filename,
                lesson_id: option.lesson_id,
            })
            .collect();
        diesel::insert_into(options::table)
            .values(&option_rows)
            .execute(conn)?;

        Ok(SeedingResult::Applied)
    })
}

#[async_trait]
impl SeedRepository for DieselSeedRepository {
    async fn apply(&self, dataset: &SeedDataset) -> Result<SeedingResult, SeedRepositoryError> {
        let dataset = dataset.clone();
        self.pool
            .run(move |conn| apply_dataset(conn, &dataset))
            .await
            .map_err(map_run_error)
    }
}
