//! Diesel row structs for the SQLite schema.
//!
//! Row structs are internal to the persistence layer; adapters convert them
//! to domain types at the boundary so the domain never sees Diesel traits.

use diesel::prelude::*;

use crate::domain::catalogue::{Course, CourseId, Lesson, LessonId, LessonOption, OptionId};
use crate::domain::password::PasswordHash;
use crate::domain::user::{User, UserId, Username};

use super::schema::{courses, lessons, options, users};

/// A stored user account row.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(super) struct UserRow {
    pub(super) id: i32,
    pub(super) username: String,
    pub(super) password_hash: String,
}

impl UserRow {
    /// Convert the row into its domain form.
    ///
    /// Stored usernames were validated on insert, so a failure here means
    /// the row was edited outside the application.
    pub(super) fn into_domain(self) -> Result<User, String> {
        let username = Username::new(&self.username)
            .map_err(|err| format!("stored username for user {} is invalid: {err}", self.id))?;
        Ok(User::new(
            UserId::new(self.id),
            username,
            PasswordHash::from_stored(self.password_hash),
        ))
    }
}

/// A user row awaiting insertion.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(super) struct NewUserRow<'a> {
    pub(super) username: &'a str,
    pub(super) password_hash: &'a str,
}

/// A stored course row.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = courses)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(super) struct CourseRow {
    pub(super) id: i32,
    pub(super) title: String,
    pub(super) short_description: String,
    pub(super) image_path: String,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        Self {
            id: CourseId::new(row.id),
            title: row.title,
            short_description: row.short_description,
            image_path: row.image_path,
        }
    }
}

/// A course row awaiting insertion, with an explicit seed identifier.
#[derive(Debug, Insertable)]
#[diesel(table_name = courses)]
pub(super) struct NewCourseRow<'a> {
    pub(super) id: i32,
    pub(super) title: &'a str,
    pub(super) short_description: &'a str,
    pub(super) image_path: &'a str,
}

/// A stored lesson row.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = lessons)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(super) struct LessonRow {
    pub(super) id: i32,
    pub(super) title: String,
    pub(super) course_id: i32,
}

impl From<LessonRow> for Lesson {
    fn from(row: LessonRow) -> Self {
        Self {
            id: LessonId::new(row.id),
            title: row.title,
            course_id: CourseId::new(row.course_id),
        }
    }
}

/// A lesson row awaiting insertion, with an explicit seed identifier.
#[derive(Debug, Insertable)]
#[diesel(table_name = lessons)]
pub(super) struct NewLessonRow<'a> {
    pub(super) id: i32,
    pub(super) title: &'a str,
    pub(super) course_id: i32,
}

/// A stored option row.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = options)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub(super) struct OptionRow {
    pub(super) id: i32,
    pub(super) title: String,
    pub(super) audio_filename: String,
    pub(super) image_filename: String,
    pub(super) lesson_id: i32,
}

impl From<OptionRow> for LessonOption {
    fn from(row: OptionRow) -> Self {
        Self {
            id: OptionId::new(row.id),
            title: row.title,
            audio_filename: row.audio_filename,
            image_filename: row.image_filename,
            lesson_id: LessonId::new(row.lesson_id),
        }
    }
}

/// An option row awaiting insertion; the store assigns its identifier.
#[derive(Debug, Insertable)]
#[diesel(table_name = options)]
pub(super) struct NewOptionRow<'a> {
    pub(super) title: &'a str,
    pub(super) audio_filename: &'a str,
    pub(super) image_filename: &'a str,
    pub(super) lesson_id: i32,
}
