//! Course catalogue read models.
//!
//! These types describe what learners browse: courses, the lessons inside
//! them, and the options that make up a lesson. They are plain data with
//! public fields; persistence adapters assemble them and handlers render
//! them.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier for a stored course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CourseId(i32);

impl CourseId {
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

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a stored lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct LessonId(i32);

impl LessonId {
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

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a stored lesson option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct OptionId(i32);

impl OptionId {
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

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A course as listed on the catalogue page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Store identifier.
    pub id: CourseId,
    /// Display title.
    pub title: String,
    /// One-line teaser shown in course listings.
    pub short_description: String,
    /// Cover image path relative to the asset root.
    pub image_path: String,
}

/// A lesson belonging to a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Store identifier.
    pub id: LessonId,
    /// Display title.
    pub title: String,
    /// The course this lesson belongs to.
    pub course_id: CourseId,
}

/// One selectable option inside a lesson.
///
/// The image field doubles as a colour swatch when it holds a hex colour
/// code rather than a file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonOption {
    /// Store identifier.
    pub id: OptionId,
    /// Display title.
    pub title: String,
    /// Audio clip file name.
    pub audio_filename: String,
    /// Image file name or hex colour code.
    pub image_filename: String,
    /// The lesson this option belongs to.
    pub lesson_id: LessonId,
}

/// A course together with its lessons, for the course page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDetail {
    /// The course itself.
    pub course: Course,
    /// The course's lessons in ascending id order.
    pub lessons: Vec<Lesson>,
}

/// A lesson together with its options, for the lesson page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonDetail {
    /// The lesson itself.
    pub lesson: Lesson,
    /// The lesson's options in ascending id order.
    pub options: Vec<LessonOption>,
}
