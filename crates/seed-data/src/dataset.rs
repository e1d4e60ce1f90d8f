//! Seed dataset types, JSON parsing, and referential validation.
//!
//! A dataset holds the course/lesson/option rows the seeding operation
//! inserts into an empty store. Identifiers are carried explicitly so a
//! dataset is deterministic about the rows it produces and lessons and
//! options can reference their parents by id.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

/// A course row to insert while seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSeed {
    /// Explicit course identifier.
    pub id: i32,
    /// Course title shown to learners.
    pub title: String,
    /// One-line description for the course list.
    pub short_description: String,
    /// Cover image asset path.
    pub image_path: String,
}

/// A lesson row to insert while seeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonSeed {
    /// Explicit lesson identifier.
    pub id: i32,
    /// Lesson title.
    pub title: String,
    /// Identifier of the owning course within the same dataset.
    pub course_id: i32,
}

/// An option row to insert while seeding.
///
/// Options take their identifiers from the store; no other seed row refers
/// to an option, so explicit ids are unnecessary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionSeed {
    /// Option title (the answer choice shown to learners).
    pub title: String,
    /// Audio asset filename.
    pub audio_filename: String,
    /// Image asset filename, or a literal colour code for colour options.
    pub image_filename: String,
    /// Identifier of the owning lesson within the same dataset.
    pub lesson_id: i32,
}

/// A validated seed dataset.
///
/// Construction guarantees that course and lesson identifiers are unique,
/// at least one course is present, and every parent reference resolves
/// within the dataset, so applying the rows in course → lesson → option
/// order never trips a foreign key.
///
/// # Example
///
/// ```
/// use seed_data::SeedDataset;
///
/// let json = r#"{
///     "courses": [{"id": 1, "title": "Shapes", "shortDescription": "Learn shapes.", "imagePath": "shapes.svg"}],
///     "lessons": [{"id": 1, "title": "Basic shapes", "courseId": 1}],
///     "options": [{"title": "Circle", "audioFilename": "circle.mp3", "imageFilename": "circle.svg", "lessonId": 1}]
/// }"#;
///
/// let dataset = SeedDataset::from_json(json).expect("valid dataset");
/// assert_eq!(dataset.courses().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDataset {
    pub(crate) courses: Vec<CourseSeed>,
    pub(crate) lessons: Vec<LessonSeed>,
    pub(crate) options: Vec<OptionSeed>,
}

impl SeedDataset {
    /// Builds a dataset from its row collections, validating cross-references.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the dataset has no courses, repeats a
    /// course or lesson id, or contains a lesson or option whose parent id
    /// does not appear in the dataset.
    pub fn from_parts(
        courses: Vec<CourseSeed>,
        lessons: Vec<LessonSeed>,
        options: Vec<OptionSeed>,
    ) -> Result<Self, DatasetError> {
        let dataset = Self {
            courses,
            lessons,
            options,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Parses a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the JSON is malformed or the parsed rows
    /// fail referential validation.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawSeedDataset =
            serde_json::from_str(json).map_err(|e| DatasetError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_parts(raw.courses, raw.lessons, raw.options)
    }

    /// Loads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let contents = fs::read_to_string(path).map_err(|e| DatasetError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// Checks the dataset's internal consistency.
    ///
    /// # Errors
    ///
    /// Returns the first [`DatasetError`] encountered, checking courses,
    /// then lessons, then options.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.courses.is_empty() {
            return Err(DatasetError::EmptyCourses);
        }

        let mut course_ids = HashSet::new();
        for course in &self.courses {
            if !course_ids.insert(course.id) {
                return Err(DatasetError::DuplicateCourseId {
                    course_id: course.id,
                });
            }
        }

        let mut lesson_ids = HashSet::new();
        for lesson in &self.lessons {
            if !lesson_ids.insert(lesson.id) {
                return Err(DatasetError::DuplicateLessonId {
                    lesson_id: lesson.id,
                });
            }
            if !course_ids.contains(&lesson.course_id) {
                return Err(DatasetError::UnknownCourse {
                    lesson_title: lesson.title.clone(),
                    course_id: lesson.course_id,
                });
            }
        }

        for option in &self.options {
            if !lesson_ids.contains(&option.lesson_id) {
                return Err(DatasetError::UnknownLesson {
                    option_title: option.title.clone(),
                    lesson_id: option.lesson_id,
                });
            }
        }

        Ok(())
    }

    /// Returns the course rows in insertion order.
    #[must_use]
    pub fn courses(&self) -> &[CourseSeed] {
        &self.courses
    }

    /// Returns the lesson rows in insertion order.
    #[must_use]
    pub fn lessons(&self) -> &[LessonSeed] {
        &self.lessons
    }

    /// Returns the option rows in insertion order.
    #[must_use]
    pub fn options(&self) -> &[OptionSeed] {
        &self.options
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDataset {
    courses: Vec<CourseSeed>,
    #[serde(default)]
    lessons: Vec<LessonSeed>,
    #[serde(default)]
    options: Vec<OptionSeed>,
}
