//! Error types for the seed-data crate.
//!
//! Semantic error enums for dataset parsing and referential validation,
//! following the project's error handling conventions with `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or validating a seed dataset.
///
/// These errors cover file I/O, JSON parsing, and the cross-references a
/// dataset must satisfy before it can be applied to a store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file at '{path}': {message}")]
    IoError {
        /// Path to the dataset file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The dataset JSON is malformed or missing required fields.
    #[error("invalid dataset JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The dataset contains no courses.
    #[error("dataset contains no courses")]
    EmptyCourses,

    /// Two courses share the same identifier.
    #[error("duplicate course id {course_id} in dataset")]
    DuplicateCourseId {
        /// The repeated course identifier.
        course_id: i32,
    },

    /// Two lessons share the same identifier.
    #[error("duplicate lesson id {lesson_id} in dataset")]
    DuplicateLessonId {
        /// The repeated lesson identifier.
        lesson_id: i32,
    },

    /// A lesson references a course that is not part of the dataset.
    #[error("lesson '{lesson_title}' references unknown course id {course_id}")]
    UnknownCourse {
        /// Title of the offending lesson.
        lesson_title: String,
        /// The missing course identifier.
        course_id: i32,
    },

    /// An option references a lesson that is not part of the dataset.
    #[error("option '{option_title}' references unknown lesson id {lesson_id}")]
    UnknownLesson {
        /// Title of the offending option.
        option_title: String,
        /// The missing lesson identifier.
        lesson_id: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_formats_correctly() {
        let err = DatasetError::IoError {
            path: PathBuf::from("/tmp/catalogue.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read dataset file at '/tmp/catalogue.json': file not found"
        );
    }

    #[test]
    fn parse_error_formats_correctly() {
        let err = DatasetError::ParseError {
            message: "unexpected token".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid dataset JSON: unexpected token");
    }

    #[test]
    fn empty_courses_formats_correctly() {
        assert_eq!(
            DatasetError::EmptyCourses.to_string(),
            "dataset contains no courses"
        );
    }

    #[test]
    fn duplicate_course_formats_correctly() {
        let err = DatasetError::DuplicateCourseId { course_id: 7 };
        assert_eq!(err.to_string(), "duplicate course id 7 in dataset");
    }

    #[test]
    fn unknown_course_formats_correctly() {
        let err = DatasetError::UnknownCourse {
            lesson_title: "Colores básicos.".to_owned(),
            course_id: 9,
        };
        assert_eq!(
            err.to_string(),
            "lesson 'Colores básicos.' references unknown course id 9"
        );
    }

    #[test]
    fn unknown_lesson_formats_correctly() {
        let err = DatasetError::UnknownLesson {
            option_title: "Azul".to_owned(),
            lesson_id: 3,
        };
        assert_eq!(
            err.to_string(),
            "option 'Azul' references unknown lesson id 3"
        );
    }
}
