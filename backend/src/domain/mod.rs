//! Domain primitives and aggregates.
//!
//! Purpose: Define strongly typed domain entities used by the HTTP and
//! persistence layers. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode — API error response payload and stable identifier.
//! - User, UserId, Username — account identity with write-only password.
//! - Credentials — validated login or registration payload.
//! - Course, Lesson, LessonOption — catalogue read models.
//! - ports — hexagonal boundary traits and their fixtures.

pub mod accounts;
pub mod auth;
pub mod catalogue;
pub mod error;
pub mod password;
pub mod ports;
pub mod user;

pub use self::accounts::PasswordAccountService;
pub use self::auth::{Credentials, CredentialsValidationError};
pub use self::catalogue::{
    Course, CourseDetail, CourseId, Lesson, LessonDetail, LessonId, LessonOption, OptionId,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::password::{PasswordHash, PasswordHashError};
pub use self::user::{USERNAME_MAX_LENGTH, User, UserId, Username, UsernameValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use aula_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
