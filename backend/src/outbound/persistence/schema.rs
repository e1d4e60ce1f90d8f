//! Diesel table definitions for the SQLite schema.
//!
//! These definitions must match the migrations exactly; Diesel uses them for
//! compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Registered user accounts.
    ///
    /// `username` carries a unique index so concurrent registrations cannot
    /// both insert the same name; the losing insert surfaces a constraint
    /// violation that adapters translate into a duplicate-username error.
    users (id) {
        /// Primary key, assigned by the store.
        id -> Integer,
        /// Unique account name.
        username -> Text,
        /// Derived password hash; plaintext is never stored.
        password_hash -> Text,
    }
}

diesel::table! {
    /// Courses shown on the catalogue page.
    courses (id) {
        /// Primary key, assigned by the store or carried by seed data.
        id -> Integer,
        /// Display title.
        title -> Text,
        /// One-line teaser for course listings.
        short_description -> Text,
        /// Cover image path relative to the asset root.
        image_path -> Text,
    }
}

diesel::table! {
    /// Lessons belonging to a course.
    lessons (id) {
        /// Primary key, assigned by the store or carried by seed data.
        id -> Integer,
        /// Display title.
        title -> Text,
        /// Owning course.
        course_id -> Integer,
    }
}

diesel::table! {
    /// Selectable options inside a lesson.
    options (id) {
        /// Primary key, assigned by the store.
        id -> Integer,
        /// Display title (the answer choice).
        title -> Text,
        /// Audio clip file name.
        audio_filename -> Text,
        /// Image file name or hex colour code.
        image_filename -> Text,
        /// Owning lesson.
        lesson_id -> Integer,
    }
}

diesel::table! {
    /// Join table reserved for per-user lesson progress.
    ///
    /// No read or write path touches it yet; it exists so the schema can
    /// grow progress tracking without a migration that reshapes user data.
    lessons_users (lesson_id, user_id) {
        /// Lesson side of the association.
        lesson_id -> Integer,
        /// User side of the association.
        user_id -> Integer,
    }
}

diesel::joinable!(lessons -> courses (course_id));
diesel::joinable!(options -> lessons (lesson_id));
diesel::joinable!(lessons_users -> lessons (lesson_id));
diesel::joinable!(lessons_users -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(users, courses, lessons, options, lessons_users);
