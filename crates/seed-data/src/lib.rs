//! Demo course catalogue datasets for seeding an empty store.
//!
//! This crate defines the dataset types consumed by the backend's seeding
//! operation plus the literal demo catalogue shipped with the application.
//! The types are independent of backend domain types to avoid circular
//! dependencies; they are converted at the point of use.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading datasets from JSON files
//! - Referential-integrity validation before any row touches the store
//! - The built-in bilingual demo catalogue (`demo_dataset`)
//!
//! # Example
//!
//! ```
//! use seed_data::demo_dataset;
//!
//! let dataset = demo_dataset();
//!
//! assert_eq!(dataset.courses().len(), 2);
//! assert_eq!(dataset.lessons().len(), 2);
//! assert_eq!(dataset.options().len(), 7);
//! ```

mod dataset;
mod demo;
mod error;

pub use dataset::{CourseSeed, LessonSeed, OptionSeed, SeedDataset};
pub use demo::demo_dataset;
pub use error::DatasetError;
