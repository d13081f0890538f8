//! Pathway Core - Curriculum model, student model, and shared functionality
//!
//! This crate provides the foundational types used across all Pathway
//! components: the prerequisite graph, validated student states, the error
//! type, and configuration loading.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod student;

pub use catalog::{CatalogSpec, CourseId, CurriculumGraph};
pub use config::{Config, DataConfig, TrainingConfig};
pub use error::{PathwayError, Result};
pub use student::{derive_gpa, Grade, StudentProfile, StudentState};
