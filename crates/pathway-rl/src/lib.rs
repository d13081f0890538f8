//! Pathway RL - tabular action-value learning for course recommendations
//!
//! This crate scores candidate course bundles against a student's progress
//! and trains a tabular action-value estimate from sampled episodes.

// Clippy pedantic allows - these are intentional design choices
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod key;
pub mod pool;
pub mod reward;
pub mod sampler;
pub mod table;
pub mod trainer;

pub use action::{ActionKey, CandidateAction, MAX_ACTION_LEN};
pub use key::StateKey;
pub use pool::{JsonStudentPool, StudentPool, SyntheticStudentPool};
pub use reward::RewardModel;
pub use sampler::CandidateSampler;
pub use table::{ActionValueTable, TableArtifact};
pub use trainer::{Trainer, TrainingStats};
