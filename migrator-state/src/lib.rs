//! Recorded steps of a multi-pass source migration.
//!
//! A [`MigrationState`] is a snapshot of one step: the text before and after
//! a transformation plus the replacements that produced it. Text is never
//! stored twice; it is looked up from the shared
//! [`BufferStore`](migrator_buffers::BufferStore) on demand.
//!
//! # Port traits
//!
//! Artifact writes go through [`WritePort`](ports::WritePort). The
//! [`adapters`] module provides the filesystem-backed default.
//!
//! # Entry points
//!
//! - [`MigrationState::print`] writes the input, output, and remap artifacts
//!   for one step and returns `true` if any of them failed.
//! - [`MigrationHistory::dump`] does the same for every recorded step.

pub mod adapters;
pub mod artifacts;
pub mod fixit;
pub mod history;
pub mod kind;
pub mod ports;
pub mod settings;
pub mod state;

pub use artifacts::{ArtifactOutcome, ArtifactRole, PrintReport, artifact_path, artifact_stem};
pub use fixit::FixitMigrationState;
pub use history::MigrationHistory;
pub use kind::MigrationKind;
pub use settings::DumpSettings;
pub use state::MigrationState;

// Re-export the collaborators' handle types so drivers need only this crate.
pub use migrator_buffers::{BufferId, BufferStore};
pub use migrator_types::Replacement;
