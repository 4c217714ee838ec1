//! Shared DTOs (schemas-as-code) for the migrator workspace.
//!
//! # Design constraints
//! - Remap entries are written to disk and read back by other tools.
//! - Be conservative with breaking changes to the wire model.
//! - Prefer adding optional fields over changing semantics.

pub mod replacement;
pub mod wire;

pub use replacement::Replacement;
pub use wire::{RemapEntryV1, WireError};
