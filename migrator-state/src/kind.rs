//! Step kinds and their filename names.

use std::fmt;

/// Closed set of migration step kinds.
///
/// Every operation on [`MigrationState`](crate::MigrationState) matches on
/// this exhaustively, so a new kind cannot be added without handling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MigrationKind {
    CompilerFixits,
}

impl MigrationKind {
    /// Human-readable step-kind name, used in artifact filenames.
    pub fn name(self) -> &'static str {
        match self {
            MigrationKind::CompilerFixits => "FixitMigrationState",
        }
    }
}

impl fmt::Display for MigrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
