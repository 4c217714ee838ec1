//! Port traits abstracting artifact I/O away from the migration states.

use camino::Utf8Path;

/// File-system write operations.
///
/// Implementations create or truncate `path`. They must not create missing
/// parent directories: the output directory is the caller's responsibility.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
}
