//! Default filesystem-backed port implementations.

use crate::ports::WritePort;
use anyhow::Context;
use camino::Utf8Path;
use fs_err as fs;
use std::io::Write;

/// Filesystem write operations.
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        // The handle is closed on drop, including on the error paths below.
        let mut file = fs::File::create(path).with_context(|| format!("create {}", path))?;
        file.write_all(contents)
            .with_context(|| format!("write {}", path))?;
        file.flush().with_context(|| format!("flush {}", path))
    }
}
