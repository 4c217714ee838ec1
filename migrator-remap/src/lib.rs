//! Remap files: a structured, re-loadable record of a replacement list.
//!
//! A remap file is a JSON array of [`RemapEntryV1`] objects, one per
//! replacement, in the order the replacements were applied. This crate
//! renders and reads that format; writing the rendered text is left to the
//! caller's write port.

use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use migrator_types::{RemapEntryV1, Replacement, WireError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RemapError {
    #[error("io error on {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid remap entry: {0}")]
    Wire(#[from] WireError),
}

/// Render replacements as remap JSON.
///
/// `file` names the buffer the offsets refer to and is attached to every entry.
pub fn render_remap(
    file: Option<&str>,
    replacements: &[Replacement],
) -> Result<String, RemapError> {
    let entries: Vec<RemapEntryV1> = replacements
        .iter()
        .map(|r| RemapEntryV1::from_replacement(r, file))
        .collect();
    let mut out = serde_json::to_string_pretty(&entries)?;
    out.push('\n');
    Ok(out)
}

pub fn parse_remap(contents: &str) -> Result<Vec<RemapEntryV1>, RemapError> {
    Ok(serde_json::from_str(contents)?)
}

pub fn load_remap(path: &Utf8Path) -> Result<Vec<RemapEntryV1>, RemapError> {
    let contents = fs::read_to_string(path).map_err(|source| RemapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = parse_remap(&contents)?;
    debug!(path = %path, entries = entries.len(), "loaded remap");
    Ok(entries)
}

/// Load a remap file and convert its entries back to replacements, dropping `file`.
pub fn load_replacements(path: &Utf8Path) -> Result<Vec<Replacement>, RemapError> {
    load_remap(path)?
        .into_iter()
        .map(|entry| Replacement::try_from(entry).map_err(RemapError::from))
        .collect()
}
