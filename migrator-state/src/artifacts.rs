//! Artifact naming and per-artifact print results.

use crate::kind::MigrationKind;
use crate::settings::{DumpSettings, check_extension};
use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;
use tracing::{debug, trace};

/// What a printed artifact holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactRole {
    Input,
    Output,
    Replacements,
}

impl ArtifactRole {
    /// Every role, in the order artifacts are written.
    pub const ALL: [ArtifactRole; 3] = [
        ArtifactRole::Input,
        ArtifactRole::Output,
        ArtifactRole::Replacements,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            ArtifactRole::Input => "Input",
            ArtifactRole::Output => "Output",
            ArtifactRole::Replacements => "Replacements",
        }
    }

    fn extension(self, settings: &DumpSettings) -> &str {
        match self {
            ArtifactRole::Input | ArtifactRole::Output => settings.source_extension(),
            ArtifactRole::Replacements => settings.remap_extension(),
        }
    }
}

impl fmt::Display for ArtifactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Path of one artifact without its extension: `{out_dir}/{step}-{KindName}-{Role}`.
pub fn artifact_stem(
    out_dir: &Utf8Path,
    step_number: usize,
    kind: MigrationKind,
    role: ArtifactRole,
) -> Utf8PathBuf {
    out_dir.join(format!("{}-{}-{}", step_number, kind.name(), role.suffix()))
}

/// Path of one artifact: `{out_dir}/{step}-{KindName}-{Role}.{ext}`.
///
/// The extension is set by replacement rather than appended, so the same
/// arguments always yield the same path. Fails if the configured extension
/// contains a path separator.
pub fn artifact_path(
    out_dir: &Utf8Path,
    step_number: usize,
    kind: MigrationKind,
    role: ArtifactRole,
    settings: &DumpSettings,
) -> anyhow::Result<Utf8PathBuf> {
    let extension = role.extension(settings);
    check_extension(&format!("{role} extension"), extension)?;

    let mut path = artifact_stem(out_dir, step_number, kind, role);
    path.set_extension(extension);
    Ok(path)
}

/// Result of writing one artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactOutcome {
    pub role: ArtifactRole,
    pub path: Utf8PathBuf,
    /// Rendered error chain when the write failed.
    pub error: Option<String>,
}

impl ArtifactOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-artifact results of printing one migration state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintReport {
    pub step_number: usize,
    pub artifacts: Vec<ArtifactOutcome>,
}

impl PrintReport {
    pub fn new(step_number: usize) -> Self {
        Self {
            step_number,
            artifacts: Vec::new(),
        }
    }

    /// `true` if any artifact failed to write.
    pub fn failed(&self) -> bool {
        self.artifacts.iter().any(|a| !a.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ArtifactOutcome> {
        self.artifacts.iter().filter(|a| !a.is_ok())
    }

    pub fn path(&self, role: ArtifactRole) -> Option<&Utf8Path> {
        self.artifacts
            .iter()
            .find(|a| a.role == role)
            .map(|a| a.path.as_path())
    }

    pub(crate) fn record(
        &mut self,
        role: ArtifactRole,
        path: Utf8PathBuf,
        result: anyhow::Result<()>,
    ) {
        let error = match result {
            Ok(()) => {
                trace!(path = %path, %role, "wrote artifact");
                None
            }
            Err(err) => {
                let message = format!("{err:#}");
                debug!(path = %path, %role, error = %message, "artifact write failed");
                Some(message)
            }
        };
        self.artifacts.push(ArtifactOutcome { role, path, error });
    }
}
