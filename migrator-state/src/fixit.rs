//! Migration states produced by applying compiler fix-its.

use crate::adapters::FsWritePort;
use crate::artifacts::{ArtifactRole, PrintReport, artifact_path, artifact_stem};
use crate::kind::MigrationKind;
use crate::ports::WritePort;
use crate::settings::DumpSettings;
use camino::Utf8Path;
use migrator_buffers::{BufferId, BufferStore};
use migrator_remap::render_remap;
use migrator_types::Replacement;
use std::sync::Arc;
use tracing::debug;

/// A step whose input and output both live in a shared [`BufferStore`].
///
/// The state holds only buffer handles. The store owns the text and must
/// keep both buffers registered for as long as the state is used.
#[derive(Debug, Clone)]
pub struct FixitMigrationState {
    store: Arc<BufferStore>,
    input: BufferId,
    output: BufferId,
    replacements: Vec<Replacement>,
}

impl FixitMigrationState {
    pub fn new(
        store: Arc<BufferStore>,
        input: BufferId,
        output: BufferId,
        replacements: Vec<Replacement>,
    ) -> Self {
        Self {
            store,
            input,
            output,
            replacements,
        }
    }

    /// The first state of a pipeline: nothing has been applied yet, so the
    /// output is the input buffer itself.
    pub fn start(store: Arc<BufferStore>, input: BufferId) -> Self {
        Self::new(store, input, input, Vec::new())
    }

    pub fn kind(&self) -> MigrationKind {
        MigrationKind::CompilerFixits
    }

    pub fn store(&self) -> &Arc<BufferStore> {
        &self.store
    }

    pub fn input_buffer_id(&self) -> BufferId {
        self.input
    }

    pub fn output_buffer_id(&self) -> BufferId {
        self.output
    }

    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    /// # Panics
    ///
    /// Panics if the input handle is not registered in the store.
    pub fn input_text(&self) -> String {
        self.store.entire_text(self.input)
    }

    /// # Panics
    ///
    /// Panics if the output handle is not registered in the store.
    pub fn output_text(&self) -> String {
        self.store.entire_text(self.output)
    }

    pub fn output_differs_from_input(&self) -> bool {
        self.input != self.output && self.input_text() != self.output_text()
    }

    pub fn no_changes_occurred(&self) -> bool {
        !self.output_differs_from_input()
    }

    /// Unified diff from input to output text. Empty when nothing changed.
    pub fn render_diff(&self) -> String {
        let before = self.input_text();
        let after = self.output_text();
        if before == after {
            return String::new();
        }

        let mut out = diffy::create_patch(&before, &after).to_string();
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }

    /// Write the input, output, and replacements artifacts into `out_dir`.
    ///
    /// Returns `true` if any of the three writes failed.
    pub fn print(&self, step_number: usize, out_dir: &Utf8Path) -> bool {
        self.print_with(step_number, out_dir, &DumpSettings::default(), &FsWritePort)
            .failed()
    }

    /// Like [`print`](Self::print), but with explicit settings and writer, and
    /// reporting the outcome of each artifact.
    ///
    /// All three writes are attempted regardless of earlier failures.
    pub fn print_with(
        &self,
        step_number: usize,
        out_dir: &Utf8Path,
        settings: &DumpSettings,
        writer: &dyn WritePort,
    ) -> PrintReport {
        let kind = self.kind();
        debug!(step = step_number, %kind, out_dir = %out_dir, "printing migration state");

        let mut report = PrintReport::new(step_number);
        for role in ArtifactRole::ALL {
            let (path, result) = match artifact_path(out_dir, step_number, kind, role, settings) {
                Ok(path) => {
                    let result = self
                        .render_artifact(role)
                        .and_then(|contents| writer.write_file(&path, contents.as_bytes()));
                    (path, result)
                }
                Err(err) => (artifact_stem(out_dir, step_number, kind, role), Err(err)),
            };
            report.record(role, path, result);
        }

        report
    }

    fn render_artifact(&self, role: ArtifactRole) -> anyhow::Result<String> {
        match role {
            ArtifactRole::Input => Ok(self.input_text()),
            ArtifactRole::Output => Ok(self.output_text()),
            ArtifactRole::Replacements => {
                // Offsets refer to the input buffer.
                let file = self.store.identifier(self.input);
                Ok(render_remap(Some(file.as_str()), &self.replacements)?)
            }
        }
    }
}
