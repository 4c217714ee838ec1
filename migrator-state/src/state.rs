//! The migration step type that drivers hold, dispatching to each kind.

use crate::adapters::FsWritePort;
use crate::artifacts::PrintReport;
use crate::fixit::FixitMigrationState;
use crate::kind::MigrationKind;
use crate::ports::WritePort;
use crate::settings::DumpSettings;
use camino::Utf8Path;

/// One recorded step of a migration, of any kind.
///
/// States are read-only once built. Each variant carries its own
/// representation; the kind is derived from the variant and cannot drift.
#[derive(Debug, Clone)]
pub enum MigrationState {
    Fixit(FixitMigrationState),
}

impl MigrationState {
    pub fn kind(&self) -> MigrationKind {
        match self {
            MigrationState::Fixit(_) => MigrationKind::CompilerFixits,
        }
    }

    /// Full text of the step's input, as an independent copy.
    pub fn input_text(&self) -> String {
        match self {
            MigrationState::Fixit(state) => state.input_text(),
        }
    }

    /// Full text of the step's output, as an independent copy.
    pub fn output_text(&self) -> String {
        match self {
            MigrationState::Fixit(state) => state.output_text(),
        }
    }

    /// Write this step's artifacts into `out_dir`, which must already exist.
    ///
    /// `step_number` keeps filenames unique and ordered across a pipeline.
    /// Returns `true` if any artifact failed to write; the others are still
    /// attempted and left in place.
    pub fn print(&self, step_number: usize, out_dir: &Utf8Path) -> bool {
        match self {
            MigrationState::Fixit(state) => state.print(step_number, out_dir),
        }
    }

    /// Like [`print`](Self::print), with the default writer and per-artifact results.
    pub fn print_report(&self, step_number: usize, out_dir: &Utf8Path) -> PrintReport {
        self.print_with(step_number, out_dir, &DumpSettings::default(), &FsWritePort)
    }

    pub fn print_with(
        &self,
        step_number: usize,
        out_dir: &Utf8Path,
        settings: &DumpSettings,
        writer: &dyn WritePort,
    ) -> PrintReport {
        match self {
            MigrationState::Fixit(state) => {
                state.print_with(step_number, out_dir, settings, writer)
            }
        }
    }

    pub fn as_fixit(&self) -> Option<&FixitMigrationState> {
        match self {
            MigrationState::Fixit(state) => Some(state),
        }
    }
}

impl From<FixitMigrationState> for MigrationState {
    fn from(state: FixitMigrationState) -> Self {
        MigrationState::Fixit(state)
    }
}
