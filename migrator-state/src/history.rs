//! Ordered record of the states a pipeline went through.

use crate::adapters::FsWritePort;
use crate::artifacts::PrintReport;
use crate::ports::WritePort;
use crate::settings::DumpSettings;
use crate::state::MigrationState;
use camino::Utf8Path;
use tracing::debug;

/// Append-only list of migration states, in the order they were produced.
///
/// The history does not decide which steps run; the driver pushes each
/// state once it has been computed.
#[derive(Debug, Clone, Default)]
pub struct MigrationHistory {
    states: Vec<MigrationState>,
}

impl MigrationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a state and return its step number.
    pub fn push(&mut self, state: impl Into<MigrationState>) -> usize {
        self.states.push(state.into());
        self.states.len() - 1
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, step_number: usize) -> Option<&MigrationState> {
        self.states.get(step_number)
    }

    pub fn last(&self) -> Option<&MigrationState> {
        self.states.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MigrationState> {
        self.states.iter()
    }

    /// Print every state into `out_dir`, numbered by position.
    ///
    /// Returns `true` if any artifact of any state failed to write.
    pub fn dump(&self, out_dir: &Utf8Path) -> bool {
        self.dump_with(out_dir, &DumpSettings::default(), &FsWritePort)
            .iter()
            .any(PrintReport::failed)
    }

    pub fn dump_with(
        &self,
        out_dir: &Utf8Path,
        settings: &DumpSettings,
        writer: &dyn WritePort,
    ) -> Vec<PrintReport> {
        debug!(states = self.states.len(), out_dir = %out_dir, "dumping migration states");
        self.states
            .iter()
            .enumerate()
            .map(|(step_number, state)| state.print_with(step_number, out_dir, settings, writer))
            .collect()
    }
}

impl<'a> IntoIterator for &'a MigrationHistory {
    type Item = &'a MigrationState;
    type IntoIter = std::slice::Iter<'a, MigrationState>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
