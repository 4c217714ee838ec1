use serde::{Deserialize, Serialize};
use std::ops::Range;

/// One textual substitution recorded during a migration step.
///
/// Offsets are byte offsets into the step's input text. A replacement
/// describes history: it is what was applied, not work still to be done.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Replacement {
    pub offset: usize,
    pub remove: usize,
    pub text: String,
}

impl Replacement {
    pub fn new(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            offset: range.start,
            remove: range.end.saturating_sub(range.start),
            text: text.into(),
        }
    }

    pub fn insert(offset: usize, text: impl Into<String>) -> Self {
        Self::new(offset..offset, text)
    }

    pub fn remove(range: Range<usize>) -> Self {
        Self::new(range, String::new())
    }

    /// Exclusive end of the replaced range.
    pub fn end(&self) -> usize {
        self.offset + self.remove
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    pub fn is_insert(&self) -> bool {
        self.remove == 0 && !self.text.is_empty()
    }

    pub fn is_remove(&self) -> bool {
        self.remove > 0 && self.text.is_empty()
    }

    pub fn is_replace(&self) -> bool {
        self.remove > 0 && !self.text.is_empty()
    }
}
