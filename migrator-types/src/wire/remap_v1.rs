use serde::{Deserialize, Serialize};

use crate::replacement::Replacement;
use crate::wire::WireError;

/// Schema-exact wire representation of one remap entry.
///
/// A remap document is a JSON array of these, in replacement order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemapEntryV1 {
    /// Identifier of the buffer the offsets refer to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    pub offset: u64,
    pub remove: u64,

    #[serde(default)]
    pub text: String,
}

impl RemapEntryV1 {
    pub fn from_replacement(replacement: &Replacement, file: Option<&str>) -> Self {
        Self {
            file: file.map(str::to_string),
            offset: replacement.offset as u64,
            remove: replacement.remove as u64,
            text: replacement.text.clone(),
        }
    }
}

impl From<&Replacement> for RemapEntryV1 {
    fn from(replacement: &Replacement) -> Self {
        Self::from_replacement(replacement, None)
    }
}

impl TryFrom<RemapEntryV1> for Replacement {
    type Error = WireError;

    fn try_from(entry: RemapEntryV1) -> Result<Self, Self::Error> {
        let offset = usize::try_from(entry.offset)
            .map_err(|_| WireError::OffsetOverflow { field: "offset" })?;
        let remove = usize::try_from(entry.remove)
            .map_err(|_| WireError::OffsetOverflow { field: "remove" })?;
        if offset.checked_add(remove).is_none() {
            return Err(WireError::RangeOverflow {
                offset: entry.offset,
                remove: entry.remove,
            });
        }

        Ok(Replacement {
            offset,
            remove,
            text: entry.text,
        })
    }
}
