pub mod remap_v1;

pub use remap_v1::RemapEntryV1;

/// Errors emitted while converting wire models to internal models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    OffsetOverflow { field: &'static str },
    RangeOverflow { offset: u64, remove: u64 },
}

impl std::fmt::Display for WireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WireError::OffsetOverflow { field } => {
                write!(f, "remap field `{}` does not fit in usize", field)
            }
            WireError::RangeOverflow { offset, remove } => {
                write!(f, "remap range {}+{} does not fit in usize", offset, remove)
            }
        }
    }
}

impl std::error::Error for WireError {}
