pub mod composition;
pub mod layout;
pub mod operations;
pub mod selection;
pub mod slot;
pub mod synth;

pub use composition::*;
pub use layout::*;
pub use selection::*;
pub use slot::*;

use thiserror::Error;

/// Rejected edits. A failed call never leaves the composition half-changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Unknown slot: {0}")]
    UnknownSlot(String),
    #[error("Slot {0} is a fixed backbone element and cannot be modified")]
    ImmutableSlot(String),
    #[error("Slot {0} cannot be given a zero length")]
    ZeroLength(String),
    #[error("ORF group count must be between 1 and {max}, got {count}")]
    InvalidGroupCount { count: usize, max: usize },
    #[error("Slot id {0} appears more than once")]
    DuplicateSlot(String),
    #[error("Slot {0} is fixed but not a backbone element, or the other way round")]
    InconsistentSlot(String),
    #[error("Slot {0} sits between the promoter and the regulatory element but is not an ORF or linker")]
    MisplacedSlot(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Composition has zero total length")]
    EmptyComposition,
}
