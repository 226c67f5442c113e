//! Located link diagnostics.

use std::fmt;

use thiserror::Error;

/// Where a relocation record came from, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Input file the record was read from.
    pub file: String,
    /// Byte offset of the patch site within its section.
    pub offset: u64,
}

impl Location {
    pub fn new(file: impl Into<String>, offset: u64) -> Self {
        Location {
            file: file.into(),
            offset,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{:#x}", self.file, self.offset)
    }
}

/// A recoverable link-stage error tied to a location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkDiag {
    #[error("{location}: unrecognized relocation {code}")]
    UnrecognizedRelocation { location: Location, code: u32 },

    #[error("{location}: relocation against unknown symbol index {index}")]
    UnknownSymbol { location: Location, index: u32 },

    #[error("{location}: relocation needs {needed} bytes past the end of the section")]
    OutOfBounds { location: Location, needed: usize },
}

/// Append-only diagnostic sink owned by the link driver.
///
/// Scanning may continue after an error so further diagnostics can be
/// batched, but the overall link must fail if any error was recorded.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<LinkDiag>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, diag: LinkDiag) {
        self.errors.push(diag);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinkDiag> {
        self.errors.iter()
    }
}
