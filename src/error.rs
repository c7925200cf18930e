use std::path::PathBuf;

use crate::codec::SectionKind;
use crate::stats::TypeKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("truncated input at offset {offset}: need {need} bytes, have {have}")]
    TruncatedInput { offset: usize, need: usize, have: usize },

    #[error("corrupt header at offset {offset}: {reason}")]
    CorruptHeader { offset: usize, reason: String },

    #[error("corrupt {section} section: read at offset {offset} crosses section end {bound}")]
    CorruptSection { section: SectionKind, offset: usize, bound: usize },

    #[error("unsupported world version {version} (oldest supported is {minimum})")]
    UnsupportedVersion { version: i32, minimum: i32 },

    #[error("tile grid overrun at offset {offset}: run of {run} tiles at position {position} exceeds {capacity} tiles")]
    GridOverrun { offset: usize, position: u64, run: u64, capacity: u64 },

    #[error("tile grid underrun at offset {offset}: {filled} of {expected} tiles decoded")]
    GridUnderrun { offset: usize, filled: u64, expected: u64 },

    /// Not fatal: the aggregator skips these tiles and reports them.
    #[error("unknown {kind} type id {id}")]
    UnknownTypeId { kind: TypeKind, id: u16 },

    #[error("malformed {field} at offset {offset}: {reason}")]
    MalformedField { offset: usize, field: &'static str, reason: String },

    #[error("load cancelled")]
    Cancelled,

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("{path}: {source}", path = .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the file the error came from.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Error::File { .. } => self,
            other => Error::File { path: path.into(), source: Box::new(other) },
        }
    }

    /// Byte offset the error was raised at, when it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::TruncatedInput { offset, .. }
            | Error::CorruptHeader { offset, .. }
            | Error::CorruptSection { offset, .. }
            | Error::GridOverrun { offset, .. }
            | Error::GridUnderrun { offset, .. }
            | Error::MalformedField { offset, .. } => Some(*offset),
            Error::File { source, .. } => source.offset(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
