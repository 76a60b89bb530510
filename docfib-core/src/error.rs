//! Error types for FIB and DOP decoding

use crate::context::{ContextFlag, Counter};
use alloc::string::String;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Errors that can occur while decoding header records
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq)]
pub enum FibError {
    /// The bytes violate a documented structural invariant of the format
    #[cfg_attr(feature = "std", error("Corrupt {field} at offset {offset:#x}: {violation}"))]
    Corrupt {
        /// Name of the offending field.
        field: &'static str,
        /// Stream offset where the field (or its storage unit) starts.
        offset: usize,
        /// The invariant that was violated.
        violation: Violation,
    },

    /// The stream ended inside a field
    #[cfg_attr(feature = "std", error("Truncated stream: {needed} more bytes needed at offset {offset:#x}"))]
    Truncated {
        /// Stream offset where the read started.
        offset: usize,
        /// Number of bytes the read required.
        needed: usize,
    },

    /// IO error from the underlying reader
    #[cfg_attr(feature = "std", error("IO error: {0}"))]
    Io(String),
}

impl FibError {
    /// Build a corruption error for `field` starting at `offset`
    pub fn corrupt(field: &'static str, offset: usize, violation: Violation) -> Self {
        #[cfg(feature = "logging")]
        tracing::warn!("Corrupt {} at offset {:#x}: {}", field, offset, violation);

        FibError::Corrupt {
            field,
            offset,
            violation,
        }
    }

    /// True for structural corruption, false for stream-level failures
    pub fn is_corruption(&self) -> bool {
        matches!(self, FibError::Corrupt { .. })
    }

    /// The violated invariant, if this is a corruption error
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            FibError::Corrupt { violation, .. } => Some(violation),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for FibError {
    fn from(err: std::io::Error) -> Self {
        FibError::Io(err.to_string())
    }
}

/// The structural invariant a corrupt field violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// Code outside the declared legal set
    IllegalCode {
        /// The raw value read.
        raw: u32,
    },
    /// Scalar outside its declared range
    OutOfRange {
        /// The value read.
        value: i64,
        /// Smallest legal value.
        min: i64,
        /// Largest legal value.
        max: i64,
    },
    /// Two sibling bounds in the wrong order
    Misordered {
        /// The lower bound as read.
        low: i64,
        /// The upper bound as read.
        high: i64,
    },
    /// A fixed constant field holds the wrong value
    Unexpected {
        /// The documented value.
        expected: u32,
        /// The value read.
        actual: u32,
    },
    /// A mandatory offset/length entry has zero length
    MissingMandatory,
    /// Entry has a length although its counter is zero
    LengthWithoutCount {
        /// The counter the entry mirrors.
        counter: Counter,
    },
    /// Counter is nonzero but the entry has zero length
    CountWithoutLength {
        /// The counter the entry mirrors.
        counter: Counter,
        /// The counter's value.
        count: u32,
    },
    /// Entry is present but the gating flag is not set
    FlagNotSet {
        /// The flag the entry requires.
        flag: ContextFlag,
    },
    /// Entry extends past the end of the stream it points into
    OutOfBounds {
        /// One past the last byte the entry covers.
        end: u64,
        /// Length of the target stream.
        limit: u64,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::IllegalCode { raw } => write!(f, "illegal code {:#x}", raw),
            Violation::OutOfRange { value, min, max } => {
                write!(f, "value {} outside {}..={}", value, min, max)
            }
            Violation::Misordered { low, high } => {
                write!(f, "lower bound {} exceeds upper bound {}", low, high)
            }
            Violation::Unexpected { expected, actual } => {
                write!(f, "expected {:#x}, got {:#x}", expected, actual)
            }
            Violation::MissingMandatory => write!(f, "mandatory entry has zero length"),
            Violation::LengthWithoutCount { counter } => {
                write!(f, "nonzero length while {} is zero", counter)
            }
            Violation::CountWithoutLength { counter, count } => {
                write!(f, "zero length while {} is {}", counter, count)
            }
            Violation::FlagNotSet { flag } => {
                write!(f, "nonzero length requires {}", flag)
            }
            Violation::OutOfBounds { end, limit } => {
                write!(f, "ends at {:#x}, stream holds {:#x} bytes", end, limit)
            }
        }
    }
}
