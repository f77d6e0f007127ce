use std::{error, fmt};

use super::marker::Marker;

/// Why a single perfdata line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `NAME::` token outside the known field vocabulary.
    UnrecognizedField { marker: String },
    /// A field that needs an integer held something else.
    IntegerFormat { marker: Marker, raw: String },
    /// One entry of a performance-data field did not look like `name=value`.
    MetricEntryFormat { marker: Marker, entry: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::UnrecognizedField { marker } => {
                write!(f, "unimplemented perf data field name: {}", marker)
            }
            ParseError::IntegerFormat { marker, raw } => {
                write!(f, "error parsing integer for field ({}): ({})", marker, raw)
            }
            ParseError::MetricEntryFormat { marker, entry } => {
                write!(f, "error parsing perfdata value for field {}: {}", marker, entry)
            }
        }
    }
}

impl error::Error for ParseError {}
