//! Errors that occur while reading font data

use font_types::Tag;

/// An error that occurs when reading font data
///
/// Short or missing tables are not errors: the decoders in this crate
/// return empty results for those. An error means either that a read went
/// past the end of the data, or that a table describes itself in a way that
/// cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    OutOfBounds,
    /// A record size declared in a table header is smaller than the
    /// fields that must be read from each record.
    MalformedTable {
        table: Tag,
        record: &'static str,
        size: u16,
        required: usize,
    },
}

impl ReadError {
    /// `true` if this error describes an internally inconsistent table.
    pub fn is_malformed(&self) -> bool {
        matches!(self, ReadError::MalformedTable { .. })
    }
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReadError::OutOfBounds => write!(f, "An offset was out of bounds"),
            ReadError::MalformedTable {
                table,
                record,
                size,
                required,
            } => write!(
                f,
                "malformed '{table}' table: {record} record size {size} is smaller than {required}"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ReadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = ReadError::MalformedTable {
            table: Tag::new(b"fvar"),
            record: "instance",
            size: 11,
            required: 12,
        };
        assert!(err.is_malformed());
        assert_eq!(
            err.to_string(),
            "malformed 'fvar' table: instance record size 11 is smaller than 12"
        );
        assert!(!ReadError::OutOfBounds.is_malformed());
    }
}
