//! Error types for LUT parsing and table construction.
//!
//! Parse failures are always fatal: the parser never returns a partially
//! built table. Line-level variants carry the 1-based number of the
//! offending physical line (blank and comment lines count).
//!
//! # Categories
//!
//! - **Format**: [`MalformedDirective`](LutError::MalformedDirective),
//!   [`MalformedRow`](LutError::MalformedRow)
//! - **Unsupported value**: [`UnsupportedDomain`](LutError::UnsupportedDomain),
//!   [`UnsupportedSize`](LutError::UnsupportedSize)
//! - **Structural**: [`DuplicateSize`](LutError::DuplicateSize),
//!   [`DimensionMismatch`](LutError::DimensionMismatch),
//!   [`RowBeforeSize`](LutError::RowBeforeSize),
//!   [`IncompleteTable`](LutError::IncompleteTable), [`NoData`](LutError::NoData)
//! - **Unrecognized directive**: [`UnrecognizedDirective`](LutError::UnrecognizedDirective)
//! - **Construction**: [`SizeOutOfRange`](LutError::SizeOutOfRange),
//!   [`EntryCountMismatch`](LutError::EntryCountMismatch),
//!   [`WrongDimension`](LutError::WrongDimension)

use thiserror::Error;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while parsing a CUBE stream or building a table.
#[derive(Debug, Error)]
pub enum LutError {
    /// A recognized directive with the wrong token count or an unparsable
    /// argument.
    #[error("line {line}: malformed {directive} line")]
    MalformedDirective {
        /// 1-based line number
        line: usize,
        /// Directive keyword as it appeared in the file
        directive: String,
    },

    /// A table row without exactly three parsable numeric tokens.
    #[error("line {line}: malformed table row")]
    MalformedRow {
        /// 1-based line number
        line: usize,
    },

    /// A domain directive declaring anything other than the fixed [0, 1]
    /// range.
    #[error("line {line}: unsupported {directive} value, only the [0, 1] domain is supported")]
    UnsupportedDomain {
        /// 1-based line number
        line: usize,
        /// Directive keyword as it appeared in the file
        directive: String,
    },

    /// A size directive outside the bounds the format accepts.
    #[error("line {line}: unsupported table size {size}, expected {min}..={max}")]
    UnsupportedSize {
        /// 1-based line number
        line: usize,
        /// Declared size
        size: usize,
        /// Smallest accepted size
        min: usize,
        /// Largest accepted size
        max: usize,
    },

    /// A second size declaration for a table that already has one.
    #[error("line {line}: duplicate {directive}")]
    DuplicateSize {
        /// 1-based line number
        line: usize,
        /// Directive keyword as it appeared in the file
        directive: String,
    },

    /// A directive implying a dimension that conflicts with an earlier
    /// declaration (1D vs 3D).
    #[error("line {line}: dimension mismatch")]
    DimensionMismatch {
        /// 1-based line number
        line: usize,
    },

    /// A data row encountered before any size directive.
    #[error("line {line}: table data appeared before table size")]
    RowBeforeSize {
        /// 1-based line number
        line: usize,
    },

    /// Stream ended with fewer rows than the declared capacity.
    #[error("incomplete table: expected {expected} entries, got {actual}")]
    IncompleteTable {
        /// Declared row count (N for 1D, N cubed for 3D)
        expected: usize,
        /// Rows actually read
        actual: usize,
    },

    /// Stream ended without any size declaration.
    #[error("no valid data in stream")]
    NoData,

    /// A header line that is neither blank, a comment, a recognized
    /// directive, nor a three-token numeric row.
    #[error("line {line}: unrecognized token {token}")]
    UnrecognizedDirective {
        /// 1-based line number
        line: usize,
        /// First token of the offending line
        token: String,
    },

    /// A table size outside the supported range, from a constructor or a
    /// resize/resample target.
    #[error("table size {size} out of range, expected {min}..={max}")]
    SizeOutOfRange {
        /// Requested size
        size: usize,
        /// Smallest accepted size
        min: usize,
        /// Largest accepted size
        max: usize,
    },

    /// An entry buffer whose length does not match the declared size.
    #[error("expected {expected} entries, got {actual}")]
    EntryCountMismatch {
        /// Entry count implied by the size
        expected: usize,
        /// Entry count supplied
        actual: usize,
    },

    /// A 1D table where a 3D table was required, or vice versa.
    #[error("expected {expected}D table, found {found}D")]
    WrongDimension {
        /// Required dimension (1 or 3)
        expected: usize,
        /// Dimension actually present
        found: usize,
    },

    /// I/O error while reading or writing a LUT file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LutError {
    /// Creates a [`LutError::MalformedDirective`] error.
    #[inline]
    pub fn malformed_directive(line: usize, directive: impl Into<String>) -> Self {
        Self::MalformedDirective {
            line,
            directive: directive.into(),
        }
    }

    /// Creates a [`LutError::UnsupportedDomain`] error.
    #[inline]
    pub fn unsupported_domain(line: usize, directive: impl Into<String>) -> Self {
        Self::UnsupportedDomain {
            line,
            directive: directive.into(),
        }
    }

    /// Creates a [`LutError::DuplicateSize`] error.
    #[inline]
    pub fn duplicate_size(line: usize, directive: impl Into<String>) -> Self {
        Self::DuplicateSize {
            line,
            directive: directive.into(),
        }
    }

    /// Creates a [`LutError::UnrecognizedDirective`] error.
    #[inline]
    pub fn unrecognized_directive(line: usize, token: impl Into<String>) -> Self {
        Self::UnrecognizedDirective {
            line,
            token: token.into(),
        }
    }

    /// Creates a [`LutError::SizeOutOfRange`] error.
    #[inline]
    pub fn size_out_of_range(size: usize, min: usize, max: usize) -> Self {
        Self::SizeOutOfRange { size, min, max }
    }

    /// Returns `true` for malformed directives and rows.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedDirective { .. } | Self::MalformedRow { .. }
        )
    }

    /// Returns `true` for domain or size values outside the supported set.
    #[inline]
    pub fn is_unsupported_value(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedDomain { .. } | Self::UnsupportedSize { .. }
        )
    }

    /// Returns `true` for violations of the stream's structural invariants.
    #[inline]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::DuplicateSize { .. }
                | Self::DimensionMismatch { .. }
                | Self::RowBeforeSize { .. }
                | Self::IncompleteTable { .. }
                | Self::NoData
        )
    }

    /// Returns `true` for unrecognized header lines.
    #[inline]
    pub fn is_unrecognized_directive(&self) -> bool {
        matches!(self, Self::UnrecognizedDirective { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[inline]
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Returns the 1-based line number for line-level parse errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedDirective { line, .. }
            | Self::MalformedRow { line }
            | Self::UnsupportedDomain { line, .. }
            | Self::UnsupportedSize { line, .. }
            | Self::DuplicateSize { line, .. }
            | Self::DimensionMismatch { line }
            | Self::RowBeforeSize { line }
            | Self::UnrecognizedDirective { line, .. } => Some(*line),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_line() {
        let err = LutError::malformed_directive(7, "DOMAIN_MIN");
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("DOMAIN_MIN"));
        assert_eq!(err.line(), Some(7));
        assert!(err.is_format_error());
    }

    #[test]
    fn test_categories_are_disjoint() {
        let errs = [
            LutError::MalformedRow { line: 1 },
            LutError::unsupported_domain(1, "DOMAIN_MAX"),
            LutError::duplicate_size(1, "LUT_3D_SIZE"),
            LutError::unrecognized_directive(1, "FOO"),
        ];
        for err in &errs {
            let flags = [
                err.is_format_error(),
                err.is_unsupported_value(),
                err.is_structural(),
                err.is_unrecognized_directive(),
            ];
            assert_eq!(flags.iter().filter(|&&f| f).count(), 1, "{err}");
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: LutError = io_err.into();
        assert!(err.is_io_error());
        assert_eq!(err.line(), None);
    }
}
