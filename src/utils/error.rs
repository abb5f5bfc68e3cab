//! Error handling for doctex conversions
//!
//! Fatal errors abort a conversion; warnings record the places where the
//! output degraded to a placeholder or a literal rendering.

use std::fmt;

/// Conversion error type
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// An inline image declared a content type that is not `image/<subtype>`.
    InvalidImageBlob { content_type: String },
    /// A directive line named an unknown directive (only fatal in strict mode).
    UnsupportedDirective { name: String, line: String },
    /// The document tree could not be read
    InvalidInput { message: String },
    /// IO error (for bundle writing and file input)
    IoError { message: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidImageBlob { content_type } => {
                write!(f, "Bad blob type: {}", content_type)
            }
            ConversionError::UnsupportedDirective { name, line } => {
                write!(f, "Unsupported directive '{}' in line: {}", name, line)
            }
            ConversionError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            ConversionError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        ConversionError::invalid(err.to_string())
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Kind of a non-fatal conversion warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A node kind outside the supported set was replaced by a placeholder
    UnsupportedNodeKind,
    /// A paragraph heading level without a LaTeX counterpart
    UnsupportedHeadingKind,
    /// A directive line with an unknown name was rendered as text
    UnsupportedDirective,
    /// A list item tried to close more environments than were open
    ListStackUnderflow,
    /// Image names queued by a directive were never used
    UnusedImageNames,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::UnsupportedNodeKind => write!(f, "unsupported node kind"),
            WarningKind::UnsupportedHeadingKind => write!(f, "unsupported heading kind"),
            WarningKind::UnsupportedDirective => write!(f, "unsupported directive"),
            WarningKind::ListStackUnderflow => write!(f, "list stack underflow"),
            WarningKind::UnusedImageNames => write!(f, "unused image names"),
        }
    }
}

/// A warning generated during conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionWarning {
    /// The kind of warning (for programmatic handling)
    pub kind: WarningKind,
    /// Human-readable message naming the offending raw value
    pub message: String,
}

impl ConversionWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConversionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

// Convenience constructors for errors
impl ConversionError {
    pub fn invalid_image(content_type: impl Into<String>) -> Self {
        ConversionError::InvalidImageBlob {
            content_type: content_type.into(),
        }
    }

    pub fn unsupported_directive(name: impl Into<String>, line: impl Into<String>) -> Self {
        ConversionError::UnsupportedDirective {
            name: name.into(),
            line: line.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ConversionError::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_image_display() {
        let err = ConversionError::invalid_image("application/pdf");
        assert_eq!(err.to_string(), "Bad blob type: application/pdf");
    }

    #[test]
    fn test_unsupported_directive_display() {
        let err = ConversionError::unsupported_directive("figures", "#figures a b");
        let msg = err.to_string();
        assert!(msg.contains("figures"));
        assert!(msg.contains("#figures a b"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_error_is_invalid_input() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ConversionError = json_err.into();
        assert!(matches!(err, ConversionError::InvalidInput { .. }));
        assert!(err.to_string().starts_with("Invalid input: "));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ConversionError = io.into();
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_warning_display() {
        let warning = ConversionWarning::new(WarningKind::UnsupportedNodeKind, "TABLE");
        assert_eq!(warning.to_string(), "[unsupported node kind] TABLE");
    }
}
