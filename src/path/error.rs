//! Error types for X12 path parsing and construction.

/// Errors that can occur while parsing or building an X12 path.
///
/// Every variant carries the path text that was rejected. Paths assembled
/// with [`PathBuilder`](super::PathBuilder) report their would-be canonical
/// form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathSyntaxError {
    /// The trailing token matched none of the reference grammar.
    #[error("Path \"{path}\" is invalid. Unrecognized segment reference '{token}'")]
    UnmatchedToken { path: String, token: String },

    /// A qualifier was given without a segment identifier.
    #[error("Path \"{path}\" is invalid. Must specify a segment identifier with a qualifier")]
    QualifierWithoutSegment { path: String },

    /// An element or sub-element index follows loops but names no segment.
    #[error("Path \"{path}\" is invalid. Must specify a segment identifier")]
    ElementWithoutSegment { path: String },

    /// An index did not fit in its integer type.
    #[error("Path \"{path}\" is invalid. Index '{digits}' is out of range")]
    IndexOutOfRange { path: String, digits: String },

    /// A loop id would not survive formatting: it contains `/`, or it is
    /// an empty first loop on a relative path.
    #[error("Path \"{path}\" is invalid. Bad loop identifier '{loop_id}'")]
    InvalidLoopId { path: String, loop_id: String },

    /// A segment identifier is not one uppercase letter plus one or two
    /// uppercase letters or digits.
    #[error("Path \"{path}\" is invalid. Bad segment identifier '{segment_id}'")]
    InvalidSegmentId { path: String, segment_id: String },

    /// A qualifier is empty or not uppercase alphanumeric.
    #[error("Path \"{path}\" is invalid. Bad qualifier '{qualifier}'")]
    InvalidQualifier { path: String, qualifier: String },

    /// An element index is above 99.
    #[error("Path \"{path}\" is invalid. Element index {index} needs more than two digits")]
    InvalidElementIndex { path: String, index: u32 },
}

impl PathSyntaxError {
    /// Returns the path text that was rejected.
    pub fn path(&self) -> &str {
        match self {
            PathSyntaxError::UnmatchedToken { path, .. }
            | PathSyntaxError::QualifierWithoutSegment { path }
            | PathSyntaxError::ElementWithoutSegment { path }
            | PathSyntaxError::IndexOutOfRange { path, .. }
            | PathSyntaxError::InvalidLoopId { path, .. }
            | PathSyntaxError::InvalidSegmentId { path, .. }
            | PathSyntaxError::InvalidQualifier { path, .. }
            | PathSyntaxError::InvalidElementIndex { path, .. } => path,
        }
    }
}
