//! The structured form of an X12 path.

use serde::Serialize;

use super::error::PathSyntaxError;
use super::parser;

/// A parsed X12 path: loops, then an optional reference designator.
///
/// Values are immutable once built. Get one from [`parse`](super::parse),
/// [`Parser`](super::Parser) or [`PathBuilder`].
///
/// Two paths are equal when every field is equal. There is no ordering
/// between paths, so they cannot be compared with `<`:
///
/// ```compile_fail
/// use x12path::path::parse;
///
/// let a = parse("/2000A/2000B").unwrap();
/// let b = parse("/2000A/2000C").unwrap();
/// let _ = a < b;
/// ```
///
/// Paths are not hashable and cannot key a hash-based collection:
///
/// ```compile_fail
/// use std::collections::HashSet;
/// use x12path::path::{parse, PathValue};
///
/// let mut seen: HashSet<PathValue> = HashSet::new();
/// seen.insert(parse("NM1").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathValue {
    relative: bool,
    loops: Vec<String>,
    segment_id: Option<String>,
    qualifier: Option<String>,
    element_index: Option<u8>,
    subelement_index: Option<u64>,
}

impl Default for PathValue {
    /// The empty relative path, as parsed from `""`.
    fn default() -> Self {
        Self {
            relative: true,
            loops: Vec::new(),
            segment_id: None,
            qualifier: None,
            element_index: None,
            subelement_index: None,
        }
    }
}

impl PathValue {
    pub(crate) fn new(
        relative: bool,
        loops: Vec<String>,
        segment_id: Option<String>,
        qualifier: Option<String>,
        element_index: Option<u8>,
        subelement_index: Option<u64>,
    ) -> Self {
        Self {
            relative,
            loops,
            segment_id,
            qualifier,
            element_index,
            subelement_index,
        }
    }

    /// Returns a builder for assembling a path field by field.
    pub fn builder() -> PathBuilder {
        PathBuilder::default()
    }

    /// True when the path has no leading `/`.
    pub fn is_relative(&self) -> bool {
        self.relative
    }

    /// Loop identifiers, outermost first.
    pub fn loops(&self) -> &[String] {
        &self.loops
    }

    pub fn segment_id(&self) -> Option<&str> {
        self.segment_id.as_deref()
    }

    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    pub fn element_index(&self) -> Option<u8> {
        self.element_index
    }

    pub fn subelement_index(&self) -> Option<u64> {
        self.subelement_index
    }

    /// Is the path empty?
    ///
    /// A path is empty when it is relative, has no loops, no segment id and
    /// no element index. A lone qualifier or sub-element index does not make
    /// a path non-empty, so an empty path is not necessarily equal to
    /// `PathValue::default()`. Callers relying on full emptiness should
    /// compare against the default instead.
    pub fn is_empty(&self) -> bool {
        self.relative
            && self.loops.is_empty()
            && self.segment_id.is_none()
            && self.element_index.is_none()
    }

    /// Checks the structural rules every path must satisfy.
    ///
    /// `text` is the input reported in the error.
    pub(crate) fn check_invariants(&self, text: &str) -> Result<(), PathSyntaxError> {
        if self.segment_id.is_none() && self.qualifier.is_some() {
            return Err(PathSyntaxError::QualifierWithoutSegment {
                path: text.to_string(),
            });
        }
        if self.segment_id.is_none()
            && (self.element_index.is_some() || self.subelement_index.is_some())
            && !self.loops.is_empty()
        {
            return Err(PathSyntaxError::ElementWithoutSegment {
                path: text.to_string(),
            });
        }
        Ok(())
    }
}

/// Builds a [`PathValue`] field by field.
///
/// Each field is checked against the same shapes the parser accepts, and
/// the structural rules are enforced in [`PathBuilder::build`].
#[derive(Debug, Clone)]
pub struct PathBuilder {
    relative: bool,
    loops: Vec<String>,
    segment_id: Option<String>,
    qualifier: Option<String>,
    element_index: Option<u32>,
    subelement_index: Option<u64>,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self {
            relative: true,
            loops: Vec::new(),
            segment_id: None,
            qualifier: None,
            element_index: None,
            subelement_index: None,
        }
    }
}

impl PathBuilder {
    /// Anchors the path at the document root.
    pub fn absolute(mut self) -> Self {
        self.relative = false;
        self
    }

    /// Appends a loop identifier.
    ///
    /// Loop ids are free text, but [`PathBuilder::build`] rejects any
    /// containing `/`, and an empty first loop on a relative path.
    pub fn push_loop(mut self, loop_id: impl Into<String>) -> Self {
        self.loops.push(loop_id.into());
        self
    }

    pub fn segment(mut self, segment_id: impl Into<String>) -> Self {
        self.segment_id = Some(segment_id.into());
        self
    }

    pub fn qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    pub fn element(mut self, index: u32) -> Self {
        self.element_index = Some(index);
        self
    }

    pub fn subelement(mut self, index: u64) -> Self {
        self.subelement_index = Some(index);
        self
    }

    /// Validates the fields and produces the path.
    pub fn build(self) -> Result<PathValue, PathSyntaxError> {
        let element_index = match self.element_index {
            Some(idx) if idx <= 99 => Some(idx as u8),
            Some(idx) => {
                let partial = PathValue::new(
                    self.relative,
                    self.loops,
                    self.segment_id,
                    self.qualifier,
                    None,
                    self.subelement_index,
                );
                return Err(PathSyntaxError::InvalidElementIndex {
                    path: partial.format(),
                    index: idx,
                });
            }
            None => None,
        };
        let value = PathValue::new(
            self.relative,
            self.loops,
            self.segment_id,
            self.qualifier,
            element_index,
            self.subelement_index,
        );
        let text = value.format();

        if let Some(loop_id) = value.loops().iter().find(|id| id.contains('/')) {
            return Err(PathSyntaxError::InvalidLoopId {
                loop_id: loop_id.clone(),
                path: text,
            });
        }
        // An empty first loop would format as a leading `/`
        if value.is_relative() && value.loops().first().is_some_and(|id| id.is_empty()) {
            return Err(PathSyntaxError::InvalidLoopId {
                loop_id: String::new(),
                path: text,
            });
        }
        if let Some(seg_id) = value.segment_id() {
            if !parser::is_segment_id(seg_id) {
                return Err(PathSyntaxError::InvalidSegmentId {
                    segment_id: seg_id.to_string(),
                    path: text,
                });
            }
        }
        if let Some(qual) = value.qualifier() {
            if !parser::is_qualifier(qual) {
                return Err(PathSyntaxError::InvalidQualifier {
                    qualifier: qual.to_string(),
                    path: text,
                });
            }
        }
        value.check_invariants(&text)?;
        Ok(value)
    }
}
