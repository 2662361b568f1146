//! Canonical text form of an X12 path.

use std::fmt;

use super::ast::PathValue;
use super::parser;

impl PathValue {
    /// Formats the path in canonical form.
    ///
    /// This is the inverse of parsing: `parse(&path.format())` gives back an
    /// equal path for anything the default parser accepts.
    pub fn format(&self) -> String {
        let mut ret = String::new();
        if !self.is_relative() {
            ret.push('/');
        }
        ret.push_str(&self.loops().join("/"));

        let refdes = self.format_refdes();
        if refdes.is_empty() {
            // A loop id shaped like a reference would be re-read as one
            if self
                .loops()
                .last()
                .is_some_and(|last| parser::is_reference_token(last))
            {
                ret.push('/');
            }
        } else {
            if self.segment_id().is_some() && !self.loops().is_empty() {
                ret.push('/');
            }
            ret.push_str(&refdes);
        }
        ret
    }

    /// Formats only the reference designator, e.g. `NM1[85]03-1`.
    pub fn format_refdes(&self) -> String {
        let mut ret = String::new();
        if let Some(seg_id) = self.segment_id() {
            ret.push_str(seg_id);
        }
        if let Some(qual) = self.qualifier() {
            ret.push('[');
            ret.push_str(qual);
            ret.push(']');
        }
        if let Some(idx) = self.element_index() {
            ret.push_str(&format!("{:02}", idx));
        }
        if let Some(idx) = self.subelement_index() {
            ret.push_str(&format!("-{}", idx));
        }
        ret
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Formats a path in canonical form. Same as [`PathValue::format`].
pub fn format(path: &PathValue) -> String {
    path.format()
}
