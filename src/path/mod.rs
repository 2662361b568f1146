//! X12 path parsing and formatting.
//!
//! An X12 path addresses a position in an X12 document: a run of loop ids,
//! then optionally a reference designator naming a segment, a qualifier,
//! an element and a sub-element.
//!
//! # Syntax
//!
//! - `/LOOP_1/LOOP_2` - loops, anchored at the document root
//! - `/LOOP_1/LOOP_2/SEG` - a segment inside those loops
//! - `/LOOP_1/LOOP_2/SEG02` - its second element
//! - `/LOOP_1/LOOP_2/SEG[424]02-1` - first component of that element, in the
//!   segment variant qualified by `424`
//! - `SEG[434]02-1`, `02-1`, `02` - relative references
//! - `/LOOP_1/HL/` - a trailing `/` names loops only
//!
//! # Examples
//!
//! ```
//! use x12path::path::parse;
//!
//! let path = parse("/2000A/2010AA/NM1[85]03").unwrap();
//! assert_eq!(path.loops(), ["2000A", "2010AA"]);
//! assert_eq!(path.segment_id(), Some("NM1"));
//! assert_eq!(path.qualifier(), Some("85"));
//! assert_eq!(path.element_index(), Some(3));
//! assert_eq!(path.format(), "/2000A/2010AA/NM1[85]03");
//! ```

pub mod ast;
pub mod error;
pub mod format;
pub mod parser;

use std::str::FromStr;

pub use ast::{PathBuilder, PathValue};
pub use error::PathSyntaxError;
pub use format::format;
pub use parser::{ParseOptions, Parser, TrailingTokenMode};

/// Parses a path string with default options.
pub fn parse(text: &str) -> Result<PathValue, PathSyntaxError> {
    Parser::new().parse(text)
}

impl FromStr for PathValue {
    type Err = PathSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Is the child path really a child of the root path?
///
/// Compares the `/`-separated components textually: the child must have
/// more components than the root and start with all of them.
pub fn is_child_path(root_path: &str, child_path: &str) -> bool {
    let root: Vec<&str> = root_path.split('/').collect();
    let child: Vec<&str> = child_path.split('/').collect();
    if root.len() >= child.len() {
        return false;
    }
    root.iter().zip(child.iter()).all(|(r, c)| r == c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let path: PathValue = "/2000A/HL03".parse().unwrap();
        assert_eq!(path.segment_id(), Some("HL"));
        assert_eq!(path.element_index(), Some(3));
    }

    #[test]
    fn test_equality_by_value() {
        assert_eq!(parse("/A/B").unwrap(), parse("/A/B").unwrap());
        assert_ne!(parse("/A/B").unwrap(), parse("/A/C").unwrap());
        assert_ne!(parse("A/B").unwrap(), parse("/A/B").unwrap());
        assert_ne!(parse("/A/REF").unwrap(), parse("/A/REF/").unwrap());
    }

    #[test]
    fn test_is_child_path() {
        assert!(is_child_path("/2000A", "/2000A/2000B"));
        assert!(is_child_path("/2000A", "/2000A/2000B/HL"));
        assert!(!is_child_path("/2000A/2000B", "/2000A"));
        assert!(!is_child_path("/2000A", "/2000A"));
        assert!(!is_child_path("/2000A", "/2000C/2000B"));
    }
}
