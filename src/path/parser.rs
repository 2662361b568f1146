//! X12 path string parser.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use super::ast::PathValue;
use super::error::PathSyntaxError;

/// Reference designator grammar: `SEG[QUAL]NN-M`, every part optional,
/// fixed order, whole token.
static REFDES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<seg_id>[A-Z][A-Z0-9]{1,2})?(?:\[(?P<qualifier>[A-Z0-9]+)\])?(?P<ele_idx>[0-9]{2})?(?:-(?P<subele_idx>[0-9]+))?$",
    )
    .expect("reference designator pattern is valid")
});

static SEGMENT_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z0-9]{1,2}$").expect("segment id pattern is valid"));

static QUALIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z0-9]+$").expect("qualifier pattern is valid"));

/// What to do with a trailing token that is not a reference designator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingTokenMode {
    /// Keep the token as the innermost loop id.
    #[default]
    Lenient,
    /// Reject the path with [`PathSyntaxError::UnmatchedToken`].
    Strict,
}

/// Options controlling how path strings are parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub trailing_token: TrailingTokenMode,
}

impl ParseOptions {
    /// Options that reject unrecognized trailing tokens.
    pub fn strict() -> Self {
        Self {
            trailing_token: TrailingTokenMode::Strict,
        }
    }
}

/// Parser for X12 path strings.
///
/// ```
/// use x12path::path::{Parser, ParseOptions};
///
/// let parser = Parser::with_options(ParseOptions::strict());
/// let path = parser.parse("/2000A/2010AA/NM1[85]03").unwrap();
/// assert_eq!(path.segment_id(), Some("NM1"));
/// assert!(parser.parse("/2000A/2010AA").is_err());
/// assert!(parser.parse("/2000A/2010AA/").is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    /// Creates a parser with default (lenient) options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Options this parser was built with.
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parses a path string into a [`PathValue`].
    ///
    /// The text is split on `/`. A leading `/` makes the path absolute and a
    /// trailing `/` means the path names loops only. Otherwise the last
    /// token is read as a reference designator.
    pub fn parse(&self, text: &str) -> Result<PathValue, PathSyntaxError> {
        if text.is_empty() {
            return Ok(PathValue::default());
        }

        let (relative, rest) = match text.strip_prefix('/') {
            Some(rest) => (false, rest),
            None => (true, text),
        };
        let mut loops: Vec<String> = rest.split('/').map(str::to_string).collect();
        trace!(path = text, tokens = loops.len(), "split x12 path");

        // Ended in a /, so no segment
        if loops.last().is_some_and(|token| token.is_empty()) {
            loops.pop();
            return Ok(PathValue::new(relative, loops, None, None, None, None));
        }

        let token = match loops.last() {
            Some(token) => token.clone(),
            None => return Ok(PathValue::new(relative, loops, None, None, None, None)),
        };

        let Some(caps) = REFDES.captures(&token) else {
            return match self.options.trailing_token {
                TrailingTokenMode::Lenient => {
                    debug!(path = text, token = %token, "trailing token kept as loop id");
                    Ok(PathValue::new(relative, loops, None, None, None, None))
                }
                TrailingTokenMode::Strict => Err(PathSyntaxError::UnmatchedToken {
                    path: text.to_string(),
                    token,
                }),
            };
        };
        loops.pop();

        let segment_id = caps.name("seg_id").map(|m| m.as_str().to_string());
        let qualifier = caps.name("qualifier").map(|m| m.as_str().to_string());
        let element_index = caps
            .name("ele_idx")
            .map(|m| parse_index::<u8>(text, m.as_str()))
            .transpose()?;
        let subelement_index = caps
            .name("subele_idx")
            .map(|m| parse_index::<u64>(text, m.as_str()))
            .transpose()?;

        let path = PathValue::new(
            relative,
            loops,
            segment_id,
            qualifier,
            element_index,
            subelement_index,
        );
        path.check_invariants(text)?;
        debug!(
            path = text,
            loops = path.loops().len(),
            segment_id = path.segment_id(),
            "parsed x12 path"
        );
        Ok(path)
    }
}

fn parse_index<T: std::str::FromStr>(text: &str, digits: &str) -> Result<T, PathSyntaxError> {
    digits
        .parse::<T>()
        .map_err(|_| PathSyntaxError::IndexOutOfRange {
            path: text.to_string(),
            digits: digits.to_string(),
        })
}

/// True if `token` would be read as a reference designator.
pub(crate) fn is_reference_token(token: &str) -> bool {
    REFDES.is_match(token)
}

pub(crate) fn is_segment_id(segment_id: &str) -> bool {
    SEGMENT_ID.is_match(segment_id)
}

pub(crate) fn is_qualifier(qualifier: &str) -> bool {
    QUALIFIER.is_match(qualifier)
}
