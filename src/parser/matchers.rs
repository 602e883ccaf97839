//! Compiled patterns for reading attribute values.
//!
//! All patterns are compiled up front by [`SvgMatchers::new`]; a bad pattern
//! is reported there instead of leaving a matcher silently unusable.

use kurbo::{Affine, Point};
use regex::Regex;

use crate::error::{Error, Result};

/// `name(args)` transform functions, e.g. `translate(10, 20)`
const TRANSFORM_PATTERN: &str = r"(?i)([a-z]+)\s*\(([^)]*)\)";
/// Numeric literals with optional sign, fraction and exponent
const NUMBER_PATTERN: &str = r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?";
/// Body of a `<text>` element
const TEXT_ELEMENT_PATTERN: &str = r"(?is)<text[^>]*>(.*)</text>";
/// `url(#id)` references used by clip-path and mask
const URL_ID_PATTERN: &str = r"(?i)url\(\s*#([^)]*?)\s*\)";
/// Trailing unit suffix of a length, e.g. `px` or `%`
const UNITS_PATTERN: &str = r"(?i)(px|pt|pc|em|ex|cm|mm|in|%)$";

/// The fixed set of patterns used by the markup front end.
///
/// Construct once and share by reference; matching never mutates.
#[derive(Debug, Clone)]
pub struct SvgMatchers {
    transform: Regex,
    number: Regex,
    text_element: Regex,
    url_id: Regex,
    units: Regex,
}

impl SvgMatchers {
    pub fn new() -> Result<Self> {
        Ok(Self {
            transform: compile("transform", TRANSFORM_PATTERN)?,
            number: compile("number", NUMBER_PATTERN)?,
            text_element: compile("text element", TEXT_ELEMENT_PATTERN)?,
            url_id: compile("url id", URL_ID_PATTERN)?,
            units: compile("units", UNITS_PATTERN)?,
        })
    }

    /// Parses a transform list, composing the functions left to right.
    ///
    /// Accepts `matrix`, `translate`, `scale`, `rotate` (with an optional
    /// centre), `skewX` and `skewY`. An empty string is the identity.
    pub fn parse_transform(&self, input: &str) -> Result<Affine> {
        let mut result = Affine::IDENTITY;
        for caps in self.transform.captures_iter(input) {
            let name = caps[1].to_ascii_lowercase();
            let args = self.numbers(&caps[2]);
            let step = match (name.as_str(), args.as_slice()) {
                ("matrix", [a, b, c, d, e, f]) => Affine::new([*a, *b, *c, *d, *e, *f]),
                ("translate", [tx]) => Affine::translate((*tx, 0.0)),
                ("translate", [tx, ty]) => Affine::translate((*tx, *ty)),
                ("scale", [s]) => Affine::scale(*s),
                ("scale", [sx, sy]) => Affine::scale_non_uniform(*sx, *sy),
                ("rotate", [deg]) => Affine::rotate(deg.to_radians()),
                ("rotate", [deg, cx, cy]) => {
                    Affine::rotate_about(deg.to_radians(), Point::new(*cx, *cy))
                }
                ("skewx", [deg]) => Affine::skew(deg.to_radians().tan(), 0.0),
                ("skewy", [deg]) => Affine::skew(0.0, deg.to_radians().tan()),
                _ => return Err(Error::InvalidTransform(caps[0].to_string())),
            };
            result = result * step;
        }
        let rest = self.transform.replace_all(input, "");
        if rest.chars().any(|c| !c.is_whitespace() && c != ',') {
            return Err(Error::InvalidTransform(input.to_string()));
        }
        Ok(result)
    }

    /// Every numeric literal in `input`, in order.
    pub fn numbers(&self, input: &str) -> Vec<f64> {
        self.number
            .find_iter(input)
            .filter_map(|m| m.as_str().parse().ok())
            .collect()
    }

    /// Content between `<text ...>` and `</text>`.
    pub fn text_body(&self, input: &str) -> Option<String> {
        self.text_element
            .captures(input)
            .map(|caps| caps[1].to_string())
    }

    /// The id in a `url(#id)` reference.
    pub fn url_id(&self, input: &str) -> Option<String> {
        self.url_id.captures(input).map(|caps| caps[1].to_string())
    }

    /// Splits a length such as `12.5px` into its value and unit suffix.
    pub fn length(&self, input: &str) -> Option<(f64, Option<String>)> {
        let input = input.trim();
        let unit = self.units.find(input).map(|m| m.as_str());
        let number = &input[..input.len() - unit.map_or(0, str::len)];
        let value = number.trim().parse().ok()?;
        Some((value, unit.map(str::to_string)))
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern { name, source })
}
