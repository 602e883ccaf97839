//! Helpers for the markup front end: compiled value patterns and the static
//! tag and attribute tables.

mod constants;
mod matchers;

pub use constants::{is_group_tag, parse_style, GROUP_TAGS, STYLE_ATTRIBUTES};
pub use matchers::SvgMatchers;
