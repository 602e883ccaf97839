//! Static tables of recognised SVG tags and presentation attributes.

use lazy_static::lazy_static;
use std::collections::{BTreeMap, HashSet};

lazy_static! {
    /// Tags read as composite nodes.
    pub static ref GROUP_TAGS: HashSet<&'static str> = ["svg", "g"].into_iter().collect();

    /// Presentation attributes honoured in `style` declarations.
    pub static ref STYLE_ATTRIBUTES: HashSet<&'static str> = [
        "stroke",
        "stroke-width",
        "stroke-opacity",
        "stroke-dasharray",
        "stroke-dashoffset",
        "stroke-linecap",
        "stroke-linejoin",
        "stroke-miterlimit",
        "fill",
        "fill-rule",
        "fill-opacity",
        "mask",
        "color",
        "stop-color",
        "stop-opacity",
        "font-family",
        "font-size",
        "font-weight",
        "text-anchor",
        "visibility",
        "display",
        "data-name",
    ]
    .into_iter()
    .collect();
}

pub fn is_group_tag(tag: &str) -> bool {
    GROUP_TAGS.contains(tag)
}

/// Splits a `style` attribute (`fill: red; stroke-width: 2`) into its
/// declarations, keeping only recognised presentation attributes.
/// Later declarations override earlier ones.
pub fn parse_style(style: &str) -> BTreeMap<String, String> {
    style
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .map(|(name, value)| (name.trim(), value.trim()))
        .filter(|(name, value)| !value.is_empty() && STYLE_ATTRIBUTES.contains(*name))
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
