//! Node kind to markup tag mapping.
//!
//! The mapping is closed. Image kinds and the coordinate-space wrapper have
//! no tag, and the serializer skips them wherever they appear.

use crate::model::NodeKind;

/// Markup tag for a node kind, or `None` when the kind is not written out.
pub fn tag_name(kind: NodeKind) -> Option<&'static str> {
    match kind {
        NodeKind::Viewport => Some("viewport"),
        NodeKind::Group => Some("g"),
        NodeKind::Rect => Some("rect"),
        NodeKind::Text => Some("text"),
        NodeKind::Ellipse => Some("ellipse"),
        NodeKind::Line => Some("line"),
        NodeKind::Polyline => Some("polyline"),
        NodeKind::Path => Some("path"),
        NodeKind::Circle => Some("circle"),
        NodeKind::Polygon => Some("polygon"),
        NodeKind::DataImage | NodeKind::UrlImage | NodeKind::CoordinateSpace => None,
    }
}

/// Reverse lookup used when reading markup back.
pub fn kind_for_tag(tag: &str) -> Option<NodeKind> {
    NodeKind::ALL
        .iter()
        .copied()
        .find(|kind| tag_name(*kind) == Some(tag))
}
