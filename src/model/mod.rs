//! Scene tree model.
//!
//! [`Node`] is a closed sum over every drawable kind. All kinds share
//! [`NodeAttrs`] (transform, opacity, clip, mask, identifiers); composite
//! kinds own their children outright, and clip and mask nodes belong to the
//! node that declares them.

mod gesture;
mod group;
mod image;
mod node;
mod shapes;
mod style;
mod user_space;
mod viewport;

pub use gesture::{Gesture, GestureKind, Handlers};
pub use group::Group;
pub use image::{DataImage, UrlImage};
pub use node::{Node, NodeAttrs, NodeKind};
pub use shapes::{Circle, Ellipse, Line, Path, Polygon, Polyline, Rect, Text};
pub use style::{
    Align, Color, Font, LineCap, LineJoin, PreserveAspectRatio, Scaling, ShapeStyle, Stroke,
    TextAnchor,
};
pub use user_space::{CoordinateSpaceNode, UserSpace};
pub use viewport::Viewport;
