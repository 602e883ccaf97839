//! svgtree - Vector-graphics scene model with a canonical markup serializer
//!
//! This library models a scene as a tree of typed nodes (groups, shapes,
//! viewports) and writes it back out as nested, tab-indented markup that
//! leaves default-valued attributes out.
//!
//! # Example
//!
//! ```rust
//! use svgtree::model::{Group, Node, Rect};
//!
//! let scene = Node::from(Group::new(vec![
//!     Node::from(Rect::new(0.0, 0.0, 10.0, 20.0)).with_id("r1"),
//! ]))
//! .with_id("root");
//!
//! let markup = svgtree::serialize(&scene, None);
//! assert_eq!(
//!     markup,
//!     "<g>\n\tid=\"root\"\n\t<rect id=\"r1\" width=10 height=20></rect>\n</g>\n"
//! );
//! ```
//!
//! # Node kinds
//!
//! - Composite: group (`g`), viewport (`viewport`)
//! - Shapes: `rect`, `circle`, `ellipse`, `line`, `polyline`, `polygon`, `path`, `text`
//! - Without a tag (skipped by the serializer): data and URL images, coordinate-space wrappers

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod serialize;

pub use config::SerializeOptions;
pub use error::{Error, Result};
pub use kurbo;
pub use model::{Node, NodeKind};
pub use serialize::Serializer;

/// Serialize a scene tree to canonical markup.
///
/// # Arguments
/// * `node` - Root of the tree, typically a group or viewport
/// * `options` - Layout options, `None` for the defaults
///
/// Returns an empty string when the root kind has no tag.
pub fn serialize(node: &Node, options: Option<SerializeOptions>) -> String {
    let options = options.unwrap_or_default();
    Serializer::serialize_with(node, &options)
}

/// Decode a JSON scene description and serialize it.
///
/// # Example
/// ```rust
/// let markup = svgtree::render_scene_json(
///     r#"{"type": "circle", "id": "c", "r": 4}"#,
///     None,
/// ).unwrap();
/// assert_eq!(markup, "<circle id=\"c\" r=4></circle>\n");
/// ```
pub fn render_scene_json(json: &str, options: Option<SerializeOptions>) -> Result<String> {
    let scene = Node::from_json(json)?;
    Ok(serialize(&scene, options))
}
