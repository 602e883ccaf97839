//! Root viewport: a composite node with a size and an optional view box.

use serde::{Deserialize, Serialize};

use super::group::union_of;
use super::node::{Node, NodeAttrs};
use super::style::PreserveAspectRatio;
use crate::serialize::{SerializableBlock, Serializer};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_box: Option<kurbo::Rect>,
    pub preserve_aspect_ratio: PreserveAspectRatio,
    pub contents: Vec<Node>,
    #[serde(flatten)]
    pub attrs: NodeAttrs,
}

impl Viewport {
    pub fn new(width: f64, height: f64, contents: Vec<Node>) -> Self {
        Self {
            width,
            height,
            contents,
            ..Default::default()
        }
    }

    /// Replaces the whole child list, returning the previous one.
    pub fn set_contents(&mut self, contents: Vec<Node>) -> Vec<Node> {
        std::mem::replace(&mut self.contents, contents)
    }

    /// The declared viewport area.
    pub fn frame(&self) -> kurbo::Rect {
        kurbo::Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Union of the children's bounds, as for a group.
    pub fn bounds(&self) -> kurbo::Rect {
        union_of(self.contents.iter().map(Node::bounds))
    }
}

impl SerializableBlock for Viewport {
    fn serialize_into(&self, serializer: &mut Serializer<'_>) {
        serializer
            .add("width", &self.width)
            .add("height", &self.height)
            .add_optional("viewBox", self.view_box.as_ref())
            .add_option("preserveAspectRatio", &self.preserve_aspect_ratio);
        self.attrs.serialize_into(serializer);
        serializer.add_children(&self.contents);
    }
}
