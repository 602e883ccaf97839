//! Composite node: an ordered list of children.

use serde::{Deserialize, Serialize};

use super::node::{Node, NodeAttrs};
use crate::serialize::{SerializableBlock, Serializer};

/// A node owning an ordered list of children.
///
/// List order is paint order and serialization order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    pub contents: Vec<Node>,
    #[serde(flatten)]
    pub attrs: NodeAttrs,
}

impl Group {
    pub fn new(contents: Vec<Node>) -> Self {
        Self {
            contents,
            attrs: NodeAttrs::default(),
        }
    }

    /// Replaces the whole child list, returning the previous one.
    pub fn set_contents(&mut self, contents: Vec<Node>) -> Vec<Node> {
        std::mem::replace(&mut self.contents, contents)
    }

    /// Union of the children's bounds, seeded with the first child's.
    pub fn bounds(&self) -> kurbo::Rect {
        union_of(self.contents.iter().map(Node::bounds))
    }

    pub fn frame(&self) -> kurbo::Rect {
        union_of(self.contents.iter().map(Node::frame))
    }
}

impl SerializableBlock for Group {
    fn serialize_into(&self, serializer: &mut Serializer<'_>) {
        self.attrs.serialize_into(serializer);
        serializer.add_children(&self.contents);
    }
}

/// Union of rectangles; the zero rectangle when there are none.
pub(crate) fn union_of(mut rects: impl Iterator<Item = kurbo::Rect>) -> kurbo::Rect {
    match rects.next() {
        Some(first) => rects.fold(first, |acc, r| acc.union(r)),
        None => kurbo::Rect::ZERO,
    }
}
