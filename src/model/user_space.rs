//! Coordinate-space wrapper used for clip paths and masks.

use kurbo::Affine;
use log::warn;
use serde::{Deserialize, Serialize};

use super::node::{Node, NodeAttrs};
use crate::error::{Error, Result};
use crate::serialize::{SerializableBlock, SerializableOption, Serializer};

/// How the wrapped node's coordinates are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserSpace {
    /// Fractions of the referencing element's bounding box
    #[serde(rename = "objectBoundingBox")]
    ObjectBoundingBox,
    /// The coordinate system in effect where the node is referenced
    #[serde(rename = "userSpaceOnUse")]
    UserSpaceOnUse,
}

/// Neither mode is implied, so the value is always written.
impl SerializableOption for UserSpace {
    fn is_default(&self) -> bool {
        false
    }

    fn option_value(&self) -> String {
        match self {
            UserSpace::ObjectBoundingBox => "objectBoundingBox",
            UserSpace::UserSpaceOnUse => "userSpaceOnUse",
        }
        .to_string()
    }
}

/// Wraps exactly one node together with its coordinate-space mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateSpaceNode {
    pub node: Box<Node>,
    pub user_space: UserSpace,
    #[serde(flatten)]
    pub attrs: NodeAttrs,
}

impl CoordinateSpaceNode {
    pub fn new(node: impl Into<Node>, user_space: UserSpace) -> Self {
        Self {
            node: Box::new(node.into()),
            user_space,
            attrs: NodeAttrs::default(),
        }
    }

    /// The wrapped node, ready to draw in absolute coordinates.
    ///
    /// Fails in `objectBoundingBox` mode: the caller must first resolve the
    /// wrapper against a bounding box with [`Self::into_user_space`].
    pub fn renderable(&self) -> Result<&Node> {
        match self.user_space {
            UserSpace::UserSpaceOnUse => Ok(&self.node),
            UserSpace::ObjectBoundingBox => Err(Error::UnresolvedBoundingBox {
                id: self.attrs.id.clone(),
            }),
        }
    }

    /// Resolves bounding-box units against `bbox`, composing the mapping from
    /// the unit square onto `bbox` after the wrapped node's own transform.
    /// Wrappers already in `userSpaceOnUse` are returned unchanged.
    pub fn into_user_space(mut self, bbox: kurbo::Rect) -> Self {
        if self.user_space == UserSpace::UserSpaceOnUse {
            return self;
        }
        if bbox.width() == 0.0 || bbox.height() == 0.0 {
            warn!("resolving objectBoundingBox against an empty box {:?}", bbox);
        }
        let to_bbox = Affine::translate(bbox.origin().to_vec2())
            * Affine::scale_non_uniform(bbox.width(), bbox.height());
        let attrs = self.node.attrs_mut();
        attrs.transform = to_bbox * attrs.transform;
        self.user_space = UserSpace::UserSpaceOnUse;
        self
    }
}

impl SerializableBlock for CoordinateSpaceNode {
    fn serialize_into(&self, serializer: &mut Serializer<'_>) {
        serializer.add_option("userSpace", &self.user_space);
        self.attrs.serialize_into(serializer);
    }
}
