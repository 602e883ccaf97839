//! The node sum type and the attributes every node kind shares.

use kurbo::{Affine, Point};
use serde::{Deserialize, Serialize};

use super::gesture::{Gesture, GestureKind, Handlers};
use super::group::Group;
use super::image::{DataImage, UrlImage};
use super::shapes::{Circle, Ellipse, Line, Path, Polygon, Polyline, Rect, Text};
use super::user_space::CoordinateSpaceNode;
use super::viewport::Viewport;
use crate::error::Result;
use crate::serialize::{SerializableBlock, SerializableElement, Serializer};

/// Attributes shared by every node kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeAttrs {
    pub transform: Affine,
    pub opaque: bool,
    /// Not clamped; values outside [0, 1] pass through unchanged
    pub opacity: f64,
    /// Clip path, owned by this node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clip: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Secondary lookup key (`data-name`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_name: Option<String>,
    #[serde(skip)]
    pub handlers: Handlers,
}

impl Default for NodeAttrs {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            opaque: true,
            opacity: 1.0,
            clip: None,
            mask: None,
            id: None,
            data_name: None,
            handlers: Handlers::default(),
        }
    }
}

impl NodeAttrs {
    /// Contributes the shared attributes. Identity transform, full opacity
    /// and the opaque flag at `true` are left out.
    pub(crate) fn serialize_into(&self, serializer: &mut Serializer<'_>) {
        if self.transform != Affine::IDENTITY {
            serializer.add("transform", &self.transform);
        }
        serializer
            .add_default("opacity", &self.opacity, &1.0)
            .add_default("opaque", &self.opaque, &true)
            .add_block("clip", self.clip.as_deref().map(as_block))
            .add_block("mask", self.mask.as_deref().map(as_block));
    }
}

fn as_block(node: &Node) -> &dyn SerializableBlock {
    node
}

/// Discriminant of [`Node`], used for tag lookup and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Group,
    Viewport,
    Rect,
    Circle,
    Ellipse,
    Line,
    Polyline,
    Polygon,
    Path,
    Text,
    DataImage,
    UrlImage,
    CoordinateSpace,
}

impl NodeKind {
    pub const ALL: &'static [NodeKind] = &[
        NodeKind::Group,
        NodeKind::Viewport,
        NodeKind::Rect,
        NodeKind::Circle,
        NodeKind::Ellipse,
        NodeKind::Line,
        NodeKind::Polyline,
        NodeKind::Polygon,
        NodeKind::Path,
        NodeKind::Text,
        NodeKind::DataImage,
        NodeKind::UrlImage,
        NodeKind::CoordinateSpace,
    ];
}

/// One node of a scene tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    Group(Group),
    Viewport(Viewport),
    Rect(Rect),
    Circle(Circle),
    Ellipse(Ellipse),
    Line(Line),
    Polyline(Polyline),
    Polygon(Polygon),
    Path(Path),
    Text(Text),
    DataImage(DataImage),
    UrlImage(UrlImage),
    CoordinateSpace(CoordinateSpaceNode),
}

macro_rules! impl_from_kind {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Node::$variant(node)
                }
            }
        )+
    };
}

impl_from_kind!(
    Group, Viewport, Rect, Circle, Ellipse, Line, Polyline, Polygon, Path, Text, DataImage,
    UrlImage,
);

impl From<CoordinateSpaceNode> for Node {
    fn from(node: CoordinateSpaceNode) -> Self {
        Node::CoordinateSpace(node)
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Group(_) => NodeKind::Group,
            Node::Viewport(_) => NodeKind::Viewport,
            Node::Rect(_) => NodeKind::Rect,
            Node::Circle(_) => NodeKind::Circle,
            Node::Ellipse(_) => NodeKind::Ellipse,
            Node::Line(_) => NodeKind::Line,
            Node::Polyline(_) => NodeKind::Polyline,
            Node::Polygon(_) => NodeKind::Polygon,
            Node::Path(_) => NodeKind::Path,
            Node::Text(_) => NodeKind::Text,
            Node::DataImage(_) => NodeKind::DataImage,
            Node::UrlImage(_) => NodeKind::UrlImage,
            Node::CoordinateSpace(_) => NodeKind::CoordinateSpace,
        }
    }

    pub fn attrs(&self) -> &NodeAttrs {
        match self {
            Node::Group(n) => &n.attrs,
            Node::Viewport(n) => &n.attrs,
            Node::Rect(n) => &n.attrs,
            Node::Circle(n) => &n.attrs,
            Node::Ellipse(n) => &n.attrs,
            Node::Line(n) => &n.attrs,
            Node::Polyline(n) => &n.attrs,
            Node::Polygon(n) => &n.attrs,
            Node::Path(n) => &n.attrs,
            Node::Text(n) => &n.attrs,
            Node::DataImage(n) => &n.attrs,
            Node::UrlImage(n) => &n.attrs,
            Node::CoordinateSpace(n) => &n.attrs,
        }
    }

    pub fn attrs_mut(&mut self) -> &mut NodeAttrs {
        match self {
            Node::Group(n) => &mut n.attrs,
            Node::Viewport(n) => &mut n.attrs,
            Node::Rect(n) => &mut n.attrs,
            Node::Circle(n) => &mut n.attrs,
            Node::Ellipse(n) => &mut n.attrs,
            Node::Line(n) => &mut n.attrs,
            Node::Polyline(n) => &mut n.attrs,
            Node::Polygon(n) => &mut n.attrs,
            Node::Path(n) => &mut n.attrs,
            Node::Text(n) => &mut n.attrs,
            Node::DataImage(n) => &mut n.attrs,
            Node::UrlImage(n) => &mut n.attrs,
            Node::CoordinateSpace(n) => &mut n.attrs,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.attrs().id.as_deref()
    }

    pub fn data_name(&self) -> Option<&str> {
        self.attrs().data_name.as_deref()
    }

    /// Ordered children of composite kinds; empty for every other kind.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Group(g) => &g.contents,
            Node::Viewport(v) => &v.contents,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        match self {
            Node::Group(g) => &mut g.contents,
            Node::Viewport(v) => &mut v.contents,
            _ => Default::default(),
        }
    }

    /// Extent of the node in its parent's coordinates, before its own
    /// transform is applied.
    pub fn frame(&self) -> kurbo::Rect {
        match self {
            Node::Group(n) => n.frame(),
            Node::Viewport(n) => n.frame(),
            Node::Rect(n) => n.frame(),
            Node::Circle(n) => n.frame(),
            Node::Ellipse(n) => n.frame(),
            Node::Line(n) => n.frame(),
            Node::Polyline(n) => n.frame(),
            Node::Polygon(n) => n.frame(),
            Node::Path(n) => n.frame(),
            Node::Text(n) => n.frame(),
            Node::DataImage(n) => n.frame(),
            Node::UrlImage(n) => n.frame(),
            Node::CoordinateSpace(n) => n.node.frame(),
        }
    }

    /// Local bounds.
    ///
    /// Leaf kinds re-anchor their frame at the origin. Composite kinds
    /// return the union of their children's bounds, recomputed on every call.
    pub fn bounds(&self) -> kurbo::Rect {
        match self {
            Node::Group(g) => g.bounds(),
            Node::Viewport(v) => v.bounds(),
            Node::CoordinateSpace(n) => n.node.bounds(),
            _ => kurbo::Rect::from_origin_size(Point::ZERO, self.frame().size()),
        }
    }

    /// First node in depth-first, document order whose id is `id`.
    ///
    /// Only composite kinds search below themselves.
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.find(&|n: &Node| n.id() == Some(id))
    }

    pub fn node_by_id_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.find_mut(&|n: &Node| n.id() == Some(id))
    }

    /// First node whose data name is `name`; when no node in the subtree has
    /// that data name, falls back to [`Node::node_by_id`].
    pub fn node_by_data_name(&self, name: &str) -> Option<&Node> {
        self.find(&|n: &Node| n.data_name() == Some(name))
            .or_else(|| self.node_by_id(name))
    }

    pub fn node_by_data_name_mut(&mut self, name: &str) -> Option<&mut Node> {
        if self.find(&|n: &Node| n.data_name() == Some(name)).is_some() {
            self.find_mut(&|n: &Node| n.data_name() == Some(name))
        } else {
            self.node_by_id_mut(name)
        }
    }

    fn find(&self, pred: &dyn Fn(&Node) -> bool) -> Option<&Node> {
        if pred(self) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(pred))
    }

    fn find_mut(&mut self, pred: &dyn Fn(&Node) -> bool) -> Option<&mut Node> {
        if pred(self) {
            return Some(self);
        }
        self.children_mut()
            .iter_mut()
            .find_map(|child| child.find_mut(pred))
    }

    /// Deep copy: clip, mask, children and wrapped nodes are copied, not
    /// shared. Interaction handlers are not carried over.
    pub fn copy(&self) -> Node {
        self.clone()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.attrs_mut().id = Some(id.into());
        self
    }

    pub fn with_data_name(mut self, name: impl Into<String>) -> Self {
        self.attrs_mut().data_name = Some(name.into());
        self
    }

    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.attrs_mut().transform = transform;
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.attrs_mut().opacity = opacity;
        self
    }

    pub fn with_opaque(mut self, opaque: bool) -> Self {
        self.attrs_mut().opaque = opaque;
        self
    }

    pub fn with_clip(mut self, clip: impl Into<Node>) -> Self {
        self.attrs_mut().clip = Some(Box::new(clip.into()));
        self
    }

    pub fn with_mask(mut self, mask: impl Into<Node>) -> Self {
        self.attrs_mut().mask = Some(Box::new(mask.into()));
        self
    }

    pub fn on_tap_gesture(&mut self, count: u32, action: impl Fn() + Send + Sync + 'static) {
        self.add_gesture(Gesture::tap(count, action));
    }

    pub fn add_gesture(&mut self, gesture: Gesture) {
        self.attrs_mut().handlers.push(gesture);
    }

    pub fn remove_all_gestures(&mut self) {
        self.attrs_mut().handlers.clear();
    }

    pub fn gestures(&self) -> &[Gesture] {
        self.attrs().handlers.as_slice()
    }

    /// Runs this node's handlers for `kind`; returns how many ran.
    pub fn dispatch_gesture(&self, kind: GestureKind) -> usize {
        self.attrs().handlers.dispatch(kind)
    }

    /// Decodes a scene from its JSON description.
    pub fn from_json(json: &str) -> Result<Node> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl SerializableBlock for Node {
    fn serialize_into(&self, serializer: &mut Serializer<'_>) {
        match self {
            Node::Group(n) => n.serialize_into(serializer),
            Node::Viewport(n) => n.serialize_into(serializer),
            Node::Rect(n) => n.serialize_into(serializer),
            Node::Circle(n) => n.serialize_into(serializer),
            Node::Ellipse(n) => n.serialize_into(serializer),
            Node::Line(n) => n.serialize_into(serializer),
            Node::Polyline(n) => n.serialize_into(serializer),
            Node::Polygon(n) => n.serialize_into(serializer),
            Node::Path(n) => n.serialize_into(serializer),
            Node::Text(n) => n.serialize_into(serializer),
            Node::DataImage(n) => n.serialize_into(serializer),
            Node::UrlImage(n) => n.serialize_into(serializer),
            Node::CoordinateSpace(n) => n.serialize_into(serializer),
        }
    }

    fn as_element(&self) -> Option<&dyn SerializableElement> {
        Some(self)
    }
}

impl SerializableElement for Node {
    fn id(&self) -> Option<&str> {
        Node::id(self)
    }

    fn kind(&self) -> NodeKind {
        Node::kind(self)
    }
}
