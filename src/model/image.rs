//! Raster image kinds.
//!
//! Images have geometry and take part in bounds and lookup, but have no
//! markup tag: the serializer leaves them out.

use serde::{Deserialize, Serialize};

use super::node::NodeAttrs;
use crate::serialize::{SerializableBlock, Serializer};

/// An image embedded as base64 data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataImage {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Media subtype, e.g. `png`
    pub format: String,
    pub data: String,
    #[serde(flatten)]
    pub attrs: NodeAttrs,
}

impl DataImage {
    pub fn frame(&self) -> kurbo::Rect {
        image_frame(self.x, self.y, self.width, self.height)
    }
}

impl SerializableBlock for DataImage {
    fn serialize_into(&self, serializer: &mut Serializer<'_>) {
        serialize_geometry(serializer, self.x, self.y, self.width, self.height);
        serializer.add("href", &format!("data:image/{};base64,{}", self.format, self.data));
        self.attrs.serialize_into(serializer);
    }
}

/// An image referenced by URL.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlImage {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub src: String,
    #[serde(flatten)]
    pub attrs: NodeAttrs,
}

impl UrlImage {
    pub fn frame(&self) -> kurbo::Rect {
        image_frame(self.x, self.y, self.width, self.height)
    }
}

impl SerializableBlock for UrlImage {
    fn serialize_into(&self, serializer: &mut Serializer<'_>) {
        serialize_geometry(serializer, self.x, self.y, self.width, self.height);
        serializer.add("href", &self.src);
        self.attrs.serialize_into(serializer);
    }
}

fn image_frame(x: f64, y: f64, width: f64, height: f64) -> kurbo::Rect {
    kurbo::Rect::new(x, y, x + width, y + height)
}

fn serialize_geometry(serializer: &mut Serializer<'_>, x: f64, y: f64, width: f64, height: f64) {
    serializer
        .add_default("x", &x, &0.0)
        .add_default("y", &y, &0.0)
        .add("width", &width)
        .add("height", &height);
}
