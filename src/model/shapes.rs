//! Leaf shape kinds.
//!
//! Each shape serializes its geometry first, then its fill and stroke, then
//! the shared node attributes.

use kurbo::{BezPath, Point, Shape};
use log::warn;
use serde::{Deserialize, Serialize};

use super::node::NodeAttrs;
use super::style::{Font, ShapeStyle, TextAnchor};
use crate::error::{Error, Result};
use crate::serialize::{SerializableBlock, Serializer};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rx: f64,
    pub ry: f64,
    #[serde(flatten)]
    pub style: ShapeStyle,
    #[serde(flatten)]
    pub attrs: NodeAttrs,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            ..Default::default()
        }
    }

    pub fn frame(&self) -> kurbo::Rect {
        kurbo::Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

impl SerializableBlock for Rect {
    fn serialize_into(&self, serializer: &mut Serializer<'_>) {
        serializer
            .add_default("x", &self.x, &0.0)
            .add_default("y", &self.y, &0.0)
            .add("width", &self.width)
            .add("height", &self.height)
            .add_default("rx", &self.rx, &0.0)
            .add_default("ry", &self.ry, &0.0);
        self.style.serialize_into(serializer);
        self.attrs.serialize_into(serializer);
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Circle {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    #[serde(flatten)]
    pub style: ShapeStyle,
    #[serde(flatten)]
    pub attrs: NodeAttrs,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, r: f64) -> Self {
        Self {
            cx,
            cy,
            r,
            ..Default::default()
        }
    }

    pub fn frame(&self) -> kurbo::Rect {
        kurbo::Rect::new(self.cx - self.r, self.cy - self.r, self.cx + self.r, self.cy + self.r)
    }
}

impl SerializableBlock for Circle {
    fn serialize_into(&self, serializer: &mut Serializer<'_>) {
        serializer
            .add_default("cx", &self.cx, &0.0)
            .add_default("cy", &self.cy, &0.0)
            .add("r", &self.r);
        self.style.serialize_into(serializer);
        self.attrs.serialize_into(serializer);
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
    #[serde(flatten)]
    pub style: ShapeStyle,
    #[serde(flatten)]
    pub attrs: NodeAttrs,
}

impl Ellipse {
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self {
            cx,
            cy,
            rx,
            ry,
            ..Default::default()
        }
    }

    pub fn frame(&self) -> kurbo::Rect {
        kurbo::Rect::new(self.cx - self.rx, self.cy - self.ry, self.cx + self.rx, self.cy + self.ry)
    }
}

impl SerializableBlock for Ellipse {
    fn serialize_into(&self, serializer: &mut Serializer<'_>) {
        serializer
            .add_default("cx", &self.cx, &0.0)
            .add_default("cy", &self.cy, &0.0)
            .add("rx", &self.rx)
            .add("ry", &self.ry);
        self.style.serialize_into(serializer);
        self.attrs.serialize_into(serializer);
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(flatten)]
    pub style: ShapeStyle,
    #[serde(flatten)]
    pub attrs: NodeAttrs,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            ..Default::default()
        }
    }

    pub fn frame(&self) -> kurbo::Rect {
        kurbo::Rect::from_points((self.x1, self.y1), (self.x2, self.y2))
    }
}

impl SerializableBlock for Line {
    fn serialize_into(&self, serializer: &mut Serializer<'_>) {
        serializer
            .add_default("x1", &self.x1, &0.0)
            .add_default("y1", &self.y1, &0.0)
            .add_default("x2", &self.x2, &0.0)
            .add_default("y2", &self.y2, &0.0);
        self.style.serialize_into(serializer);
        self.attrs.serialize_into(serializer);
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Polyline {
    pub points: Vec<Point>,
    #[serde(flatten)]
    pub style: ShapeStyle,
    #[serde(flatten)]
    pub attrs: NodeAttrs,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }

    pub fn frame(&self) -> kurbo::Rect {
        points_frame(&self.points)
    }
}

impl SerializableBlock for Polyline {
    fn serialize_into(&self, serializer: &mut Serializer<'_>) {
        serializer.add("points", &self.points[..]);
        self.style.serialize_into(serializer);
        self.attrs.serialize_into(serializer);
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Polygon {
    pub points: Vec<Point>,
    #[serde(flatten)]
    pub style: ShapeStyle,
    #[serde(flatten)]
    pub attrs: NodeAttrs,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            ..Default::default()
        }
    }

    pub fn frame(&self) -> kurbo::Rect {
        points_frame(&self.points)
    }
}

impl SerializableBlock for Polygon {
    fn serialize_into(&self, serializer: &mut Serializer<'_>) {
        serializer.add("points", &self.points[..]);
        self.style.serialize_into(serializer);
        self.attrs.serialize_into(serializer);
    }
}

fn points_frame(points: &[Point]) -> kurbo::Rect {
    let mut iter = points.iter();
    let Some(first) = iter.next() else {
        return kurbo::Rect::ZERO;
    };
    iter.fold(kurbo::Rect::from_points(*first, *first), |acc, p| {
        acc.union_pt(*p)
    })
}

/// A shape described by SVG path data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Path {
    pub d: String,
    #[serde(flatten)]
    pub style: ShapeStyle,
    #[serde(flatten)]
    pub attrs: NodeAttrs,
}

impl Path {
    pub fn new(d: impl Into<String>) -> Self {
        Self {
            d: d.into(),
            ..Default::default()
        }
    }

    pub fn bez_path(&self) -> Result<BezPath> {
        BezPath::from_svg(&self.d).map_err(|e| Error::InvalidPath(format!("{}: {}", self.d, e)))
    }

    /// Bounding box of the path data; zero when the data does not parse.
    pub fn frame(&self) -> kurbo::Rect {
        match self.bez_path() {
            Ok(path) => path.bounding_box(),
            Err(e) => {
                warn!("{}", e);
                kurbo::Rect::ZERO
            }
        }
    }
}

impl SerializableBlock for Path {
    fn serialize_into(&self, serializer: &mut Serializer<'_>) {
        serializer.add("d", &self.d);
        self.style.serialize_into(serializer);
        self.attrs.serialize_into(serializer);
    }
}

/// Average glyph advance as a fraction of the font size.
const GLYPH_WIDTH_RATIO: f64 = 0.55;

/// A single line of text with its baseline at the local origin.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Text {
    pub text: String,
    pub font: Font,
    pub anchor: TextAnchor,
    #[serde(flatten)]
    pub style: ShapeStyle,
    #[serde(flatten)]
    pub attrs: NodeAttrs,
}

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Estimated extent; there is no font shaping, so the width is the
    /// character count times an average advance.
    pub fn frame(&self) -> kurbo::Rect {
        let width = self.text.chars().count() as f64 * self.font.size * GLYPH_WIDTH_RATIO;
        let x0 = match self.anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => -width / 2.0,
            TextAnchor::End => -width,
        };
        kurbo::Rect::new(x0, -self.font.size, x0 + width, 0.0)
    }
}

impl SerializableBlock for Text {
    fn serialize_into(&self, serializer: &mut Serializer<'_>) {
        let default_font = Font::default();
        serializer
            .add("text", &self.text)
            .add_default("font-family", &self.font.name, &default_font.name)
            .add_default("font-size", &self.font.size, &default_font.size)
            .add_default("font-weight", &self.font.weight, &default_font.weight)
            .add_option("text-anchor", &self.anchor);
        self.style.serialize_into(serializer);
        self.attrs.serialize_into(serializer);
    }
}
