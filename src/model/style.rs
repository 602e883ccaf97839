//! Paint and text styling shared by the shape kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::serialize::{serializable_enum, SerializableAtom, SerializableOption, Serializer};

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// Parses `#rgb`, `#rrggbb` and `#rrggbbaa`.
impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let digit = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Color::rgb(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl SerializableAtom for Color {
    fn atom(&self) -> String {
        self.to_string()
    }
}

serializable_enum! {
    pub enum LineCap {
        Butt => "butt",
        Round => "round",
        Square => "square",
    }
}

serializable_enum! {
    pub enum LineJoin {
        Miter => "miter",
        Round => "round",
        Bevel => "bevel",
    }
}

serializable_enum! {
    pub enum TextAnchor {
        Start => "start",
        Middle => "middle",
        End => "end",
    }
}

serializable_enum! {
    /// Alignment along one axis of a viewport.
    pub enum Align {
        Mid => "Mid",
        Min => "Min",
        Max => "Max",
    }
}

serializable_enum! {
    pub enum Scaling {
        Meet => "meet",
        Slice => "slice",
        None => "none",
    }
}

/// How a viewport's view box is fitted into its width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreserveAspectRatio {
    pub x_align: Align,
    pub y_align: Align,
    pub scaling: Scaling,
}

/// Renders as `xMidYMid meet`, or `none` when scaling is disabled.
impl SerializableOption for PreserveAspectRatio {
    fn is_default(&self) -> bool {
        *self == Self::default()
    }

    fn option_value(&self) -> String {
        use crate::serialize::SerializableEnum;
        if self.scaling == Scaling::None {
            return "none".to_string();
        }
        format!(
            "x{}Y{} {}",
            self.x_align.raw_value(),
            self.y_align.raw_value(),
            self.scaling.raw_value()
        )
    }
}

/// Outline paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
    pub cap: LineCap,
    pub join: LineJoin,
    pub miter_limit: f64,
    pub dashes: Vec<f64>,
    pub offset: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            miter_limit: 4.0,
            dashes: Vec::new(),
            offset: 0.0,
        }
    }
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            ..Default::default()
        }
    }
}

/// Fill and stroke carried by every shape kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeStyle {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl ShapeStyle {
    pub(crate) fn serialize_into(&self, serializer: &mut Serializer<'_>) {
        serializer.add_optional("fill", self.fill.as_ref());
        let Some(stroke) = &self.stroke else { return };
        serializer
            .add("stroke", &stroke.color)
            .add_default("stroke-width", &stroke.width, &1.0)
            .add_option("stroke-linecap", &stroke.cap)
            .add_option("stroke-linejoin", &stroke.join)
            .add_default("stroke-miterlimit", &stroke.miter_limit, &4.0);
        if !stroke.dashes.is_empty() {
            serializer.add("stroke-dasharray", &stroke.dashes[..]);
        }
        serializer.add_default("stroke-dashoffset", &stroke.offset, &0.0);
    }
}

/// Font used by text nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub name: String,
    pub size: f64,
    pub weight: String,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            name: "Serif".to_string(),
            size: 16.0,
            weight: "normal".to_string(),
        }
    }
}
