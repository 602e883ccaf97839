//! Serialization capabilities.
//!
//! A value takes part in serialization through one of three capabilities:
//! - [`SerializableAtom`]: renders to a single scalar string
//! - [`SerializableOption`]: an enumerated value with a default, rendered only when non-default
//! - [`SerializableBlock`] / [`SerializableElement`]: a value that contributes a
//!   whole block of attributes, and for elements, a named and identified tag

use super::serializer::Serializer;
use crate::model::NodeKind;

/// A value that renders to one scalar string.
pub trait SerializableAtom {
    /// Raw text of the value, before any quoting.
    fn atom(&self) -> String;

    /// Whether the value is written as `key="value"` rather than `key=value`.
    fn needs_quotes(&self) -> bool {
        true
    }
}

/// An enumerated value with a defined default.
pub trait SerializableOption {
    fn is_default(&self) -> bool;

    fn option_value(&self) -> String;
}

/// A value that contributes attributes (and possibly children) to a serializer.
pub trait SerializableBlock {
    fn serialize_into(&self, serializer: &mut Serializer<'_>);

    /// Identity of the block, when it is a named tree node.
    fn as_element(&self) -> Option<&dyn SerializableElement> {
        None
    }
}

/// A named, identifiable tree node.
pub trait SerializableElement: SerializableBlock {
    fn id(&self) -> Option<&str>;

    fn kind(&self) -> NodeKind;
}

/// A closed enumeration whose default is its first declared case.
pub trait SerializableEnum: Copy + PartialEq + 'static {
    const ALL: &'static [Self];

    fn raw_value(&self) -> &'static str;
}

impl<T: SerializableEnum> SerializableOption for T {
    fn is_default(&self) -> bool {
        T::ALL.first() == Some(self)
    }

    fn option_value(&self) -> String {
        self.raw_value().to_string()
    }
}

impl SerializableAtom for f64 {
    fn atom(&self) -> String {
        format!("{}", self)
    }

    fn needs_quotes(&self) -> bool {
        false
    }
}

impl SerializableAtom for bool {
    fn atom(&self) -> String {
        self.to_string()
    }

    fn needs_quotes(&self) -> bool {
        false
    }
}

impl SerializableAtom for str {
    fn atom(&self) -> String {
        self.to_string()
    }
}

impl SerializableAtom for String {
    fn atom(&self) -> String {
        self.clone()
    }
}

/// Dash arrays and other number lists: `"4 2"`
impl SerializableAtom for [f64] {
    fn atom(&self) -> String {
        self.iter()
            .map(|v| format!("{}", v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Point lists: `"x1,y1 x2,y2"`
impl SerializableAtom for [kurbo::Point] {
    fn atom(&self) -> String {
        self.iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// View boxes: `"x y width height"`
impl SerializableAtom for kurbo::Rect {
    fn atom(&self) -> String {
        format!("{} {} {} {}", self.x0, self.y0, self.width(), self.height())
    }
}

/// Transforms: `"matrix(a, b, c, d, tx, ty)"`
impl SerializableAtom for kurbo::Affine {
    fn atom(&self) -> String {
        let [a, b, c, d, tx, ty] = self.as_coeffs();
        format!("matrix({}, {}, {}, {}, {}, {})", a, b, c, d, tx, ty)
    }
}

/// Declares a [`SerializableEnum`] along with its raw names, serde names and
/// a `Default` equal to the first case.
macro_rules! serializable_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $raw:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $($(#[$vmeta])* #[serde(rename = $raw)] $variant),+
        }

        impl $crate::serialize::SerializableEnum for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn raw_value(&self) -> &'static str {
                match self {
                    $($name::$variant => $raw),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                <Self as $crate::serialize::SerializableEnum>::ALL[0]
            }
        }
    };
}

pub(crate) use serializable_enum;
