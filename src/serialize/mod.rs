//! Canonical markup serialization.
//!
//! Nodes describe their own attributes through the capability traits
//! ([`SerializableAtom`], [`SerializableOption`], [`SerializableBlock`]);
//! the [`Serializer`] walks the tree depth-first and lays the attributes out,
//! looking tag names up with [`tag_name`].

mod registry;
mod serializable;
mod serializer;

pub use registry::{kind_for_tag, tag_name};
pub(crate) use serializable::serializable_enum;
pub use serializable::{
    SerializableAtom, SerializableBlock, SerializableElement, SerializableEnum, SerializableOption,
};
pub use serializer::{escape_xml, Serializer};
