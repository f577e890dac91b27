//! Named-property storage shared by the lightweight value holders.
//!
//! A [`PropertyBag`] maps property names to untyped [`PropertyValue`]s. [`WireData`] is the
//! generic, map-backed bag; specialised holders implement the trait over their own typed fields.

/// The property access trait.
pub mod bag;

/// Untyped scalar stored under a property name.
pub mod value;

/// Generic map-backed property container.
pub mod wire_data;

pub mod property_error;

pub use bag::PropertyBag;
pub use property_error::PropertyError;
pub use value::PropertyValue;
pub use wire_data::WireData;
