//! This crate provides the page identifier value object.
//!
//! A [`PageId`](page_id::PageId) holds one page ID, renders it as text and can be read or written
//! through the generic [`PropertyBag`](property::PropertyBag) interface under the name `value`.

/// The identifier type and its conversions.
pub mod page_id;

/// Typed accessors and by-name property access for [`page_id::PageId`].
mod accessors;

/// Rendering configuration.
pub mod config;

pub mod errors;
#[cfg(test)]
mod tests;

/// Name under which the identifier is exposed to property containers.
pub use accessors::VALUE_PROPERTY;
