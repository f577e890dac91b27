//! # wirepage
//!
//! Value holders for a content-management host, organized under the `/crates` directory of
//! this workspace:
//!
//! - `/wire/property`: named-property storage ([`PropertyBag`], [`WireData`]).
//! - `/wire/page-id`: the [`PageId`] value object and its text rendering.

pub use page_id::config::{PageIdConfig, RenderConfig};
pub use page_id::errors::config_error::ConfigError;
pub use page_id::errors::parse_error::ParsePageIdError;
pub use page_id::page_id::PageId;
pub use page_id::VALUE_PROPERTY;
pub use property::{PropertyBag, PropertyError, PropertyValue, WireData};
