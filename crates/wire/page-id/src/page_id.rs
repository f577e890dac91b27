use crate::accessors::{PropertyScalar, VALUE_PROPERTY};
use crate::config::RenderConfig;
use crate::errors::parse_error::ParsePageIdError;
use property::{PropertyError, PropertyValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a page in the content tree.
///
/// The ID may be unset, which is what [`PageId::default`] yields. An unset ID renders as the
/// empty string and serializes as `null`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PageId {
    pub(crate) value: Option<u64>,
}

impl PageId {
    /// Creates a `PageId` holding `value`.
    pub fn new(value: u64) -> Self {
        Self { value: Some(value) }
    }

    /// Creates a `PageId` with no value.
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Renders the ID, using the configured placeholder when it is unset.
    pub fn render(&self, config: &RenderConfig) -> String {
        match self.value {
            Some(value) => value.to_string(),
            None => config.unset_placeholder.clone(),
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{value}"),
            None => Ok(()),
        }
    }
}

impl FromStr for PageId {
    type Err = ParsePageIdError;

    /// Parses a decimal ID. Blank input yields an unset ID.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::unset());
        }
        trimmed
            .parse::<u64>()
            .map(Self::new)
            .map_err(|source| ParsePageIdError {
                input: s.to_string(),
                source,
            })
    }
}

impl From<u64> for PageId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<Option<u64>> for PageId {
    fn from(value: Option<u64>) -> Self {
        Self { value }
    }
}

impl From<PageId> for Option<u64> {
    fn from(id: PageId) -> Self {
        id.value
    }
}

impl From<PageId> for PropertyValue {
    fn from(id: PageId) -> Self {
        id.value
            .map(PropertyScalar::into_property)
            .unwrap_or_default()
    }
}

impl TryFrom<&PropertyValue> for PageId {
    type Error = PropertyError;

    fn try_from(value: &PropertyValue) -> Result<Self, Self::Error> {
        u64::from_property(VALUE_PROPERTY, value).map(Self::from)
    }
}
