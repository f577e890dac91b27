use crate::bag::PropertyBag;
use crate::property_error::PropertyResult;
use crate::value::PropertyValue;
use std::collections::BTreeMap;

/// Untyped property container accepting any name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireData {
    data: BTreeMap<String, PropertyValue>,
}

impl WireData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Names of the properties currently set, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }
}

impl PropertyBag for WireData {
    fn get(&self, name: &str) -> PropertyValue {
        self.data.get(name).cloned().unwrap_or_default()
    }

    fn set(&mut self, name: &str, value: PropertyValue) -> PropertyResult<()> {
        if value.is_null() {
            if self.data.remove(name).is_some() {
                tracing::debug!(property = name, "property cleared");
            }
        } else {
            tracing::debug!(property = name, %value, "property set");
            self.data.insert(name.to_string(), value);
        }
        Ok(())
    }
}
