use crate::property_error::PropertyResult;
use crate::value::PropertyValue;

/// Get/set access to properties by name.
///
/// Reading a name that is unknown or unset yields [`PropertyValue::Null`]; only writes can fail.
pub trait PropertyBag {
    /// Returns the value stored under `name`, or `Null`.
    fn get(&self, name: &str) -> PropertyValue;

    /// Stores `value` under `name`. Storing `Null` clears the property.
    fn set(&mut self, name: &str, value: PropertyValue) -> PropertyResult<()>;

    /// Whether `name` currently holds a non-null value.
    fn has(&self, name: &str) -> bool {
        !self.get(name).is_null()
    }

    /// Clears `name`.
    fn remove(&mut self, name: &str) -> PropertyResult<()> {
        self.set(name, PropertyValue::Null)
    }
}
