use crate::page_id::PageId;
use paste::paste;
use property::property_error::PropertyResult;
use property::{PropertyBag, PropertyError, PropertyValue};

/// Scalars that can be stored in a typed field and exchanged with a property container.
pub(crate) trait PropertyScalar: Sized + Copy {
    /// Reads `value` for the property `name`. `Null` maps to `None`.
    fn from_property(name: &str, value: &PropertyValue) -> PropertyResult<Option<Self>>;

    fn into_property(self) -> PropertyValue;
}

impl PropertyScalar for u64 {
    fn from_property(name: &str, value: &PropertyValue) -> PropertyResult<Option<Self>> {
        match value {
            PropertyValue::Null => Ok(None),
            PropertyValue::Int(n) => u64::try_from(*n)
                .map(Some)
                .map_err(|_| PropertyError::invalid(name, format!("{n} is negative"))),
            // blank text is how an unset id renders
            PropertyValue::Str(s) if s.trim().is_empty() => Ok(None),
            PropertyValue::Str(s) => s
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|e| PropertyError::invalid(name, format!("`{s}` is not an id: {e}"))),
        }
    }

    fn into_property(self) -> PropertyValue {
        // ids beyond i64::MAX keep their exact decimal form
        i64::try_from(self)
            .map(PropertyValue::Int)
            .unwrap_or_else(|_| PropertyValue::Str(self.to_string()))
    }
}

/// Defines the typed fields of [`PageId`] together with their by-name access.
///
/// Pattern: `field_name(identifier): field_type(type);`
macro_rules! impl_page_id_properties {
    ( $( $field_name:ident : $field_type:ty ; )* ) => {
        paste! {
            $(
                #[doc = concat!("Property name of field `", stringify!($field_name), "`.")]
                pub const [<$field_name:upper _PROPERTY>]: &str = stringify!($field_name);

                impl PageId {
                    #[doc = concat!("Getter for field `", stringify!($field_name), "`. `None` when unset.")]
                    pub fn $field_name(&self) -> Option<$field_type> {
                        self.$field_name
                    }

                    #[doc = concat!("Setter for field `", stringify!($field_name), "`.")]
                    pub fn [<set_ $field_name>](&mut self, val: $field_type) {
                        self.$field_name = Some(val);
                    }

                    #[doc = concat!("Unsets field `", stringify!($field_name), "`.")]
                    pub fn [<clear_ $field_name>](&mut self) {
                        self.$field_name = None;
                    }
                }
            )*

            impl PropertyBag for PageId {
                fn get(&self, name: &str) -> PropertyValue {
                    match name {
                        $(
                            [<$field_name:upper _PROPERTY>] => self
                                .$field_name
                                .map(PropertyScalar::into_property)
                                .unwrap_or_default(),
                        )*
                        _ => PropertyValue::Null,
                    }
                }

                fn set(&mut self, name: &str, value: PropertyValue) -> PropertyResult<()> {
                    match name {
                        $(
                            [<$field_name:upper _PROPERTY>] => {
                                let parsed = <$field_type as PropertyScalar>::from_property(name, &value)
                                    .inspect_err(|e| tracing::warn!(property = name, page_id = %self, "rejected property set: {e}"))?;
                                self.$field_name = parsed;
                                tracing::debug!(property = name, page_id = %self, "page id property updated");
                                Ok(())
                            }
                        )*
                        _ => {
                            tracing::warn!(property = name, "page id has no such property");
                            Err(PropertyError::unknown(name))
                        }
                    }
                }
            }
        }
    };
}

impl_page_id_properties! {
    value : u64;
}
