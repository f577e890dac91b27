use thiserror::Error;

/// Errors returned when setting a property by name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyError {
    /// The container does not define a property with this name.
    #[error("unknown property `{name}`")]
    UnknownProperty { name: String },
    /// The value cannot be stored in the named property.
    #[error("invalid value for property `{name}`: {reason}")]
    InvalidValue { name: String, reason: String },
}

impl PropertyError {
    pub fn unknown(name: &str) -> Self {
        Self::UnknownProperty {
            name: name.to_string(),
        }
    }

    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type of property operations.
pub type PropertyResult<T> = Result<T, PropertyError>;
