//! Field validation results

use thiserror::Error;

/// Result of validating one field
pub type FieldResult = Result<(), FieldError>;

/// Why a field did not validate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The user's input broke a constraint. Shown next to the field.
    #[error("{message}")]
    ValidationFailed { message: String, field_id: String },

    /// The page markup or the validator setup is wrong.
    #[error(transparent)]
    ConfigurationFault(#[from] ConfigFault),
}

/// Markup or setup problem detected while validating
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigFault {
    #[error("Field {0} not found.")]
    FieldNotFound(String),

    #[error("Field group {0} not found.")]
    GroupNotFound(String),

    #[error("Field {field_id} has no message at index {index}.")]
    MessageMissing { field_id: String, index: usize },

    #[error("Field {field_id} has an invalid pattern: {reason}")]
    InvalidPattern { field_id: String, reason: String },

    #[error("Error container {0} not found.")]
    ContainerNotFound(String),
}

impl FieldError {
    pub fn failed(message: impl Into<String>, field_id: impl Into<String>) -> Self {
        FieldError::ValidationFailed {
            message: message.into(),
            field_id: field_id.into(),
        }
    }

    /// Id of the field the user should fix, if this is a validation failure
    pub fn field_id(&self) -> Option<&str> {
        match self {
            FieldError::ValidationFailed { field_id, .. } => Some(field_id),
            FieldError::ConfigurationFault(_) => None,
        }
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, FieldError::ConfigurationFault(_))
    }

    /// Encode as `"<message>|<fieldId>"`, the form the page scripts pass around.
    ///
    /// Faults carry no field id and encode as `"<reason>|"`.
    pub fn encode(&self) -> String {
        match self {
            FieldError::ValidationFailed { message, field_id } => {
                format!("{}|{}", message, field_id)
            }
            FieldError::ConfigurationFault(fault) => format!("{}|", fault),
        }
    }
}
