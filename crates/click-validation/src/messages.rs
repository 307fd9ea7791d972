//! Positional validation messages

use serde::{Deserialize, Serialize};

use crate::error::ConfigFault;

/// Failure kinds, in the order their messages appear in a [`MessageSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Value missing on a required field
    Required,
    /// Too short, or below the minimum value
    TooLow,
    /// Too long, or above the maximum value
    TooHigh,
    /// Value does not have the expected format
    Format,
}

impl FailureKind {
    pub fn index(self) -> usize {
        match self {
            FailureKind::Required => 0,
            FailureKind::TooLow => 1,
            FailureKind::TooHigh => 2,
            FailureKind::Format => 3,
        }
    }
}

/// Messages for one field, indexed by [`FailureKind`]
///
/// The server renders these per field. Only the kinds a field type can
/// actually fail with need to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageSet(Vec<String>);

impl MessageSet {
    pub fn new<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(messages.into_iter().map(Into::into).collect())
    }

    pub fn get(&self, kind: FailureKind) -> Option<&str> {
        self.0.get(kind.index()).map(String::as_str)
    }

    /// Message for `kind`, or a fault naming the field whose set is short
    pub fn require(&self, field_id: &str, kind: FailureKind) -> Result<&str, ConfigFault> {
        self.get(kind).ok_or_else(|| {
            let fault = ConfigFault::MessageMissing {
                field_id: field_id.to_string(),
                index: kind.index(),
            };
            tracing::warn!(field_id, "{}", fault);
            fault
        })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for MessageSet {
    fn from(messages: Vec<String>) -> Self {
        Self(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_lookup() {
        let msgs = MessageSet::new(["required", "short", "long", "format"]);
        assert_eq!(msgs.get(FailureKind::Required), Some("required"));
        assert_eq!(msgs.get(FailureKind::TooLow), Some("short"));
        assert_eq!(msgs.get(FailureKind::TooHigh), Some("long"));
        assert_eq!(msgs.get(FailureKind::Format), Some("format"));
    }

    #[test]
    fn test_short_set_is_a_fault() {
        let msgs = MessageSet::new(["required"]);
        assert_eq!(
            msgs.require("form_name", FailureKind::Format),
            Err(ConfigFault::MessageMissing {
                field_id: "form_name".to_string(),
                index: 3,
            })
        );
    }

    #[test]
    fn test_deserialize_from_array() {
        let msgs: MessageSet = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs.get(FailureKind::TooLow), Some("b"));
    }
}
