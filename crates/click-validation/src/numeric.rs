//! Number field validation

use serde::{Deserialize, Serialize};

use crate::error::FieldResult;
use crate::field::{accept, reject, resolve, FieldSource};
use crate::messages::{FailureKind, MessageSet};
use crate::string::trim;

/// Constraints for numeric input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberConstraint {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min_value: Option<f64>,
    #[serde(default)]
    pub max_value: Option<f64>,
}

impl NumberConstraint {
    pub fn new(required: bool) -> Self {
        Self {
            required,
            ..Self::default()
        }
    }

    pub fn min_value(mut self, min: f64) -> Self {
        self.min_value = Some(min);
        self
    }

    pub fn max_value(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }
}

/// Validate a number field.
///
/// Empty values only fail when required. A value that does not parse as a
/// number fails with the format message before any range check.
pub fn validate_number_field<S>(
    source: &mut S,
    id: &str,
    constraint: &NumberConstraint,
    msgs: &MessageSet,
) -> FieldResult
where
    S: FieldSource + ?Sized,
{
    let mut field = resolve(source, id)?;
    let raw = field.value();
    let value = trim(&raw);

    if value.is_empty() {
        if constraint.required {
            return reject(&mut *field, id, msgs, FailureKind::Required);
        }
        return accept(&mut *field);
    }

    let number = match value.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => return reject(&mut *field, id, msgs, FailureKind::Format),
    };

    if let Some(min) = constraint.min_value {
        if number < min {
            return reject(&mut *field, id, msgs, FailureKind::TooLow);
        }
    }
    if let Some(max) = constraint.max_value {
        if number > max {
            return reject(&mut *field, id, msgs, FailureKind::TooHigh);
        }
    }

    accept(&mut *field)
}
