//! Text field validation

use serde::{Deserialize, Serialize};

use crate::error::FieldResult;
use crate::field::{accept, reject, resolve, FieldRef, FieldSource};
use crate::messages::{FailureKind, MessageSet};
use crate::string::{char_len, trim};

/// Constraints for free text input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextConstraint {
    #[serde(default)]
    pub required: bool,
    /// Minimum length in characters, checked on non-empty values
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
}

impl TextConstraint {
    pub fn new(required: bool) -> Self {
        Self {
            required,
            ..Self::default()
        }
    }

    /// Build from the page's positional arguments, where zero means no bound
    pub fn from_bounds(required: bool, min_length: usize, max_length: usize) -> Self {
        Self {
            required,
            min_length: (min_length > 0).then_some(min_length),
            max_length: (max_length > 0).then_some(max_length),
        }
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }
}

/// Validate a text input.
///
/// Checks run in order: required, minimum length, maximum length.
pub fn validate_text_field<S>(
    source: &mut S,
    id: &str,
    constraint: &TextConstraint,
    msgs: &MessageSet,
) -> FieldResult
where
    S: FieldSource + ?Sized,
{
    let mut field = resolve(source, id)?;
    check_text(&mut *field, id, constraint, msgs)?;
    accept(&mut *field)
}

/// Run the text checks and hand back the trimmed value.
///
/// Only sets the error state; callers layering more checks on top decide
/// when the field is valid.
pub(crate) fn check_text<F>(
    field: &mut F,
    id: &str,
    constraint: &TextConstraint,
    msgs: &MessageSet,
) -> Result<String, crate::error::FieldError>
where
    F: FieldRef + ?Sized,
{
    let raw = field.value();
    let value = trim(&raw);
    let len = char_len(value);

    if len == 0 {
        if constraint.required {
            reject(field, id, msgs, FailureKind::Required)?;
        }
        return Ok(String::new());
    }

    if let Some(min) = constraint.min_length {
        if len < min {
            reject(field, id, msgs, FailureKind::TooLow)?;
        }
    }

    if let Some(max) = constraint.max_length {
        if len > max {
            reject(field, id, msgs, FailureKind::TooHigh)?;
        }
    }

    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigFault, FieldError};
    use crate::field::VisualState;
    use crate::memory::{MemoryField, MemoryForm};
    use pretty_assertions::assert_eq;

    fn msgs() -> MessageSet {
        MessageSet::new(["Name is required", "Name is too short", "Name is too long"])
    }

    fn form(value: &str) -> MemoryForm {
        MemoryForm::new().with_field(MemoryField::new("form_name").with_value(value))
    }

    #[test]
    fn test_required_empty() {
        let mut form = form("   ");
        let result = validate_text_field(&mut form, "form_name", &TextConstraint::new(true), &msgs());
        assert_eq!(result, Err(FieldError::failed("Name is required", "form_name")));
        assert_eq!(form.state("form_name"), Some(VisualState::Error));
    }

    #[test]
    fn test_optional_empty_is_valid() {
        let mut form = form("");
        let constraint = TextConstraint::new(false).min_length(3);
        assert!(validate_text_field(&mut form, "form_name", &constraint, &msgs()).is_ok());
        assert_eq!(form.state("form_name"), Some(VisualState::Valid));
    }

    #[test]
    fn test_length_bounds() {
        let constraint = TextConstraint::from_bounds(true, 3, 5);

        let mut short = form(" ab ");
        assert_eq!(
            validate_text_field(&mut short, "form_name", &constraint, &msgs()),
            Err(FieldError::failed("Name is too short", "form_name"))
        );

        let mut long = form("abcdef");
        assert_eq!(
            validate_text_field(&mut long, "form_name", &constraint, &msgs()),
            Err(FieldError::failed("Name is too long", "form_name"))
        );

        let mut ok = form("  abcde  ");
        assert!(validate_text_field(&mut ok, "form_name", &constraint, &msgs()).is_ok());
    }

    #[test]
    fn test_zero_bounds_are_unbounded() {
        let constraint = TextConstraint::from_bounds(false, 0, 0);
        assert_eq!(constraint.min_length, None);
        assert_eq!(constraint.max_length, None);
    }

    #[test]
    fn test_missing_field() {
        let mut form = MemoryForm::new();
        let result = validate_text_field(&mut form, "form_name", &TextConstraint::new(true), &msgs());
        assert_eq!(
            result,
            Err(ConfigFault::FieldNotFound("form_name".to_string()).into())
        );
    }

    #[test]
    fn test_repeat_validation_is_stable() {
        let mut form = form("x");
        let constraint = TextConstraint::new(true).min_length(2);
        let first = validate_text_field(&mut form, "form_name", &constraint, &msgs());
        let first_state = form.state("form_name");
        let second = validate_text_field(&mut form, "form_name", &constraint, &msgs());
        assert_eq!(first, second);
        assert_eq!(first_state, form.state("form_name"));
    }
}
