//! Regular expression field validation

use fancy_regex::Regex;

use crate::error::{ConfigFault, FieldError, FieldResult};
use crate::field::{accept, reject, resolve, FieldSource};
use crate::messages::{FailureKind, MessageSet};
use crate::text::{check_text, TextConstraint};

/// Validate a field against a pattern after the usual text checks.
///
/// The pattern is searched for anywhere in the value; anchor it with `^`
/// and `$` to match the whole input. Empty values always pass the pattern,
/// which is not compiled for them. Patterns may use look-ahead and
/// look-behind, as page authors write them for the browser's `RegExp`.
pub fn validate_regex_field<S>(
    source: &mut S,
    id: &str,
    constraint: &TextConstraint,
    pattern: &str,
    msgs: &MessageSet,
) -> FieldResult
where
    S: FieldSource + ?Sized,
{
    let mut field = resolve(source, id)?;
    let value = check_text(&mut *field, id, constraint, msgs)?;
    if value.is_empty() {
        return accept(&mut *field);
    }

    let matched = Regex::new(pattern)
        .and_then(|regex| regex.is_match(&value))
        .map_err(|e| invalid_pattern(id, pattern, e))?;

    if matched {
        accept(&mut *field)
    } else {
        reject(&mut *field, id, msgs, FailureKind::Format)
    }
}

fn invalid_pattern(id: &str, pattern: &str, err: fancy_regex::Error) -> FieldError {
    let fault = ConfigFault::InvalidPattern {
        field_id: id.to_string(),
        reason: err.to_string(),
    };
    tracing::warn!(field_id = id, pattern, "{}", fault);
    FieldError::from(fault)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::VisualState;
    use crate::memory::{MemoryField, MemoryForm};
    use pretty_assertions::assert_eq;

    fn msgs() -> MessageSet {
        MessageSet::new(["required", "short", "long", "Invalid postcode"])
    }

    fn form(value: &str) -> MemoryForm {
        MemoryForm::new().with_field(MemoryField::new("postcode").with_value(value))
    }

    #[test]
    fn test_pattern_match() {
        let mut form = form("6011");
        let result = validate_regex_field(&mut form, "postcode", &TextConstraint::new(true), r"^\d{4}$", &msgs());
        assert_eq!(result, Ok(()));
        assert_eq!(form.state("postcode"), Some(VisualState::Valid));
    }

    #[test]
    fn test_pattern_mismatch() {
        let mut form = form("60a1");
        let result = validate_regex_field(&mut form, "postcode", &TextConstraint::new(true), r"^\d{4}$", &msgs());
        assert_eq!(result, Err(FieldError::failed("Invalid postcode", "postcode")));
        assert_eq!(form.state("postcode"), Some(VisualState::Error));
    }

    #[test]
    fn test_unanchored_search() {
        let mut form = form("zip 6011");
        let result = validate_regex_field(&mut form, "postcode", &TextConstraint::new(false), r"\d{4}", &msgs());
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_empty_ignores_pattern() {
        let mut form = form("");
        let result = validate_regex_field(&mut form, "postcode", &TextConstraint::new(false), r"^\d{4}$", &msgs());
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_bad_pattern_is_a_fault() {
        let mut form = form("6011");
        let result = validate_regex_field(&mut form, "postcode", &TextConstraint::new(false), r"(\d", &msgs());
        assert!(matches!(
            result,
            Err(FieldError::ConfigurationFault(ConfigFault::InvalidPattern { .. }))
        ));
    }

    #[test]
    fn test_bad_pattern_ignored_for_empty_value() {
        let mut form = form("");
        let result = validate_regex_field(&mut form, "postcode", &TextConstraint::new(false), r"(\d", &msgs());
        assert_eq!(result, Ok(()));
        assert_eq!(form.state("postcode"), Some(VisualState::Valid));
    }

    #[test]
    fn test_look_ahead_pattern() {
        let constraint = TextConstraint::new(true);
        let pattern = r"^(?=.*\d).{6,}$";

        let mut valid = form("abc123");
        assert_eq!(validate_regex_field(&mut valid, "postcode", &constraint, pattern, &msgs()), Ok(()));
        assert_eq!(valid.state("postcode"), Some(VisualState::Valid));

        let mut no_digit = form("abcdef");
        assert_eq!(
            validate_regex_field(&mut no_digit, "postcode", &constraint, pattern, &msgs()),
            Err(FieldError::failed("Invalid postcode", "postcode"))
        );
    }

    #[test]
    fn test_empty_optional_with_look_ahead_pattern() {
        let mut form = form(" ");
        let result = validate_regex_field(
            &mut form,
            "postcode",
            &TextConstraint::new(false),
            r"^(?=.*\d).{6,}$",
            &msgs(),
        );
        assert_eq!(result, Ok(()));
    }
}
