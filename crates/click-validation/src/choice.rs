//! Presence-only validators: checkbox, select, radio group, file, pick list

use crate::error::{ConfigFault, FieldError, FieldResult};
use crate::field::{accept, reject, resolve, FieldSource};
use crate::messages::{FailureKind, MessageSet};
use crate::string::trim;

/// A required checkbox must be checked
pub fn validate_checkbox<S>(source: &mut S, id: &str, required: bool, msgs: &MessageSet) -> FieldResult
where
    S: FieldSource + ?Sized,
{
    let mut field = resolve(source, id)?;
    if required && !field.is_checked() {
        return reject(&mut *field, id, msgs, FailureKind::Required);
    }
    accept(&mut *field)
}

/// A required select must hold something other than its placeholder value
pub fn validate_select<S>(
    source: &mut S,
    id: &str,
    default_value: &str,
    required: bool,
    msgs: &MessageSet,
) -> FieldResult
where
    S: FieldSource + ?Sized,
{
    let mut field = resolve(source, id)?;
    if required && field.value() == default_value {
        return reject(&mut *field, id, msgs, FailureKind::Required);
    }
    accept(&mut *field)
}

/// A required radio group must have one button checked.
///
/// The group is looked up by its `name`. A failure is reported against the
/// first button's id so the error link can focus it, or against the group
/// name when that button has no id.
pub fn validate_radio_group<S>(source: &mut S, name: &str, required: bool, msgs: &MessageSet) -> FieldResult
where
    S: FieldSource + ?Sized,
{
    let mut group = source.group(name);
    if group.is_empty() {
        let fault = ConfigFault::GroupNotFound(name.to_string());
        tracing::warn!(group = name, "{}", fault);
        return Err(fault.into());
    }

    if required && !group.iter().any(|radio| radio.is_checked()) {
        let field_id = group
            .first()
            .map(|radio| radio.id())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| name.to_string());
        let message = msgs.require(&field_id, FailureKind::Required)?;
        for radio in group.iter_mut() {
            radio.set_error_state();
        }
        tracing::debug!(group = name, field_id = %field_id, "no radio button checked");
        return Err(FieldError::failed(message, field_id));
    }

    for radio in group.iter_mut() {
        radio.set_valid_state();
    }
    Ok(())
}

/// A required file input must name a file
pub fn validate_file_field<S>(source: &mut S, id: &str, required: bool, msgs: &MessageSet) -> FieldResult
where
    S: FieldSource + ?Sized,
{
    let mut field = resolve(source, id)?;
    if required && trim(&field.value()).is_empty() {
        return reject(&mut *field, id, msgs, FailureKind::Required);
    }
    accept(&mut *field)
}

/// A required pick list must have at least one selected option.
///
/// `id` names the list holding the selected options.
pub fn validate_pick_list<S>(source: &mut S, id: &str, required: bool, msgs: &MessageSet) -> FieldResult
where
    S: FieldSource + ?Sized,
{
    let mut field = resolve(source, id)?;
    if required && field.option_count() == 0 {
        return reject(&mut *field, id, msgs, FailureKind::Required);
    }
    accept(&mut *field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::VisualState;
    use crate::memory::{MemoryField, MemoryForm};
    use pretty_assertions::assert_eq;

    fn msgs() -> MessageSet {
        MessageSet::new(["Please select a value"])
    }

    #[test]
    fn test_checkbox() {
        let mut form = MemoryForm::new()
            .with_field(MemoryField::new("terms"))
            .with_field(MemoryField::new("news").with_checked(true));

        assert_eq!(
            validate_checkbox(&mut form, "terms", true, &msgs()),
            Err(FieldError::failed("Please select a value", "terms"))
        );
        assert_eq!(form.state("terms"), Some(VisualState::Error));
        assert!(validate_checkbox(&mut form, "terms", false, &msgs()).is_ok());
        assert!(validate_checkbox(&mut form, "news", true, &msgs()).is_ok());
    }

    #[test]
    fn test_select_placeholder() {
        let mut form = MemoryForm::new().with_field(MemoryField::new("country").with_value("-"));
        assert!(validate_select(&mut form, "country", "-", true, &msgs()).is_err());
        assert!(validate_select(&mut form, "country", "-", false, &msgs()).is_ok());

        form.get_mut("country").unwrap().value = "NZ".to_string();
        assert!(validate_select(&mut form, "country", "-", true, &msgs()).is_ok());
        assert_eq!(form.state("country"), Some(VisualState::Valid));
    }

    #[test]
    fn test_radio_group() {
        let mut form = MemoryForm::new()
            .with_field(MemoryField::new("size_s").with_name("size"))
            .with_field(MemoryField::new("size_l").with_name("size"));

        assert_eq!(
            validate_radio_group(&mut form, "size", true, &msgs()),
            Err(FieldError::failed("Please select a value", "size_s"))
        );
        assert_eq!(form.state("size_s"), Some(VisualState::Error));
        assert_eq!(form.state("size_l"), Some(VisualState::Error));

        form.get_mut("size_l").unwrap().checked = true;
        assert!(validate_radio_group(&mut form, "size", true, &msgs()).is_ok());
        assert_eq!(form.state("size_s"), Some(VisualState::Valid));
    }

    #[test]
    fn test_radio_group_error_focuses_first_button() {
        use crate::aggregate::FormAggregator;

        let mut form = MemoryForm::new()
            .with_field(MemoryField::new("size_s").with_name("size"))
            .with_field(MemoryField::new("size_l").with_name("size"))
            .with_error_container("order");
        let results = vec![validate_radio_group(&mut form, "size", true, &msgs())];

        assert_eq!(FormAggregator::default().validate_form("order", &results, &mut form), Ok(false));
        let html = form.container("order-errorsDiv").unwrap().html.clone().unwrap();
        assert!(html.contains("size_s"));
        assert_eq!(form.focused(), Some("size_s"));
    }

    #[test]
    fn test_radio_group_without_ids_reports_name() {
        let mut form = MemoryForm::new().with_field(MemoryField::new("").with_name("size"));
        assert_eq!(
            validate_radio_group(&mut form, "size", true, &msgs()),
            Err(FieldError::failed("Please select a value", "size"))
        );
    }

    #[test]
    fn test_radio_group_missing() {
        let mut form = MemoryForm::new();
        assert_eq!(
            validate_radio_group(&mut form, "size", true, &msgs()),
            Err(ConfigFault::GroupNotFound("size".to_string()).into())
        );
    }

    #[test]
    fn test_file_field() {
        let mut form = MemoryForm::new().with_field(MemoryField::new("upload").with_value("  "));
        assert!(validate_file_field(&mut form, "upload", true, &msgs()).is_err());
        assert!(validate_file_field(&mut form, "upload", false, &msgs()).is_ok());
    }

    #[test]
    fn test_pick_list() {
        let mut form = MemoryForm::new()
            .with_field(MemoryField::new("chosen"))
            .with_field(MemoryField::new("chosen_full").with_options(2));

        assert!(validate_pick_list(&mut form, "chosen", true, &msgs()).is_err());
        assert!(validate_pick_list(&mut form, "chosen", false, &msgs()).is_ok());
        assert!(validate_pick_list(&mut form, "chosen_full", true, &msgs()).is_ok());
    }
}
