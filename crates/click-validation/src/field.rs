//! Field access abstraction
//!
//! Validators never touch a document directly. They resolve fields by id
//! through a [`FieldSource`] and talk to each one through [`FieldRef`].
//! The WASM crate implements both over the browser DOM; [`crate::memory`]
//! implements them over plain Rust values.

use crate::error::{ConfigFault, FieldError, FieldResult};
use crate::messages::{FailureKind, MessageSet};

/// Visual state a validator leaves a field in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    /// Never validated
    #[default]
    Untouched,
    Error,
    Valid,
}

/// One live input element
pub trait FieldRef {
    /// Element id, empty when the element has none
    fn id(&self) -> String;

    /// Current raw value, untrimmed
    fn value(&self) -> String;

    /// Checked state for checkboxes and radio buttons
    fn is_checked(&self) -> bool;

    /// Number of options for select-like fields, zero otherwise
    fn option_count(&self) -> usize;

    fn set_error_state(&mut self);

    fn set_valid_state(&mut self);

    /// Give the field input focus.
    ///
    /// Returns false when the field cannot take focus (hidden or disabled).
    fn focus(&mut self) -> bool;
}

impl<T: FieldRef + ?Sized> FieldRef for &mut T {
    fn id(&self) -> String {
        (**self).id()
    }

    fn value(&self) -> String {
        (**self).value()
    }

    fn is_checked(&self) -> bool {
        (**self).is_checked()
    }

    fn option_count(&self) -> usize {
        (**self).option_count()
    }

    fn set_error_state(&mut self) {
        (**self).set_error_state()
    }

    fn set_valid_state(&mut self) {
        (**self).set_valid_state()
    }

    fn focus(&mut self) -> bool {
        (**self).focus()
    }
}

/// Resolves field identifiers to live fields
pub trait FieldSource {
    /// Look up a single field by id
    fn field(&mut self, id: &str) -> Option<Box<dyn FieldRef + '_>>;

    /// All fields sharing a `name`, e.g. the buttons of a radio group
    fn group(&mut self, name: &str) -> Vec<Box<dyn FieldRef + '_>>;
}

/// Page region the aggregated error block is written into
pub trait ErrorContainer {
    /// Replace the inner HTML of the element with the given id
    fn write_html(&mut self, element_id: &str, html: &str) -> Result<(), ConfigFault>;

    /// Make the element with the given id visible using a CSS display value
    fn reveal(&mut self, element_id: &str, display: &str) -> Result<(), ConfigFault>;
}

/// Resolve a field or report it as missing markup
pub(crate) fn resolve<'a, S>(source: &'a mut S, id: &str) -> Result<Box<dyn FieldRef + 'a>, FieldError>
where
    S: FieldSource + ?Sized,
{
    source.field(id).ok_or_else(|| {
        let fault = ConfigFault::FieldNotFound(id.to_string());
        tracing::warn!(field_id = id, "{}", fault);
        FieldError::from(fault)
    })
}

/// Mark a field invalid and produce the message for `kind`
pub(crate) fn reject<F: FieldRef + ?Sized>(
    field: &mut F,
    field_id: &str,
    msgs: &MessageSet,
    kind: FailureKind,
) -> FieldResult {
    field.set_error_state();
    let message = msgs.require(field_id, kind)?;
    tracing::debug!(field_id, ?kind, "field failed validation");
    Err(FieldError::failed(message, field_id))
}

/// Mark a field valid
pub(crate) fn accept<F: FieldRef + ?Sized>(field: &mut F) -> FieldResult {
    field.set_valid_state();
    Ok(())
}
