//! Form error aggregation
//!
//! Turns the ordered per-field results of a submit into one error table,
//! writes it into the form's error container and focuses the first field
//! the user has to fix.

use maud::{html, Markup};

use crate::config::DisplayConfig;
use crate::error::{ConfigFault, FieldError, FieldResult};
use crate::field::{ErrorContainer, FieldSource};

/// One row of the error table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorEntry {
    /// A validation failure, linked to its field
    Field { message: String, field_id: String },
    /// A setup fault, shown without a link
    Fault { message: String },
}

impl ErrorEntry {
    pub fn from_error(err: &FieldError) -> Self {
        match err {
            FieldError::ValidationFailed { message, field_id } => ErrorEntry::Field {
                message: message.clone(),
                field_id: field_id.clone(),
            },
            FieldError::ConfigurationFault(fault) => ErrorEntry::Fault {
                message: fault.to_string(),
            },
        }
    }

    /// Decode a `"<message>|<fieldId>"` string, splitting on the last `|`.
    ///
    /// Strings without a field id are the page scripts' "field not found"
    /// faults and decode as [`ErrorEntry::Fault`].
    pub fn decode(encoded: &str) -> Self {
        match encoded.rsplit_once('|') {
            Some((message, field_id)) if !field_id.is_empty() => ErrorEntry::Field {
                message: message.to_string(),
                field_id: field_id.to_string(),
            },
            Some((message, _)) => ErrorEntry::Fault {
                message: message.to_string(),
            },
            None => ErrorEntry::Fault {
                message: encoded.to_string(),
            },
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ErrorEntry::Field { message, .. } | ErrorEntry::Fault { message } => message,
        }
    }

    pub fn field_id(&self) -> Option<&str> {
        match self {
            ErrorEntry::Field { field_id, .. } => Some(field_id),
            ErrorEntry::Fault { .. } => None,
        }
    }
}

/// The errors of one submit, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSummary {
    entries: Vec<ErrorEntry>,
}

impl ErrorSummary {
    pub fn from_results(results: &[FieldResult]) -> Self {
        let entries = results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .map(ErrorEntry::from_error)
            .collect();
        Self { entries }
    }

    /// Build from the encoded list the page scripts produce (`None` = valid)
    pub fn from_encoded<S: AsRef<str>>(results: &[Option<S>]) -> Self {
        let entries = results
            .iter()
            .flatten()
            .map(|s| ErrorEntry::decode(s.as_ref()))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ErrorEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fault_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, ErrorEntry::Fault { .. }))
            .count()
    }

    /// First field the user has to fix
    pub fn focus_target(&self) -> Option<&str> {
        self.entries.iter().find_map(ErrorEntry::field_id)
    }

    /// Render the error table
    pub fn render(&self, display: &DisplayConfig) -> Markup {
        html! {
            table class="errors" {
                @for entry in &self.entries {
                    tr class="errors" {
                        td class="errors" align=(display.align) style=[display.style.as_deref()] {
                            @match entry {
                                ErrorEntry::Field { message, field_id } => {
                                    a class="error" href=(focus_href(field_id)) { (message) }
                                }
                                ErrorEntry::Fault { message } => {
                                    (message)
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn focus_href(field_id: &str) -> String {
    format!("javascript:setFocus('{}');", field_id)
}

/// Writes error summaries into a page and decides whether a submit proceeds
#[derive(Debug, Clone, Default)]
pub struct FormAggregator {
    display: DisplayConfig,
}

impl FormAggregator {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Report the results of a submit.
    ///
    /// Returns `Ok(true)` when every field is valid, leaving the error
    /// container untouched. Otherwise renders the errors, reveals the
    /// container, focuses the first invalid field and returns `Ok(false)`.
    /// Fails only when the error container is missing from the page.
    pub fn validate_form<V>(&self, form_id: &str, results: &[FieldResult], view: &mut V) -> Result<bool, ConfigFault>
    where
        V: FieldSource + ErrorContainer + ?Sized,
    {
        self.apply(form_id, &ErrorSummary::from_results(results), view)
    }

    /// Same as [`FormAggregator::validate_form`], for an already built summary
    pub fn apply<V>(&self, form_id: &str, summary: &ErrorSummary, view: &mut V) -> Result<bool, ConfigFault>
    where
        V: FieldSource + ErrorContainer + ?Sized,
    {
        if summary.is_empty() {
            tracing::debug!(form_id, "form is valid");
            return Ok(true);
        }

        for entry in summary.entries() {
            if let ErrorEntry::Fault { message } = entry {
                tracing::warn!(form_id, "configuration fault: {}", message);
            }
        }

        let markup = summary.render(&self.display);
        view.write_html(&self.display.errors_div_id(form_id), &markup.into_string())?;
        view.reveal(&self.display.errors_row_id(form_id), &self.display.row_display)?;

        if let Some(field_id) = summary.focus_target() {
            let focused = view.field(field_id).map(|mut field| field.focus()).unwrap_or(false);
            if !focused {
                tracing::debug!(form_id, field_id, "first invalid field cannot take focus");
            }
        }

        tracing::debug!(
            form_id,
            errors = summary.len(),
            faults = summary.fault_count(),
            "form submit blocked"
        );
        Ok(false)
    }
}
