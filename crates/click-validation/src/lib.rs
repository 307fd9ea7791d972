//! Click Validation Core
//!
//! Field validators and the form error aggregator for Click forms.
//! Validators work against the [`FieldSource`] / [`FieldRef`] abstraction, so
//! the same logic runs in the browser (through the WASM binding) and in
//! plain Rust against an in-memory form.

pub mod aggregate;
pub mod card;
pub mod choice;
pub mod config;
pub mod email;
pub mod error;
pub mod field;
pub mod filter;
pub mod memory;
pub mod messages;
pub mod numeric;
pub mod params;
pub mod pattern;
pub mod string;
pub mod text;

pub use aggregate::{ErrorEntry, ErrorSummary, FormAggregator};
pub use card::{validate_credit_card_field, CardNetwork};
pub use choice::{
    validate_checkbox, validate_file_field, validate_pick_list, validate_radio_group,
    validate_select,
};
pub use config::{DisplayConfig, StyleConfig, ValidationConfig};
pub use email::validate_email_field;
pub use error::{ConfigFault, FieldError, FieldResult};
pub use field::{ErrorContainer, FieldRef, FieldSource, VisualState};
pub use filter::KeyFilter;
pub use memory::{MemoryField, MemoryForm};
pub use messages::{FailureKind, MessageSet};
pub use numeric::{validate_number_field, NumberConstraint};
pub use params::url_params;
pub use pattern::validate_regex_field;
pub use string::trim;
pub use text::{validate_text_field, TextConstraint};
