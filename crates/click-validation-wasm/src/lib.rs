//! Click Validation WASM
//!
//! WebAssembly bindings for Click form validation. Exposes the validators
//! under the names and positional signatures the server-rendered form
//! scripts already call, e.g.
//!
//! ```javascript
//! function on_signup_submit() {
//!     var msgs = [
//!         validateTextField('signup_name', true, 2, 20, ['Name is required', 'Name is too short', 'Name is too long']),
//!         validateEmailField('signup_email', true, 0, 0, ['Email is required', '', '', 'Email is invalid'])
//!     ];
//!     return validateForm(msgs, 'signup', 'left', null);
//! }
//! ```
//!
//! Each validator returns `null` or `"<message>|<fieldId>"`. Every export
//! takes an optional trailing config object (`{ display: {...}, styles: {...} }`)
//! with the same shape as `click-validation.toml`.

pub mod dom;

use click_validation as validation;
use click_validation::{
    DisplayConfig, ErrorSummary, FieldResult, FormAggregator, KeyFilter, MessageSet,
    NumberConstraint, TextConstraint, ValidationConfig,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlFormElement, KeyboardEvent};

use crate::dom::DomDocument;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_config(config: JsValue) -> Result<ValidationConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(ValidationConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))
}

fn document(config: &ValidationConfig) -> Result<DomDocument, JsValue> {
    DomDocument::current(config.styles.clone()).ok_or_else(|| JsValue::from_str("No document available"))
}

/// Encode a field result the way the page scripts expect
fn encode(result: FieldResult) -> Option<String> {
    result.err().map(|err| err.encode())
}

/// Display settings for a `validateForm` call; explicit arguments win over config
fn display_for(mut display: DisplayConfig, align: Option<String>, style: Option<String>) -> DisplayConfig {
    if let Some(align) = align {
        display.align = align;
    }
    if style.is_some() {
        display.style = style;
    }
    display
}

fn run<F>(config: JsValue, validate: F) -> Result<Option<String>, JsValue>
where
    F: FnOnce(&mut DomDocument) -> FieldResult,
{
    let config = parse_config(config)?;
    let mut doc = document(&config)?;
    Ok(encode(validate(&mut doc)))
}

#[wasm_bindgen(js_name = validateTextField)]
pub fn validate_text_field(
    id: &str,
    required: bool,
    min_length: usize,
    max_length: usize,
    msgs: Vec<String>,
    config: JsValue,
) -> Result<Option<String>, JsValue> {
    let constraint = TextConstraint::from_bounds(required, min_length, max_length);
    run(config, |doc| validation::validate_text_field(doc, id, &constraint, &MessageSet::from(msgs)))
}

#[wasm_bindgen(js_name = validateCheckbox)]
pub fn validate_checkbox(id: &str, required: bool, msgs: Vec<String>, config: JsValue) -> Result<Option<String>, JsValue> {
    run(config, |doc| validation::validate_checkbox(doc, id, required, &MessageSet::from(msgs)))
}

#[wasm_bindgen(js_name = validateSelect)]
pub fn validate_select(
    id: &str,
    default_value: &str,
    required: bool,
    msgs: Vec<String>,
    config: JsValue,
) -> Result<Option<String>, JsValue> {
    run(config, |doc| {
        validation::validate_select(doc, id, default_value, required, &MessageSet::from(msgs))
    })
}

#[wasm_bindgen(js_name = validateRadioGroup)]
pub fn validate_radio_group(name: &str, required: bool, msgs: Vec<String>, config: JsValue) -> Result<Option<String>, JsValue> {
    run(config, |doc| validation::validate_radio_group(doc, name, required, &MessageSet::from(msgs)))
}

#[wasm_bindgen(js_name = validateFileField)]
pub fn validate_file_field(id: &str, required: bool, msgs: Vec<String>, config: JsValue) -> Result<Option<String>, JsValue> {
    run(config, |doc| validation::validate_file_field(doc, id, required, &MessageSet::from(msgs)))
}

#[wasm_bindgen(js_name = validatePickList)]
pub fn validate_pick_list(id: &str, required: bool, msgs: Vec<String>, config: JsValue) -> Result<Option<String>, JsValue> {
    run(config, |doc| validation::validate_pick_list(doc, id, required, &MessageSet::from(msgs)))
}

#[wasm_bindgen(js_name = validateCreditCardField)]
pub fn validate_credit_card_field(
    id: &str,
    type_id: &str,
    required: bool,
    min_length: usize,
    max_length: usize,
    msgs: Vec<String>,
    config: JsValue,
) -> Result<Option<String>, JsValue> {
    let constraint = TextConstraint::from_bounds(required, min_length, max_length);
    run(config, |doc| {
        validation::validate_credit_card_field(doc, id, type_id, &constraint, &MessageSet::from(msgs))
    })
}

#[wasm_bindgen(js_name = validateEmailField)]
pub fn validate_email_field(
    id: &str,
    required: bool,
    min_length: usize,
    max_length: usize,
    msgs: Vec<String>,
    config: JsValue,
) -> Result<Option<String>, JsValue> {
    let constraint = TextConstraint::from_bounds(required, min_length, max_length);
    run(config, |doc| validation::validate_email_field(doc, id, &constraint, &MessageSet::from(msgs)))
}

#[wasm_bindgen(js_name = validateNumberField)]
pub fn validate_number_field(
    id: &str,
    required: bool,
    min_value: Option<f64>,
    max_value: Option<f64>,
    msgs: Vec<String>,
    config: JsValue,
) -> Result<Option<String>, JsValue> {
    let constraint = NumberConstraint {
        required,
        min_value,
        max_value,
    };
    run(config, |doc| validation::validate_number_field(doc, id, &constraint, &MessageSet::from(msgs)))
}

#[wasm_bindgen(js_name = validateRegexField)]
pub fn validate_regex_field(
    id: &str,
    required: bool,
    min_length: usize,
    max_length: usize,
    regex: &str,
    msgs: Vec<String>,
    config: JsValue,
) -> Result<Option<String>, JsValue> {
    let constraint = TextConstraint::from_bounds(required, min_length, max_length);
    run(config, |doc| {
        validation::validate_regex_field(doc, id, &constraint, regex, &MessageSet::from(msgs))
    })
}

/// Report the collected validator results for a form.
///
/// `msgs` is an array of `null` or `"<message>|<fieldId>"` strings. Returns
/// `true` when the form may be submitted.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(
    msgs: JsValue,
    form_id: &str,
    align: Option<String>,
    style: Option<String>,
    config: JsValue,
) -> Result<bool, JsValue> {
    let results: Vec<Option<String>> = serde_wasm_bindgen::from_value(msgs)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse results: {}", e)))?;
    let config = parse_config(config)?;
    let mut doc = document(&config)?;

    let aggregator = FormAggregator::new(display_for(config.display, align, style));
    aggregator
        .apply(form_id, &ErrorSummary::from_encoded(&results), &mut doc)
        .map_err(|fault| JsValue::from_str(&fault.to_string()))
}

/// Focus a field unless it is missing, hidden or disabled
#[wasm_bindgen(js_name = setFocus)]
pub fn set_focus(id: &str) -> bool {
    use click_validation::FieldSource;

    let Some(mut doc) = DomDocument::current(Default::default()) else {
        return false;
    };
    doc.field(id).map(|mut field| field.focus()).unwrap_or(false)
}

fn key_code(event: &KeyboardEvent) -> u32 {
    match event.char_code() {
        0 => event.key_code(),
        code => code,
    }
}

#[wasm_bindgen(js_name = doubleFilter)]
pub fn double_filter(event: &KeyboardEvent) -> bool {
    KeyFilter::Double.accepts(key_code(event))
}

#[wasm_bindgen(js_name = integerFilter)]
pub fn integer_filter(event: &KeyboardEvent) -> bool {
    KeyFilter::Integer.accepts(key_code(event))
}

#[wasm_bindgen(js_name = noLetterFilter)]
pub fn no_letter_filter(event: &KeyboardEvent) -> bool {
    KeyFilter::NoLetter.accepts(key_code(event))
}

/// Submit `form_id` with the link's query parameters as hidden fields.
///
/// Always returns `false` so the link itself is not followed.
#[wasm_bindgen(js_name = submitLinkAction)]
pub fn submit_link_action(link: &HtmlAnchorElement, form_id: &str) -> bool {
    if let Err(err) = submit_link(link, form_id) {
        tracing::warn!(form_id, ?err, "submit link failed");
    }
    false
}

fn submit_link(link: &HtmlAnchorElement, form_id: &str) -> Result<(), JsValue> {
    let Some(params) = validation::url_params(&link.href()) else {
        return Ok(());
    };
    let Some(doc) = DomDocument::current(Default::default()) else {
        return Ok(());
    };
    let document = doc.document();
    let Some(form) = document
        .get_element_by_id(form_id)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };

    for (name, value) in params {
        let input = document.create_element("input")?;
        input.set_attribute("type", "hidden")?;
        input.set_attribute("name", &name)?;
        input.set_attribute("value", &value)?;
        form.append_child(&input)?;
    }
    form.submit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use click_validation::{ConfigFault, FieldError};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_results() {
        assert_eq!(encode(Ok(())), None);
        assert_eq!(
            encode(Err(FieldError::failed("Name is required", "name"))),
            Some("Name is required|name".to_string())
        );
        assert_eq!(
            encode(Err(ConfigFault::FieldNotFound("age".to_string()).into())),
            Some("Field age not found.|".to_string())
        );
    }

    #[test]
    fn test_display_overrides() {
        let display = display_for(DisplayConfig::default(), Some("right".to_string()), None);
        assert_eq!(display.align, "right");
        assert_eq!(display.style, None);

        let display = display_for(DisplayConfig::default(), None, Some("color:red".to_string()));
        assert_eq!(display.align, "left");
        assert_eq!(display.style.as_deref(), Some("color:red"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn add_input(id: &str, value: &str) {
        let document = web_sys::window().unwrap().document().unwrap();
        let input = document.create_element("input").unwrap();
        input.set_id(id);
        input.set_attribute("value", value).unwrap();
        document.body().unwrap().append_child(&input).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_text_field_in_dom() {
        add_input("browser_name", "  ");
        let msgs = vec!["Name is required".to_string()];
        let result = validate_text_field("browser_name", true, 0, 0, msgs, JsValue::UNDEFINED).unwrap();
        assert_eq!(result.as_deref(), Some("Name is required|browser_name"));
    }

    #[wasm_bindgen_test]
    fn test_missing_field_in_dom() {
        let result = validate_checkbox("browser_missing", true, vec![], JsValue::UNDEFINED).unwrap();
        assert_eq!(result.as_deref(), Some("Field browser_missing not found.|"));
    }

    #[wasm_bindgen_test]
    fn test_set_focus_in_dom() {
        add_input("browser_focus", "");
        assert!(set_focus("browser_focus"));
        assert!(!set_focus("browser_focus_missing"));
    }
}
