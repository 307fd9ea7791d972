//! Browser DOM adapter for the validation core

use click_validation::{ConfigFault, ErrorContainer, FieldRef, FieldSource, StyleConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// An input, select or textarea element
pub struct DomField<'a> {
    element: HtmlElement,
    styles: &'a StyleConfig,
}

impl<'a> DomField<'a> {
    pub fn new(element: HtmlElement, styles: &'a StyleConfig) -> Self {
        Self { element, styles }
    }

    fn set_background(&self, colour: &str) {
        if let Err(err) = self.element.style().set_property("background", colour) {
            tracing::debug!(id = %self.element.id(), ?err, "could not set field background");
        }
    }

    fn is_disabled(&self) -> bool {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            return input.disabled();
        }
        if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
            return select.disabled();
        }
        if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            return area.disabled();
        }
        self.element.has_attribute("disabled")
    }

    fn is_hidden(&self) -> bool {
        self.element.hidden()
            || self
                .element
                .dyn_ref::<HtmlInputElement>()
                .map(|input| input.type_() == "hidden")
                .unwrap_or(false)
    }
}

impl FieldRef for DomField<'_> {
    fn id(&self) -> String {
        self.element.id()
    }

    fn value(&self) -> String {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            return input.value();
        }
        if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
            return select.value();
        }
        if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            return area.value();
        }
        self.element.get_attribute("value").unwrap_or_default()
    }

    fn is_checked(&self) -> bool {
        self.element
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::checked)
            .unwrap_or(false)
    }

    fn option_count(&self) -> usize {
        self.element
            .dyn_ref::<HtmlSelectElement>()
            .map(|select| select.length() as usize)
            .unwrap_or(0)
    }

    fn set_error_state(&mut self) {
        self.set_background(&self.styles.error_background);
    }

    fn set_valid_state(&mut self) {
        self.set_background(&self.styles.valid_background);
    }

    fn focus(&mut self) -> bool {
        if self.is_hidden() || self.is_disabled() {
            return false;
        }
        self.element.focus().is_ok()
    }
}

/// The page document, seen as a field source and error container
pub struct DomDocument {
    document: Document,
    styles: StyleConfig,
}

impl DomDocument {
    pub fn new(document: Document, styles: StyleConfig) -> Self {
        Self { document, styles }
    }

    /// The current window's document
    pub fn current(styles: StyleConfig) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self::new(document, styles))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl FieldSource for DomDocument {
    fn field(&mut self, id: &str) -> Option<Box<dyn FieldRef + '_>> {
        let element = self.html_element(id)?;
        Some(Box::new(DomField::new(element, &self.styles)))
    }

    fn group(&mut self, name: &str) -> Vec<Box<dyn FieldRef + '_>> {
        let nodes = self.document.get_elements_by_name(name);
        let styles = &self.styles;
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(|element| Box::new(DomField::new(element, styles)) as Box<dyn FieldRef + '_>)
            .collect()
    }
}

impl ErrorContainer for DomDocument {
    fn write_html(&mut self, element_id: &str, html: &str) -> Result<(), ConfigFault> {
        let element = self
            .document
            .get_element_by_id(element_id)
            .ok_or_else(|| ConfigFault::ContainerNotFound(element_id.to_string()))?;
        element.set_inner_html(html);
        Ok(())
    }

    fn reveal(&mut self, element_id: &str, display: &str) -> Result<(), ConfigFault> {
        let element = self
            .html_element(element_id)
            .ok_or_else(|| ConfigFault::ContainerNotFound(element_id.to_string()))?;
        if let Err(err) = element.style().set_property("display", display) {
            tracing::debug!(element_id, ?err, "could not reveal error container");
        }
        Ok(())
    }
}
