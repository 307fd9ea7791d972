//! In-memory form
//!
//! A [`FieldSource`] and [`ErrorContainer`] backed by plain values. Useful
//! for validating submitted data outside a browser and for tests.

use std::collections::BTreeMap;

use crate::error::ConfigFault;
use crate::field::{ErrorContainer, FieldRef, FieldSource, VisualState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryField {
    pub id: String,
    pub name: String,
    pub value: String,
    pub checked: bool,
    pub options: usize,
    pub hidden: bool,
    pub disabled: bool,
    pub state: VisualState,
    pub focused: bool,
}

impl MemoryField {
    /// A field whose `name` equals its `id`
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_options(mut self, count: usize) -> Self {
        self.options = count;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

impl FieldRef for MemoryField {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn is_checked(&self) -> bool {
        self.checked
    }

    fn option_count(&self) -> usize {
        self.options
    }

    fn set_error_state(&mut self) {
        self.state = VisualState::Error;
    }

    fn set_valid_state(&mut self) {
        self.state = VisualState::Valid;
    }

    fn focus(&mut self) -> bool {
        if self.hidden || self.disabled {
            return false;
        }
        self.focused = true;
        true
    }
}

/// An error container element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryContainer {
    pub html: Option<String>,
    pub display: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    fields: Vec<MemoryField>,
    containers: BTreeMap<String, MemoryContainer>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, field: MemoryField) -> Self {
        self.fields.push(field);
        self
    }

    /// Add the `<formId>-errorsDiv` / `<formId>-errorsTr` pair with default suffixes
    pub fn with_error_container(self, form_id: &str) -> Self {
        self.with_element(format!("{}-errorsDiv", form_id))
            .with_element(format!("{}-errorsTr", form_id))
    }

    /// Add a bare container element
    pub fn with_element(mut self, element_id: impl Into<String>) -> Self {
        self.containers.insert(element_id.into(), MemoryContainer::default());
        self
    }

    pub fn get(&self, id: &str) -> Option<&MemoryField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut MemoryField> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    pub fn state(&self, id: &str) -> Option<VisualState> {
        self.get(id).map(|f| f.state)
    }

    /// Id of the field currently holding focus
    pub fn focused(&self) -> Option<&str> {
        self.fields.iter().find(|f| f.focused).map(|f| f.id.as_str())
    }

    pub fn container(&self, element_id: &str) -> Option<&MemoryContainer> {
        self.containers.get(element_id)
    }
}

impl FieldSource for MemoryForm {
    fn field(&mut self, id: &str) -> Option<Box<dyn FieldRef + '_>> {
        self.fields
            .iter_mut()
            .find(|f| f.id == id)
            .map(|f| Box::new(f) as Box<dyn FieldRef + '_>)
    }

    fn group(&mut self, name: &str) -> Vec<Box<dyn FieldRef + '_>> {
        self.fields
            .iter_mut()
            .filter(|f| f.name == name)
            .map(|f| Box::new(f) as Box<dyn FieldRef + '_>)
            .collect()
    }
}

impl ErrorContainer for MemoryForm {
    fn write_html(&mut self, element_id: &str, html: &str) -> Result<(), ConfigFault> {
        let container = self
            .containers
            .get_mut(element_id)
            .ok_or_else(|| ConfigFault::ContainerNotFound(element_id.to_string()))?;
        container.html = Some(html.to_string());
        Ok(())
    }

    fn reveal(&mut self, element_id: &str, display: &str) -> Result<(), ConfigFault> {
        let container = self
            .containers
            .get_mut(element_id)
            .ok_or_else(|| ConfigFault::ContainerNotFound(element_id.to_string()))?;
        container.display = Some(display.to_string());
        Ok(())
    }
}
