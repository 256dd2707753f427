//! DOM-backed fields and alerts

use formpart_validation::field::is_required_attr;
use formpart_validation::{AlertRenderer, Field, ValidatorConfig, ALERT_ATTR, CONSTRAINTS_ATTR};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Node};

/// Elements the validator treats as fields
pub const FIELD_SELECTOR: &str = "input, select, textarea";

/// Attribute equality selector, e.g. `[data-input="user[name]"]`
pub fn attr_selector(attr: &str, value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("[{}=\"{}\"]", attr, escaped)
}

/// All fields under `holder`, in document order
pub fn collect_fields(holder: &Element) -> Result<Vec<Element>, JsValue> {
    let nodes = holder.query_selector_all(FIELD_SELECTOR)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// An `<input>`, `<select>` or `<textarea>` on the page
#[derive(Debug, Clone)]
pub struct DomField {
    element: Element,
}

impl DomField {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl Field for DomField {
    fn name(&self) -> String {
        self.element.get_attribute("name").unwrap_or_default()
    }

    fn value(&self) -> String {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(textarea) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn constraints(&self) -> Option<String> {
        self.element.get_attribute(CONSTRAINTS_ATTR)
    }

    fn is_required(&self) -> bool {
        is_required_attr(self.element.get_attribute("required").as_deref())
    }

    fn alert_text(&self) -> Option<String> {
        self.element.get_attribute(ALERT_ATTR)
    }
}

/// Renders alerts as `<span data-input=.. data-constraint=..>` siblings
/// placed right before their field
#[derive(Debug, Clone)]
pub struct DomAlerts {
    holder: Element,
    alert_class: String,
    invalid_class: String,
}

impl DomAlerts {
    pub fn new(holder: Element, config: &ValidatorConfig) -> Self {
        Self {
            holder,
            alert_class: config.alert_class.clone(),
            invalid_class: config.invalid_class.clone(),
        }
    }

    fn find_field(&self, name: &str) -> Result<Option<Element>, JsValue> {
        let by_name = attr_selector("name", name);
        let selector = FIELD_SELECTOR
            .split(", ")
            .map(|tag| format!("{}{}", tag, by_name))
            .collect::<Vec<_>>()
            .join(", ");
        self.holder.query_selector(&selector)
    }

    fn alerts_for(&self, field: &str, constraint: Option<&str>) -> Result<Vec<Element>, JsValue> {
        let mut selector = attr_selector("data-input", field);
        if let Some(constraint) = constraint {
            selector.push_str(&attr_selector("data-constraint", constraint));
        }

        let nodes = self.holder.query_selector_all(&selector)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn try_show(&self, field: &str, message: &str, constraint: &str) -> Result<(), JsValue> {
        let duplicate = self
            .alerts_for(field, None)?
            .iter()
            .any(|alert| alert.text_content().as_deref() == Some(message));
        if duplicate {
            return Ok(());
        }

        let Some(input) = self.find_field(field)? else {
            return Ok(());
        };
        let parent = input
            .parent_node()
            .ok_or_else(|| JsValue::from_str("field has no parent"))?;
        let document = input
            .owner_document()
            .ok_or_else(|| JsValue::from_str("field has no document"))?;

        let alert = document.create_element("span")?;
        alert.set_class_name(&self.alert_class);
        alert.set_attribute("data-input", field)?;
        alert.set_attribute("data-constraint", constraint)?;
        alert.set_text_content(Some(message));

        let anchor: &Node = &input;
        parent.insert_before(&alert, Some(anchor))?;
        Ok(())
    }

    fn try_clear(&self, field: &str, constraint: Option<&str>) -> Result<(), JsValue> {
        for alert in self.alerts_for(field, constraint)? {
            alert.remove();
        }
        Ok(())
    }

    fn try_set_invalid(&self, field: &str, invalid: bool) -> Result<(), JsValue> {
        if let Some(input) = self.find_field(field)? {
            input
                .class_list()
                .toggle_with_force(&self.invalid_class, invalid)?;
        }
        Ok(())
    }
}

impl AlertRenderer for DomAlerts {
    fn show(&mut self, field: &str, message: &str, constraint: &str) {
        if let Err(err) = self.try_show(field, message, constraint) {
            tracing::error!("Failed to show alert for {}: {:?}", field, err);
        }
    }

    fn clear(&mut self, field: &str, constraint: Option<&str>) {
        if let Err(err) = self.try_clear(field, constraint) {
            tracing::error!("Failed to clear alerts for {}: {:?}", field, err);
        }
    }

    fn set_invalid(&mut self, field: &str, invalid: bool) {
        if let Err(err) = self.try_set_invalid(field, invalid) {
            tracing::error!("Failed to toggle invalid state for {}: {:?}", field, err);
        }
    }
}
