// File: src/field.rs
// Purpose: What the validator reads from a form field

/// Attribute holding the constraint mini-language
pub const CONSTRAINTS_ATTR: &str = "data-form-constraints";

/// Optional per-field message shown when a required field is invalid
pub const ALERT_ATTR: &str = "data-alert";

/// A user-editable element owned by the page.
///
/// `name` scopes the field's alerts, so it must be unique within a form.
pub trait Field {
    fn name(&self) -> String;

    fn value(&self) -> String;

    /// Raw `data-form-constraints` value, `None` when the attribute is absent
    fn constraints(&self) -> Option<String>;

    fn is_required(&self) -> bool;

    fn alert_text(&self) -> Option<String> {
        None
    }
}

/// `required` counts unless it is absent or literally `"false"`
pub fn is_required_attr(attr: Option<&str>) -> bool {
    matches!(attr, Some(value) if value != "false")
}

/// Detached field, for server-side checks and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub constraints: Option<String>,
    pub required: bool,
    pub alert: Option<String>,
}

impl FormField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_constraints(mut self, constraints: impl Into<String>) -> Self {
        self.constraints = Some(constraints.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_alert(mut self, alert: impl Into<String>) -> Self {
        self.alert = Some(alert.into());
        self
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

impl Field for FormField {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn constraints(&self) -> Option<String> {
        self.constraints.clone()
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn alert_text(&self) -> Option<String> {
        self.alert.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_attribute() {
        assert!(!is_required_attr(None));
        assert!(!is_required_attr(Some("false")));
        assert!(is_required_attr(Some("")));
        assert!(is_required_attr(Some("required")));
        assert!(is_required_attr(Some("true")));
    }

    #[test]
    fn test_builder() {
        let field = FormField::new("email")
            .with_value("a@b.co")
            .with_constraints("email")
            .required(true)
            .with_alert("Email please");

        assert_eq!(Field::name(&field), "email");
        assert_eq!(Field::value(&field), "a@b.co");
        assert_eq!(Field::constraints(&field).as_deref(), Some("email"));
        assert!(field.is_required());
        assert_eq!(field.alert_text().as_deref(), Some("Email please"));
    }
}
