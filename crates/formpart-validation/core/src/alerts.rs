//! Inline alerts
//!
//! An alert belongs to one field (by name) and one constraint. A field never
//! shows the same message twice, and clearing can target a single
//! constraint so that other failing constraints keep their messages.

use std::collections::BTreeSet;

use serde::Serialize;

/// Where validation results end up (the DOM in the browser)
pub trait AlertRenderer {
    /// Show `message` before the field unless that exact text is already
    /// shown for it
    fn show(&mut self, field: &str, message: &str, constraint: &str);

    /// Remove the field's alerts, or only those tagged with `constraint`
    fn clear(&mut self, field: &str, constraint: Option<&str>);

    /// Toggle the invalid state class on the field
    fn set_invalid(&mut self, field: &str, invalid: bool);
}

impl<R: AlertRenderer + ?Sized> AlertRenderer for &mut R {
    fn show(&mut self, field: &str, message: &str, constraint: &str) {
        (**self).show(field, message, constraint)
    }

    fn clear(&mut self, field: &str, constraint: Option<&str>) {
        (**self).clear(field, constraint)
    }

    fn set_invalid(&mut self, field: &str, invalid: bool) {
        (**self).set_invalid(field, invalid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub field: String,
    pub constraint: String,
    pub message: String,
}

/// In-memory renderer. Alerts keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct AlertBoard {
    alerts: Vec<Alert>,
    invalid: BTreeSet<String>,
}

impl AlertBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Alert> + 'a {
        self.alerts.iter().filter(move |alert| alert.field == field)
    }

    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.alerts
            .iter()
            .filter(|alert| alert.field == field)
            .map(|alert| alert.message.as_str())
            .collect()
    }

    pub fn has_constraint(&self, field: &str, constraint: &str) -> bool {
        self.for_field(field)
            .any(|alert| alert.constraint == constraint)
    }

    pub fn is_invalid(&self, field: &str) -> bool {
        self.invalid.contains(field)
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }
}

impl AlertRenderer for AlertBoard {
    fn show(&mut self, field: &str, message: &str, constraint: &str) {
        if self
            .for_field(field)
            .any(|alert| alert.message == message)
        {
            return;
        }

        self.alerts.push(Alert {
            field: field.to_string(),
            constraint: constraint.to_string(),
            message: message.to_string(),
        });
    }

    fn clear(&mut self, field: &str, constraint: Option<&str>) {
        self.alerts.retain(|alert| {
            alert.field != field || constraint.is_some_and(|c| alert.constraint != c)
        });
    }

    fn set_invalid(&mut self, field: &str, invalid: bool) {
        if invalid {
            self.invalid.insert(field.to_string());
        } else {
            self.invalid.remove(field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_show_deduplicates_per_field() {
        let mut board = AlertBoard::new();
        board.show("name", "Too short", "minLength");
        board.show("name", "Too short", "minLength");
        board.show("name", "Too short", "length");
        board.show("other", "Too short", "minLength");

        assert_eq!(board.len(), 2);
        assert_eq!(board.messages("name"), vec!["Too short"]);
        assert_eq!(board.messages("other"), vec!["Too short"]);
    }

    #[test]
    fn test_clear_with_filter_keeps_other_constraints() {
        let mut board = AlertBoard::new();
        board.show("name", "Too short", "minLength");
        board.show("name", "No digits", "nonumber");
        board.show("other", "Too short", "minLength");

        board.clear("name", Some("minLength"));

        assert_eq!(board.messages("name"), vec!["No digits"]);
        assert!(board.has_constraint("other", "minLength"));
    }

    #[test]
    fn test_clear_without_filter_removes_field() {
        let mut board = AlertBoard::new();
        board.show("name", "Too short", "minLength");
        board.show("name", "No digits", "nonumber");
        board.show("other", "Too short", "minLength");

        board.clear("name", None);

        assert!(board.messages("name").is_empty());
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_invalid_state() {
        let mut board = AlertBoard::new();
        board.set_invalid("name", true);
        assert!(board.is_invalid("name"));
        board.set_invalid("name", false);
        assert!(!board.is_invalid("name"));
    }

    #[test]
    fn test_renderer_through_mut_ref() {
        fn render(mut renderer: impl AlertRenderer) {
            renderer.show("f", "m", "c");
        }

        let mut board = AlertBoard::new();
        render(&mut board);
        assert_eq!(board.len(), 1);
    }
}
