//! Field watcher
//!
//! Owns the evaluator, the renderer and one subscription per watched field.
//! Every value change re-evaluates that single field, with no debouncing.
//! Subscriptions live exactly as long as the watcher (or until `unwatch`).

use tracing::debug;

use crate::alerts::AlertRenderer;
use crate::evaluator::{Evaluation, Evaluator};
use crate::field::{Field, FormField};

#[derive(Debug)]
pub struct Watcher<R: AlertRenderer> {
    evaluator: Evaluator,
    renderer: R,
    subscriptions: Vec<FormField>,
}

impl<R: AlertRenderer> Watcher<R> {
    pub fn new(evaluator: Evaluator, renderer: R) -> Self {
        Self {
            evaluator,
            renderer,
            subscriptions: Vec::new(),
        }
    }

    /// Subscribe to fields. Fields without a constraint attribute are never
    /// evaluated, so they are not subscribed. Returns how many were added.
    pub fn watch<I>(&mut self, fields: I) -> usize
    where
        I: IntoIterator<Item = FormField>,
    {
        let before = self.subscriptions.len();

        for field in fields {
            if field.constraints.is_none() {
                continue;
            }
            // Re-watching a name replaces the old subscription
            self.subscriptions.retain(|watched| watched.name != field.name);
            self.subscriptions.push(field);
        }

        let added = self.subscriptions.len().saturating_sub(before);
        debug!(added, total = self.subscriptions.len(), "Watching fields");
        added
    }

    /// Value-change event for one field
    pub fn notify(&mut self, name: &str, value: impl Into<String>) -> Option<Evaluation> {
        let field = self
            .subscriptions
            .iter_mut()
            .find(|watched| watched.name == name)?;
        field.set_value(value);

        self.evaluator.validate_field(&*field, &mut self.renderer)
    }

    /// Drop one subscription and clear whatever it rendered
    pub fn unwatch(&mut self, name: &str) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|watched| watched.name != name);

        if self.subscriptions.len() == before {
            return false;
        }

        self.renderer.clear(name, None);
        self.renderer.set_invalid(name, false);
        true
    }

    pub fn is_watching(&self, name: &str) -> bool {
        self.subscriptions.iter().any(|watched| watched.name == name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        self.subscriptions.iter()
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.subscriptions.iter().find(|watched| watched.name() == name)
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::AlertBoard;

    fn watcher() -> Watcher<AlertBoard> {
        Watcher::new(Evaluator::default(), AlertBoard::new())
    }

    #[test]
    fn test_watch_skips_unconstrained_fields() {
        let mut watcher = watcher();
        let added = watcher.watch([
            FormField::new("a").with_constraints("text"),
            FormField::new("b"),
        ]);

        assert_eq!(added, 1);
        assert!(watcher.is_watching("a"));
        assert!(!watcher.is_watching("b"));
        assert_eq!(watcher.notify("b", "anything"), None);
        assert!(watcher.renderer().is_empty());
    }

    #[test]
    fn test_rewatch_replaces() {
        let mut watcher = watcher();
        watcher.watch([FormField::new("a").with_constraints("text")]);
        let added = watcher.watch([FormField::new("a").with_constraints("number")]);

        assert_eq!(added, 0);
        assert_eq!(watcher.fields().count(), 1);
        assert_eq!(
            watcher.field("a").and_then(|f| f.constraints.as_deref()),
            Some("number")
        );
    }

    #[test]
    fn test_notify_updates_value_and_evaluates() {
        let mut watcher = watcher();
        watcher.watch([FormField::new("zip").with_constraints("number")]);

        let evaluation = watcher.notify("zip", "12a").unwrap();
        assert!(!evaluation.valid);
        assert_eq!(watcher.field("zip").map(|f| f.value.as_str()), Some("12a"));
        assert!(watcher.renderer().is_invalid("zip"));

        let evaluation = watcher.notify("zip", "12").unwrap();
        assert!(evaluation.valid);
        assert!(watcher.renderer().is_empty());
        assert!(!watcher.renderer().is_invalid("zip"));
    }

    #[test]
    fn test_unwatch_tears_down() {
        let mut watcher = watcher();
        watcher.watch([FormField::new("zip").with_constraints("number")]);
        watcher.notify("zip", "x");
        assert!(!watcher.renderer().is_empty());

        assert!(watcher.unwatch("zip"));
        assert!(!watcher.unwatch("zip"));
        assert!(watcher.renderer().is_empty());
        assert!(!watcher.renderer().is_invalid("zip"));
        assert_eq!(watcher.notify("zip", "x"), None);
    }
}
