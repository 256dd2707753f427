//! Input listeners owned by a watcher
//!
//! Each watched element gets one `input` listener. The closures are kept
//! alive by the watcher and removed from their elements when it is dropped,
//! so listener lifetime follows the `FormValidator` instead of the page.

use std::cell::RefCell;
use std::rc::Rc;

use formpart_validation::{Evaluator, CONSTRAINTS_ATTR};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::dom::{DomAlerts, DomField};

const CHANGE_EVENT: &str = "input";

struct Listener {
    target: Element,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(CHANGE_EVENT, self.callback.as_ref().unchecked_ref());
    }
}

/// Live subscriptions for a set of fields
pub struct DomWatcher {
    listeners: Vec<Listener>,
}

impl DomWatcher {
    /// Attach a listener to every field carrying a constraint attribute
    pub fn watch(
        fields: Vec<Element>,
        evaluator: Rc<Evaluator>,
        alerts: Rc<RefCell<DomAlerts>>,
    ) -> Result<Self, JsValue> {
        let mut listeners = Vec::new();

        for element in fields {
            if !element.has_attribute(CONSTRAINTS_ATTR) {
                continue;
            }

            let field = DomField::new(element.clone());
            let evaluator = Rc::clone(&evaluator);
            let alerts = Rc::clone(&alerts);

            let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let mut alerts = alerts.borrow_mut();
                evaluator.validate_field(&field, &mut *alerts);
            });

            element.add_event_listener_with_callback(CHANGE_EVENT, callback.as_ref().unchecked_ref())?;
            listeners.push(Listener {
                target: element,
                callback,
            });
        }

        tracing::debug!("Watching {} fields", listeners.len());
        Ok(Self { listeners })
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
