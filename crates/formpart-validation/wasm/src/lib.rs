//! formpart Validation WASM
//!
//! WebAssembly bindings for the formpart validator.
//! Attaches constraint checks to the fields of a live form and renders
//! inline alerts next to them.
//!
//! # Example (JavaScript)
//! ```javascript
//! import init, { FormValidator } from "./formpart_validation_wasm.js";
//!
//! await init();
//! const validator = new FormValidator(document.querySelector("#signup"), {
//!     defaultFieldAlertText: "This field is required",
//! });
//!
//! nextButton.addEventListener("click", () => {
//!     if (validator.checkRequired()) goToNextPage();
//! });
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use formpart_validation as validation;
use formpart_validation::{Evaluator, Failure, RuleOutcome, ValidatorConfig};
use wasm_bindgen::prelude::*;
use web_sys::Element;

pub mod dom;
pub mod listener;
pub mod logging;

use dom::{collect_fields, DomAlerts, DomField};
use listener::DomWatcher;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Hosts where unknown constraints are reported
const DEV_HOSTS: &[&str] = &["127.0.0.1", "localhost"];

fn is_dev_host() -> bool {
    web_sys::window()
        .and_then(|window| window.location().hostname().ok())
        .is_some_and(|host| DEV_HOSTS.contains(&host.as_str()))
}

fn parse_config(config: JsValue) -> Result<ValidatorConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(ValidatorConfig::default());
    }

    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))
}

/// Local development hosts always report unknown constraints
fn with_host_diagnostics(mut config: ValidatorConfig, dev_host: bool) -> ValidatorConfig {
    if dev_host {
        config.dev_diagnostics = true;
    }
    config
}

/// Validator bound to one form holder element
///
/// Listeners are registered on construction and removed when the object is
/// freed (`validator.free()`) or `unwatch()` is called.
#[wasm_bindgen]
pub struct FormValidator {
    holder: Element,
    config: ValidatorConfig,
    evaluator: Rc<Evaluator>,
    alerts: Rc<RefCell<DomAlerts>>,
    watcher: Option<DomWatcher>,
}

#[wasm_bindgen]
impl FormValidator {
    #[wasm_bindgen(constructor)]
    pub fn new(holder: Element, config: JsValue) -> Result<FormValidator, JsValue> {
        let config = with_host_diagnostics(parse_config(config)?, is_dev_host());
        if let Some(level) = logging::level_for(&config) {
            logging::init(level);
        }

        let evaluator = Rc::new(Evaluator::new(&config));
        let alerts = Rc::new(RefCell::new(DomAlerts::new(holder.clone(), &config)));

        let watcher = if config.enabled {
            Some(DomWatcher::watch(
                collect_fields(&holder)?,
                Rc::clone(&evaluator),
                Rc::clone(&alerts),
            )?)
        } else {
            None
        };

        Ok(FormValidator {
            holder,
            config,
            evaluator,
            alerts,
            watcher,
        })
    }

    /// Validate one field now. Fields without constraints are valid.
    pub fn validate(&self, field: Element) -> bool {
        let mut alerts = self.alerts.borrow_mut();
        self.evaluator
            .validate_field(&DomField::new(field), &mut *alerts)
            .map_or(true, |evaluation| evaluation.valid)
    }

    /// Check the required fields under `scope` (a page), or the whole form
    #[wasm_bindgen(js_name = checkRequired)]
    pub fn check_required(&self, scope: Option<Element>) -> Result<bool, JsValue> {
        let scope = scope.unwrap_or_else(|| self.holder.clone());
        let fields: Vec<DomField> = collect_fields(&scope)?
            .into_iter()
            .map(DomField::new)
            .collect();

        let mut alerts = self.alerts.borrow_mut();
        Ok(validation::check_required(
            &fields,
            &self.evaluator,
            &mut *alerts,
            &self.config,
        ))
    }

    /// Page-level message to show when `checkRequired` fails
    #[wasm_bindgen(getter, js_name = emptyFieldsAlertText)]
    pub fn empty_fields_alert_text(&self) -> String {
        self.config.empty_fields_alert_text.clone()
    }

    /// Number of fields with a live listener
    #[wasm_bindgen(getter, js_name = watchedFields)]
    pub fn watched_fields(&self) -> usize {
        self.watcher.as_ref().map_or(0, DomWatcher::len)
    }

    /// Remove every listener. Rendered alerts stay in place.
    pub fn unwatch(&mut self) {
        self.watcher = None;
    }
}

/// Validate a raw value against a constraint string
///
/// # Returns
/// Array of `{ constraint, message }` failures (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const failures = validateValue('ab', 'minLength:3 nonumber');
/// // [{ constraint: 'minLength', message: 'Must be at least 3 characters' }]
/// ```
#[wasm_bindgen(js_name = validateValue)]
pub fn validate_value(value: &str, constraints: &str) -> Result<JsValue, JsValue> {
    let failures = failures_for(value, constraints);
    Ok(serde_wasm_bindgen::to_value(&failures)?)
}

/// Constraint names the validator understands
#[wasm_bindgen(js_name = knownConstraints)]
pub fn known_constraints() -> Vec<String> {
    validation::ConstraintKind::ALL
        .iter()
        .map(|kind| kind.name().to_string())
        .collect()
}

fn failures_for(value: &str, constraints: &str) -> Vec<Failure> {
    let parsed = validation::parse_constraints(Some(constraints)).unwrap_or_default();
    Evaluator::default()
        .run(value, &parsed)
        .into_iter()
        .filter_map(RuleOutcome::into_failure)
        .collect()
}
