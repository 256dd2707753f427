//! formpart validation core
//!
//! Attribute-driven field validation for paginated forms. A field carries a
//! `data-form-constraints` attribute such as `"minLength:3 nowhitespace"`;
//! the parser turns it into [`Constraint`]s, the [`Evaluator`] runs each one
//! through the rule registry, and an [`AlertRenderer`] shows or clears the
//! matching inline messages.
//!
//! Pure Rust and DOM-free. The `formpart-validation-wasm` crate binds these
//! traits to live browser elements.

pub mod alerts;
pub mod config;
pub mod date;
pub mod email;
pub mod error;
pub mod evaluator;
pub mod field;
pub mod parser;
pub mod required;
pub mod rules;
pub mod string;
pub mod watcher;

pub use alerts::{Alert, AlertBoard, AlertRenderer};
pub use config::ValidatorConfig;
pub use date::{Clock, FixedClock, SystemClock};
pub use error::{ArgumentError, DateError, RuleFailure};
pub use evaluator::{Evaluation, Evaluator, Failure, RuleOutcome};
pub use field::{Field, FormField, ALERT_ATTR, CONSTRAINTS_ATTR};
pub use parser::{parse_constraints, Constraint};
pub use required::{check_required, REQUIRED_CONSTRAINT};
pub use rules::{ConstraintKind, RuleFn, RuleInput};
pub use watcher::Watcher;
