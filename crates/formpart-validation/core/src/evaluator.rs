//! Constraint evaluation
//!
//! Runs a field's constraints in attribute order. Known constraints are
//! dispatched through the registry; unknown ones are skipped and never
//! affect validity. Each result is pushed to the [`AlertRenderer`] as it is
//! produced: a pass clears that constraint's alert, a failure shows its
//! message.

use serde::Serialize;
use tracing::{debug, warn};

use crate::alerts::AlertRenderer;
use crate::config::ValidatorConfig;
use crate::date::{Clock, SystemClock};
use crate::error::RuleFailure;
use crate::field::Field;
use crate::parser::{parse_constraints, Constraint};
use crate::required::REQUIRED_CONSTRAINT;
use crate::rules::{ConstraintKind, RuleInput};

/// Result of one known constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub kind: ConstraintKind,
    pub result: Result<(), RuleFailure>,
}

impl RuleOutcome {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    pub fn into_failure(self) -> Option<Failure> {
        self.result.err().map(|failure| Failure {
            constraint: self.kind.name().to_string(),
            message: failure.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub constraint: String,
    pub message: String,
}

/// One validation pass over one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub field: String,
    pub valid: bool,
    pub failures: Vec<Failure>,
}

#[derive(Debug)]
pub struct Evaluator {
    clock: Box<dyn Clock>,
    diagnostics: bool,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(&ValidatorConfig::default())
    }
}

impl Evaluator {
    pub fn new(config: &ValidatorConfig) -> Self {
        Self {
            clock: Box::new(SystemClock),
            diagnostics: config.diagnostics_enabled(),
        }
    }

    /// Replace the clock used by the date rules
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Run the known constraints against `value`, without side effects
    pub fn run(&self, value: &str, constraints: &[Constraint]) -> Vec<RuleOutcome> {
        let now = self.clock.now();

        constraints
            .iter()
            .filter_map(|constraint| {
                let Some(kind) = constraint.kind() else {
                    if self.diagnostics {
                        warn!(constraint = %constraint, "Unknown constraint");
                    }
                    return None;
                };

                let input = RuleInput {
                    kind,
                    value,
                    args: &constraint.args,
                    now,
                };

                Some(RuleOutcome {
                    kind,
                    result: kind.rule()(&input),
                })
            })
            .collect()
    }

    /// Evaluate already-parsed constraints and render the outcome
    pub fn evaluate<F, R>(&self, field: &F, constraints: &[Constraint], renderer: &mut R) -> Evaluation
    where
        F: Field + ?Sized,
        R: AlertRenderer + ?Sized,
    {
        let name = field.name();
        let value = field.value();
        let mut failures = Vec::new();

        for outcome in self.run(&value, constraints) {
            let constraint = outcome.kind.name();
            match outcome.into_failure() {
                None => renderer.clear(&name, Some(constraint)),
                Some(failure) => {
                    renderer.show(&name, &failure.message, constraint);
                    failures.push(failure);
                }
            }
        }

        let valid = failures.is_empty();
        renderer.set_invalid(&name, !valid);

        // A filled-in required field no longer needs its "required" alert
        if valid && field.is_required() && !value.is_empty() {
            renderer.clear(&name, Some(REQUIRED_CONSTRAINT));
        }

        debug!(field = %name, valid, failures = failures.len(), "Validated field");

        Evaluation {
            field: name,
            valid,
            failures,
        }
    }

    /// Parse the field's attribute and evaluate it.
    ///
    /// Returns `None` without touching the renderer when the field has no
    /// `data-form-constraints` attribute.
    pub fn validate_field<F, R>(&self, field: &F, renderer: &mut R) -> Option<Evaluation>
    where
        F: Field + ?Sized,
        R: AlertRenderer + ?Sized,
    {
        let attr = field.constraints();
        let constraints = parse_constraints(attr.as_deref())?;
        Some(self.evaluate(field, &constraints, renderer))
    }
}
