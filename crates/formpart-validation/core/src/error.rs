//! Errors raised while running a single rule
//!
//! None of these are fatal: the evaluator turns every one of them into a
//! failed constraint with a user-visible message.

use thiserror::Error;

/// A constraint argument that is missing or not a whole number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("{constraint}: missing argument '{name}'")]
    Missing {
        constraint: &'static str,
        name: &'static str,
    },

    #[error("{constraint}: argument '{name}' must be a whole number, got '{value}'")]
    NotANumber {
        constraint: &'static str,
        name: &'static str,
        value: String,
    },
}

/// A field value that the date rules cannot work with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("'{0}' is not a valid date")]
    Unparseable(String),

    #[error("{constraint}: minimum span is too large")]
    SpanTooLarge { constraint: &'static str },
}

/// Why a rule rejected a value. `Display` is the alert message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleFailure {
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Date(#[from] DateError),
}

impl From<String> for RuleFailure {
    fn from(message: String) -> Self {
        RuleFailure::Invalid(message)
    }
}
