//! Constraint registry
//!
//! Every constraint name that may appear in `data-form-constraints` is a
//! [`ConstraintKind`] variant, and every variant maps to exactly one
//! [`RuleFn`] in [`REGISTRY`]. Adding a rule means adding a variant, a name
//! and a registry row.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::date::{self, Span};
use crate::email;
use crate::error::{ArgumentError, DateError, RuleFailure};
use crate::string;

/// Everything a rule sees for one constraint on one value
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub kind: ConstraintKind,
    pub value: &'a str,
    pub args: &'a [String],
    pub now: NaiveDateTime,
}

impl<'a> RuleInput<'a> {
    /// Required positional argument. An empty segment counts as missing.
    pub fn arg<T: FromStr>(&self, index: usize, name: &'static str) -> Result<T, ArgumentError> {
        match self.args.get(index).map(String::as_str) {
            None | Some("") => Err(ArgumentError::Missing {
                constraint: self.kind.name(),
                name,
            }),
            Some(raw) => raw.parse().map_err(|_| ArgumentError::NotANumber {
                constraint: self.kind.name(),
                name,
                value: raw.to_string(),
            }),
        }
    }

    /// Optional positional argument, `T::default()` when absent
    pub fn arg_or_default<T: FromStr + Default>(
        &self,
        index: usize,
        name: &'static str,
    ) -> Result<T, ArgumentError> {
        match self.args.get(index).map(String::as_str) {
            None | Some("") => Ok(T::default()),
            Some(_) => self.arg(index, name),
        }
    }
}

/// A rule: `Ok(())` when the value passes, otherwise the reason
pub type RuleFn = fn(&RuleInput<'_>) -> Result<(), RuleFailure>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Length,
    MinLength,
    MaxLength,
    Text,
    Uppercase,
    Lowercase,
    Number,
    NoNumber,
    NoDot,
    NoWhitespace,
    Email,
    DateInPast,
    DateInFuture,
}

impl ConstraintKind {
    pub const ALL: [ConstraintKind; 13] = [
        ConstraintKind::Length,
        ConstraintKind::MinLength,
        ConstraintKind::MaxLength,
        ConstraintKind::Text,
        ConstraintKind::Uppercase,
        ConstraintKind::Lowercase,
        ConstraintKind::Number,
        ConstraintKind::NoNumber,
        ConstraintKind::NoDot,
        ConstraintKind::NoWhitespace,
        ConstraintKind::Email,
        ConstraintKind::DateInPast,
        ConstraintKind::DateInFuture,
    ];

    /// Attribute spelling
    pub fn name(self) -> &'static str {
        match self {
            ConstraintKind::Length => "length",
            ConstraintKind::MinLength => "minLength",
            ConstraintKind::MaxLength => "maxLength",
            ConstraintKind::Text => "text",
            ConstraintKind::Uppercase => "uppercase",
            ConstraintKind::Lowercase => "lowercase",
            ConstraintKind::Number => "number",
            ConstraintKind::NoNumber => "nonumber",
            ConstraintKind::NoDot => "nodot",
            ConstraintKind::NoWhitespace => "nowhitespace",
            ConstraintKind::Email => "email",
            ConstraintKind::DateInPast => "dateInPast",
            ConstraintKind::DateInFuture => "dateInFuture",
        }
    }

    /// Exact, case-sensitive lookup
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn rule(self) -> RuleFn {
        REGISTRY[self as usize].1
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row per kind, in declaration order (indexed by `kind as usize`)
pub static REGISTRY: [(ConstraintKind, RuleFn); 13] = [
    (ConstraintKind::Length, length),
    (ConstraintKind::MinLength, min_length),
    (ConstraintKind::MaxLength, max_length),
    (ConstraintKind::Text, text),
    (ConstraintKind::Uppercase, uppercase),
    (ConstraintKind::Lowercase, lowercase),
    (ConstraintKind::Number, number),
    (ConstraintKind::NoNumber, no_number),
    (ConstraintKind::NoDot, no_dot),
    (ConstraintKind::NoWhitespace, no_whitespace),
    (ConstraintKind::Email, email),
    (ConstraintKind::DateInPast, date_in_past),
    (ConstraintKind::DateInFuture, date_in_future),
];

fn check(ok: bool, message: &str) -> Result<(), RuleFailure> {
    if ok {
        Ok(())
    } else {
        Err(RuleFailure::Invalid(message.to_string()))
    }
}

fn length(input: &RuleInput<'_>) -> Result<(), RuleFailure> {
    let min = input.arg(0, "min")?;
    let max = input.arg(1, "max")?;
    Ok(string::validate_length(input.value, min, max)?)
}

fn min_length(input: &RuleInput<'_>) -> Result<(), RuleFailure> {
    let min = input.arg(0, "min")?;
    Ok(string::validate_min_length(input.value, min)?)
}

fn max_length(input: &RuleInput<'_>) -> Result<(), RuleFailure> {
    let max = input.arg(0, "max")?;
    Ok(string::validate_max_length(input.value, max)?)
}

fn text(input: &RuleInput<'_>) -> Result<(), RuleFailure> {
    check(string::has_letter(input.value), "Must contain at least one letter")
}

fn uppercase(input: &RuleInput<'_>) -> Result<(), RuleFailure> {
    check(string::is_uppercase(input.value), "Must be in uppercase")
}

fn lowercase(input: &RuleInput<'_>) -> Result<(), RuleFailure> {
    check(string::is_lowercase(input.value), "Must be in lowercase")
}

fn number(input: &RuleInput<'_>) -> Result<(), RuleFailure> {
    check(string::is_number(input.value), "Must be a number")
}

fn no_number(input: &RuleInput<'_>) -> Result<(), RuleFailure> {
    check(!string::has_digit(input.value), "Must not contain digits")
}

fn no_dot(input: &RuleInput<'_>) -> Result<(), RuleFailure> {
    check(!string::has_dot(input.value), "Must not contain a dot")
}

fn no_whitespace(input: &RuleInput<'_>) -> Result<(), RuleFailure> {
    check(!string::has_whitespace(input.value), "Must not contain spaces")
}

fn email(input: &RuleInput<'_>) -> Result<(), RuleFailure> {
    check(email::is_valid_email(input.value), "Invalid email address")
}

fn span(input: &RuleInput<'_>) -> Result<(Span, chrono::Duration), RuleFailure> {
    let span = Span::new(
        input.arg(0, "years")?,
        input.arg_or_default(1, "months")?,
        input.arg_or_default(2, "days")?,
    );
    let duration = span.duration().ok_or(DateError::SpanTooLarge {
        constraint: input.kind.name(),
    })?;
    Ok((span, duration))
}

fn date_in_past(input: &RuleInput<'_>) -> Result<(), RuleFailure> {
    let (span, duration) = span(input)?;
    let date = date::parse_date(input.value)?;

    if date::is_past_by(date, input.now, duration) {
        Ok(())
    } else if span.is_zero() {
        Err(RuleFailure::Invalid("Date must be in the past".to_string()))
    } else {
        Err(RuleFailure::Invalid(format!("Date must be at least {} in the past", span)))
    }
}

fn date_in_future(input: &RuleInput<'_>) -> Result<(), RuleFailure> {
    let (span, duration) = span(input)?;
    let date = date::parse_date(input.value)?;

    if date::is_future_by(date, input.now, duration) {
        Ok(())
    } else if span.is_zero() {
        Err(RuleFailure::Invalid("Date must be in the future".to_string()))
    } else {
        Err(RuleFailure::Invalid(format!("Date must be at least {} in the future", span)))
    }
}
