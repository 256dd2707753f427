// File: src/parser.rs
// Purpose: Parse the data-form-constraints attribute into constraint tokens

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::ConstraintKind;

// Word characters plus the argument separator. Anything else splits tokens.
static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z0-9_:]+").unwrap());

/// One `name` or `name:arg1:arg2` token from the attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub name: String,
    pub args: Vec<String>,
}

impl Constraint {
    /// Split a single token on `:`. Empty segments are kept so that
    /// positional arguments stay where the author put them.
    pub fn parse(token: &str) -> Self {
        let mut parts = token.split(':');
        let name = parts.next().unwrap_or_default().to_string();
        let args = parts.map(str::to_string).collect();

        Self { name, args }
    }

    /// Registry lookup (case-sensitive)
    pub fn kind(&self) -> Option<ConstraintKind> {
        ConstraintKind::from_name(&self.name)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for arg in &self.args {
            write!(f, ":{}", arg)?;
        }
        Ok(())
    }
}

/// Extract the ordered constraint list from a field's attribute value.
///
/// `None` means the attribute is absent and the field must not be validated
/// at all. A present but blank attribute gives `Some(vec![])`.
///
/// # Example
/// ```
/// use formpart_validation::parse_constraints;
///
/// let parsed = parse_constraints(Some("length:2:8, nowhitespace")).unwrap();
/// assert_eq!(parsed[0].name, "length");
/// assert_eq!(parsed[0].args, vec!["2", "8"]);
/// assert_eq!(parsed[1].name, "nowhitespace");
///
/// assert!(parse_constraints(None).is_none());
/// ```
pub fn parse_constraints(attr: Option<&str>) -> Option<Vec<Constraint>> {
    attr.map(|raw| {
        TOKEN_REGEX
            .find_iter(raw)
            .map(|token| Constraint::parse(token.as_str()))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_attribute_is_not_empty_list() {
        assert_eq!(parse_constraints(None), None);
        assert_eq!(parse_constraints(Some("")), Some(vec![]));
        assert_eq!(parse_constraints(Some("  ,; ")), Some(vec![]));
    }

    #[test]
    fn test_separators() {
        let parsed = parse_constraints(Some("text|uppercase;  nodot,email")).unwrap();
        let names: Vec<&str> = parsed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["text", "uppercase", "nodot", "email"]);
    }

    #[test]
    fn test_arguments_in_order() {
        let parsed = parse_constraints(Some("dateInPast:18:6:1")).unwrap();
        assert_eq!(
            parsed,
            vec![Constraint {
                name: "dateInPast".to_string(),
                args: vec!["18".to_string(), "6".to_string(), "1".to_string()],
            }]
        );
    }

    #[test]
    fn test_empty_segments_are_kept() {
        let constraint = Constraint::parse("length::5");
        assert_eq!(constraint.args, vec!["".to_string(), "5".to_string()]);

        let constraint = Constraint::parse(":3");
        assert_eq!(constraint.name, "");
        assert_eq!(constraint.kind(), None);
    }

    #[test]
    fn test_dash_splits_tokens() {
        // No escaping: '-' is a separator, so negative numbers cannot be written.
        let parsed = parse_constraints(Some("minLength:-3")).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].args, vec!["".to_string()]);
        assert_eq!(parsed[1].name, "3");
    }

    #[test]
    fn test_display_round_trips_token() {
        let constraint = Constraint::parse("length:3:10");
        assert_eq!(constraint.to_string(), "length:3:10");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Constraint::parse("minLength:1").kind(), Some(ConstraintKind::MinLength));
        assert_eq!(Constraint::parse("minlength:1").kind(), None);
    }
}
