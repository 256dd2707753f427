//! Required-field check used before moving to the next page
//!
//! A required field passes when it is non-empty and its constraints (if any)
//! pass. Failing fields are marked invalid and, when there is a message for
//! them, get one alert tagged [`REQUIRED_CONSTRAINT`].

use tracing::debug;

use crate::alerts::AlertRenderer;
use crate::config::ValidatorConfig;
use crate::evaluator::Evaluator;
use crate::field::Field;

/// Constraint tag of the alerts added by [`check_required`]
pub const REQUIRED_CONSTRAINT: &str = "required";

/// Check every required field. Returns true when all of them pass.
///
/// Non-required fields are left alone. Constraints only run when the
/// validator is enabled in `config`.
pub fn check_required<'a, F, I, R>(
    fields: I,
    evaluator: &Evaluator,
    renderer: &mut R,
    config: &ValidatorConfig,
) -> bool
where
    F: Field + ?Sized + 'a,
    I: IntoIterator<Item = &'a F>,
    R: AlertRenderer + ?Sized,
{
    let mut all_valid = true;

    for field in fields {
        if !field.is_required() {
            continue;
        }

        let name = field.name();
        let constraints_ok = if config.enabled {
            evaluator
                .validate_field(field, renderer)
                .map_or(true, |evaluation| evaluation.valid)
        } else {
            true
        };
        let valid = constraints_ok && !field.value().is_empty();

        if valid {
            renderer.set_invalid(&name, false);
            renderer.clear(&name, Some(REQUIRED_CONSTRAINT));
        } else {
            all_valid = false;
            renderer.set_invalid(&name, true);

            let text = field
                .alert_text()
                .or_else(|| config.default_field_alert_text.clone());
            if let Some(text) = text {
                renderer.show(&name, &text, REQUIRED_CONSTRAINT);
            }
        }
    }

    debug!(valid = all_valid, "Checked required fields");
    all_valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::AlertBoard;
    use crate::field::FormField;
    use pretty_assertions::assert_eq;

    fn check(fields: &[FormField], board: &mut AlertBoard, config: &ValidatorConfig) -> bool {
        check_required(fields, &Evaluator::new(config), board, config)
    }

    #[test]
    fn test_empty_required_field_fails() {
        let fields = vec![FormField::new("name").required(true)];
        let mut board = AlertBoard::new();

        assert!(!check(&fields, &mut board, &ValidatorConfig::default()));
        assert!(board.is_invalid("name"));
        // No data-alert and no default text: class only
        assert!(board.is_empty());
    }

    #[test]
    fn test_optional_fields_are_ignored() {
        let fields = vec![
            FormField::new("nickname").with_constraints("minLength:3"),
            FormField::new("name").required(true).with_value("Ada"),
        ];
        let mut board = AlertBoard::new();

        assert!(check(&fields, &mut board, &ValidatorConfig::default()));
        assert!(board.is_empty());
        assert!(!board.is_invalid("nickname"));
    }

    #[test]
    fn test_field_alert_wins_over_default() {
        let fields = vec![
            FormField::new("a").required(true).with_alert("Fill A"),
            FormField::new("b").required(true),
        ];
        let config = ValidatorConfig {
            default_field_alert_text: Some("Required".to_string()),
            ..Default::default()
        };
        let mut board = AlertBoard::new();

        assert!(!check(&fields, &mut board, &config));
        assert_eq!(board.messages("a"), vec!["Fill A"]);
        assert_eq!(board.messages("b"), vec!["Required"]);
        assert!(board.has_constraint("a", REQUIRED_CONSTRAINT));
    }

    #[test]
    fn test_constraints_gate_required_fields() {
        let mut fields = vec![FormField::new("code")
            .required(true)
            .with_value("ab")
            .with_constraints("minLength:3")
            .with_alert("Check the code")];
        let mut board = AlertBoard::new();
        let config = ValidatorConfig::default();

        assert!(!check(&fields, &mut board, &config));
        assert_eq!(
            board.messages("code"),
            vec!["Must be at least 3 characters", "Check the code"]
        );

        fields[0].set_value("abc");
        assert!(check(&fields, &mut board, &config));
        assert!(board.is_empty());
        assert!(!board.is_invalid("code"));
    }

    #[test]
    fn test_disabled_validator_only_checks_emptiness() {
        let fields = vec![FormField::new("code")
            .required(true)
            .with_value("ab")
            .with_constraints("minLength:3")];
        let config = ValidatorConfig {
            enabled: false,
            ..Default::default()
        };
        let mut board = AlertBoard::new();

        assert!(check(&fields, &mut board, &config));
        assert!(board.is_empty());
    }
}
