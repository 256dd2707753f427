//! String validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Digit groups, optionally comma separated: "1", "1,000", "12,5"
static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+,)*([0-9]+)$").unwrap());

/// Length as the browser reports it (`value.length`, UTF-16 code units)
pub fn dom_length(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Validates string length
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if dom_length(s) >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if dom_length(s) <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

pub fn validate_length(s: &str, min: usize, max: usize) -> Result<(), String> {
    let len = dom_length(s);
    if len >= min && len <= max {
        Ok(())
    } else {
        Err(format!("Must be between {} and {} characters", min, max))
    }
}

/// At least one ASCII letter
pub fn has_letter(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_alphabetic())
}

/// Case validators. Strings without letters satisfy both.
pub fn is_uppercase(s: &str) -> bool {
    s == s.to_uppercase()
}

pub fn is_lowercase(s: &str) -> bool {
    s == s.to_lowercase()
}

pub fn is_number(s: &str) -> bool {
    NUMBER_REGEX.is_match(s)
}

pub fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

pub fn has_dot(s: &str) -> bool {
    s.contains('.')
}

/// Whitespace as the browser's `\s` sees it: U+FEFF counts, U+0085 does not
pub fn has_whitespace(s: &str) -> bool {
    s.chars()
        .any(|c| c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}'))
}
