use crate::validate::{Validate, ValidationError, ValidationErrors, ValidationResult};
use std::fmt::Display;
use tracing::trace;

/// Rejects absent, empty and whitespace-only values.
///
/// Non-text values are stringified through [`Display`] before trimming, so
/// `0` and `false` count as filled in. `None` counts as empty text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoWhiteSpace;

impl NoWhiteSpace {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<V> Validate<V> for NoWhiteSpace
where
    V: Display + ?Sized,
{
    fn name(&self) -> &'static str {
        ValidationError::NoWhiteSpace.key()
    }

    fn validate(&self, value: Option<&V>) -> ValidationResult {
        no_white_space(value)
    }
}

/// Check that `value` has at least one non-whitespace character.
#[must_use]
pub fn no_white_space<V>(value: Option<&V>) -> ValidationResult
where
    V: Display + ?Sized,
{
    let text = value.map(ToString::to_string).unwrap_or_default();
    if text.trim().is_empty() {
        trace!(rule = "noWhiteSpace", value = ?text, "rejected blank value");
        return Some(ValidationErrors::single(ValidationError::NoWhiteSpace));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(result: &ValidationResult) -> bool {
        result
            .as_ref()
            .is_some_and(|errors| {
                errors.contains(ValidationError::NoWhiteSpace) && errors.len() == 1
            })
    }

    #[test]
    fn rejects_absent_and_blank() {
        assert!(rejected(&no_white_space::<str>(None)));
        assert!(rejected(&no_white_space(Some(""))));
        assert!(rejected(&no_white_space(Some("  "))));
        assert!(rejected(&no_white_space(Some("\t\n \r"))));
        assert!(rejected(&no_white_space(Some("\u{a0}\u{2003}"))));
    }

    #[test]
    fn accepts_text() {
        assert_eq!(no_white_space(Some("a")), None);
        assert_eq!(no_white_space(Some(" a ")), None);
        assert_eq!(no_white_space(Some("a b")), None);
        assert_eq!(no_white_space(Some(&String::from("\tx\n"))), None);
    }

    #[test]
    fn stringifies_non_text() {
        assert_eq!(no_white_space(Some(&0_i32)), None);
        assert_eq!(no_white_space(Some(&false)), None);
        assert_eq!(no_white_space(Some(&1.5_f64)), None);
        assert!(rejected(&no_white_space::<i32>(None)));
    }

    #[test]
    fn trait_matches_function() {
        let rule = NoWhiteSpace::new();
        assert_eq!(Validate::<str>::name(&rule), "noWhiteSpace");
        assert_eq!(rule.validate(Some("ok")), None);
        assert!(rejected(&Validate::<str>::validate(&rule, Some(" "))));
    }
}
