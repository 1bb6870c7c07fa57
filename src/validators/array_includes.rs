use crate::validate::{Validate, ValidationError, ValidationErrors, ValidationResult};
use tracing::trace;

/// Accepts only values found in a fixed allow-list.
///
/// Membership uses [`PartialEq`], so strings, numbers and derived structs are
/// compared by value. The allow-list element type may differ from the
/// candidate type wherever `T: PartialEq<U>` holds, e.g. `String` against `str`.
/// An absent value is never a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayIncludes<T> {
    values: Vec<T>,
}

impl<T> ArrayIncludes<T> {
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[must_use]
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
        U: ?Sized,
    {
        self.values.iter().any(|allowed| allowed == value)
    }
}

impl<T, U> Validate<U> for ArrayIncludes<T>
where
    T: PartialEq<U> + Send + Sync,
    U: ?Sized,
{
    fn name(&self) -> &'static str {
        ValidationError::ArrayIncludes.key()
    }

    fn validate(&self, value: Option<&U>) -> ValidationResult {
        if value.is_some_and(|v| self.contains(v)) {
            return None;
        }
        trace!(
            rule = "arrayIncludes",
            allowed = self.values.len(),
            absent = value.is_none(),
            "rejected value outside allow-list"
        );
        Some(ValidationErrors::single(ValidationError::ArrayIncludes))
    }
}

/// Build a membership rule capturing `values`.
#[must_use]
pub fn array_includes<T>(values: impl IntoIterator<Item = T>) -> ArrayIncludes<T> {
    ArrayIncludes::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(result: &ValidationResult) -> bool {
        result
            .as_ref()
            .is_some_and(|errors| {
                errors.contains(ValidationError::ArrayIncludes) && errors.len() == 1
            })
    }

    #[test]
    fn accepts_members() {
        let rule = array_includes(["a", "b"]);
        assert_eq!(rule.validate(Some(&"a")), None);
        assert_eq!(rule.validate(Some(&"b")), None);
        assert!(rejected(&rule.validate(Some(&"c"))));
    }

    #[test]
    fn repeated_calls_agree() {
        let rule = array_includes(["a", "b"]);
        let first = rule.validate(Some(&"a"));
        let second = rule.validate(Some(&"a"));
        assert_eq!(first, second);
        assert_eq!(rule.values(), ["a", "b"]);
    }

    #[test]
    fn empty_list_rejects_everything() {
        let rule = array_includes(Vec::<&str>::new());
        assert!(rejected(&rule.validate(Some(&"a"))));
        assert!(rejected(&rule.validate(Some(&""))));
        assert!(rejected(&Validate::<&str>::validate(&rule, None)));
    }

    #[test]
    fn absent_value_is_not_a_member() {
        let rule = array_includes(["", "a"]);
        assert!(rejected(&Validate::<&str>::validate(&rule, None)));
        assert_eq!(rule.validate(Some(&"")), None);
    }

    #[test]
    fn owned_strings_match_str() {
        let rule = array_includes(["red".to_string(), "green".to_string()]);
        assert_eq!(Validate::<str>::validate(&rule, Some("red")), None);
        assert!(rejected(&Validate::<str>::validate(&rule, Some("Red"))));
        assert_eq!(Validate::<str>::name(&rule), "arrayIncludes");
    }

    #[test]
    fn numbers_compare_by_value() {
        let rule = array_includes([1_u8, 2, 3]);
        assert_eq!(rule.validate(Some(&2_u8)), None);
        assert!(rejected(&rule.validate(Some(&4_u8))));
    }

    #[test]
    fn structs_compare_by_value() {
        #[derive(Debug, PartialEq)]
        struct Point {
            x: i32,
            y: i32,
        }

        let rule = array_includes([Point { x: 0, y: 0 }]);
        assert_eq!(rule.validate(Some(&Point { x: 0, y: 0 })), None);
        assert!(rejected(&rule.validate(Some(&Point { x: 1, y: 0 }))));
    }

    #[test]
    fn safe_to_share_across_threads() {
        let rule = std::sync::Arc::new(array_includes(["a".to_string()]));
        let handles = (0..4)
            .map(|_| {
                let rule = rule.clone();
                std::thread::spawn(move || Validate::<str>::validate(&*rule, Some("a")))
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), None);
        }
    }
}
