use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    sync::Arc,
};

/// Failure tag reported by a rule.
///
/// Serializes to the camelCase key the host form framework looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationError {
    NoWhiteSpace,
    ArrayIncludes,
}

impl ValidationError {
    #[inline]
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::NoWhiteSpace => "noWhiteSpace",
            Self::ArrayIncludes => "arrayIncludes",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Set of failure tags, serialized as `{"noWhiteSpace": true, ...}`.
///
/// Deserializing drops entries flagged `false`, so a value holds only tags
/// that actually failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "BTreeMap<ValidationError, bool>",
    from = "BTreeMap<ValidationError, bool>"
)]
pub struct ValidationErrors(BTreeSet<ValidationError>);

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn single(error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.insert(error);
        errors
    }

    pub fn insert(&mut self, error: ValidationError) {
        self.0.insert(error);
    }

    pub fn merge(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    #[must_use]
    pub fn contains(&self, error: ValidationError) -> bool {
        self.0.contains(&error)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ValidationError> + '_ {
        self.0.iter().copied()
    }
}

impl From<ValidationErrors> for BTreeMap<ValidationError, bool> {
    fn from(errors: ValidationErrors) -> Self {
        errors.0.into_iter().map(|error| (error, true)).collect()
    }
}

impl From<BTreeMap<ValidationError, bool>> for ValidationErrors {
    fn from(flags: BTreeMap<ValidationError, bool>) -> Self {
        Self(
            flags
                .into_iter()
                .filter_map(|(error, flagged)| flagged.then_some(error))
                .collect(),
        )
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::single(error)
    }
}

/// `None` when the value passes, the failure tags otherwise.
pub type ValidationResult = Option<ValidationErrors>;

/// A single validation rule pluggable into a form framework.
///
/// Implementors should:
/// - Treat `None` as the absent/null value.
/// - Return `None` for a valid value and a tagged [`ValidationErrors`] otherwise.
/// - Never panic: an invalid value is a normal outcome, not an error.
pub trait Validate<T: ?Sized>: Send + Sync {
    /// Failure tag key, also used for logging.
    fn name(&self) -> &'static str;

    /// Check `value` and report the failure tags, if any.
    fn validate(&self, value: Option<&T>) -> ValidationResult;
}

/// Ordered list of rules applied to one value; failure tags are merged.
pub struct Validators<T: ?Sized> {
    rules: Vec<Arc<dyn Validate<T>>>,
}

impl<T: ?Sized> Validators<T> {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    #[must_use]
    pub fn with<V>(mut self, rule: V) -> Self
    where
        V: Validate<T> + 'static,
    {
        self.push(rule);
        self
    }

    pub fn push<V>(&mut self, rule: V)
    where
        V: Validate<T> + 'static,
    {
        self.rules.push(Arc::new(rule));
    }

    pub fn push_shared(&mut self, rule: Arc<dyn Validate<T>>) {
        self.rules.push(rule);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name())
    }

    /// Run every rule and merge their failure tags.
    #[must_use]
    pub fn validate(&self, value: Option<&T>) -> ValidationResult {
        let mut errors = ValidationErrors::new();
        for rule in &self.rules {
            if let Some(found) = rule.validate(value) {
                errors.merge(found);
            }
        }
        (!errors.is_empty()).then_some(errors)
    }
}

impl<T: ?Sized> Default for Validators<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Validators<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Validators<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
