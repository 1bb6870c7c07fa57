use crate::{
    error::{Error, Result},
    validate::{ValidationResult, Validators},
    validators::{ArrayIncludes, NoWhiteSpace},
};
use serde::Deserialize;
use std::{collections::BTreeMap, fs::read_to_string, path::Path};
use tracing::{debug, warn};

/// One rule descriptor in a rule table, tagged by `"rule"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase", deny_unknown_fields)]
pub enum RuleConfig {
    NoWhiteSpace {},
    ArrayIncludes { values: Vec<String> },
}

impl RuleConfig {
    fn push_into(self, validators: &mut Validators<str>) {
        match self {
            Self::NoWhiteSpace {} => validators.push(NoWhiteSpace),
            Self::ArrayIncludes { values } => validators.push(ArrayIncludes::new(values)),
        }
    }
}

/// Per-field rule sets for text form fields.
///
/// Field names and allow-list entries are strings: every value is checked
/// as text, so a numeric allow-list is written as `["1", "2"]`.
///
/// ```json
/// {
///   "name": [{ "rule": "noWhiteSpace" }],
///   "color": [{ "rule": "arrayIncludes", "values": ["red", "green"] }]
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormRules {
    fields: BTreeMap<String, Validators<str>>,
}

impl FormRules {
    /// Parse a rule table from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `Error::Json` if the text is not a valid rule table.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: BTreeMap<String, Vec<RuleConfig>> = serde_json::from_str(json)?;
        let rules = table
            .into_iter()
            .fold(Self::default(), |rules, (field, configs)| {
                rules.with_field(field, configs)
            });
        debug!(fields = rules.fields.len(), "loaded rule table");
        Ok(rules)
    }

    /// Read and parse a rule table file.
    ///
    /// # Errors
    ///
    /// - Returns `Error::Io` if reading the file fails.
    /// - Returns `Error::Json` if the file is not a valid rule table.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading rule table");
        let content = read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Add (or extend) the rules of `field`.
    #[must_use]
    pub fn with_field(
        mut self,
        field: impl Into<String>,
        configs: impl IntoIterator<Item = RuleConfig>,
    ) -> Self {
        let validators = self.fields.entry(field.into()).or_default();
        for config in configs {
            config.push_into(validators);
        }
        self
    }

    /// Configured field names, sorted.
    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Validators<str>> {
        self.fields.get(field)
    }

    /// Validate `value` against the rules of `field`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownField` if `field` has no rules configured.
    pub fn validate(&self, field: &str, value: Option<&str>) -> Result<ValidationResult> {
        let Some(validators) = self.get(field) else {
            warn!(field, "validation requested for unknown field");
            return Err(Error::unknown_field(field));
        };
        Ok(validators.validate(value))
    }
}
