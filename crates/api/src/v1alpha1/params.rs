//! Parameter Dictionary and parameter list validation.
//!
//! Recognized parameter names live in a static table. Adding a parameter
//! means adding a [`ParamSpec`] row; the validation code does not change.

use crate::v1alpha1::{FieldError, FieldErrors, FieldPath};
use hubop_shared::ValidationError;
use serde::{Deserialize, Serialize};

/// Parameter toggling the developer console integration of the hub.
pub const ENABLE_DEVCONSOLE_INTEGRATION: &str = "enable-devconsole-integration";

/// Accepted spellings of boolean-like parameter values.
pub const BOOLEAN_VALUES: &[&str] = &["true", "false"];

/// Recognized hub parameters.
pub const HUB_PARAMS: ParameterDictionary = ParameterDictionary::new(&[ParamSpec {
    name: ENABLE_DEVCONSOLE_INTEGRATION,
    rule: ValueRule::OneOf(BOOLEAN_VALUES),
}]);

/// A `(name, value)` pair inside a parameter list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Param {
    /// Parameter name; must be a key of the dictionary.
    pub name: String,
    /// Parameter value; its domain depends on the name.
    pub value: String,
}

impl Param {
    /// Build a parameter.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Accepted value domain of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRule {
    /// Any string is accepted.
    Unconstrained,
    /// The value must be one of the listed literals.
    OneOf(&'static [&'static str]),
}

impl ValueRule {
    /// True when `value` belongs to the domain.
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Self::Unconstrained => true,
            Self::OneOf(accepted) => accepted.contains(&value),
        }
    }
}

/// One dictionary row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    /// Recognized parameter name.
    pub name: &'static str,
    /// Accepted values.
    pub rule: ValueRule,
}

/// Static, read-only mapping of parameter names to value rules.
#[derive(Debug, Clone, Copy)]
pub struct ParameterDictionary {
    entries: &'static [ParamSpec],
}

impl ParameterDictionary {
    /// Build a dictionary over a static table.
    #[must_use]
    pub const fn new(entries: &'static [ParamSpec]) -> Self {
        Self { entries }
    }

    /// Rule for `name`; `None` means the name itself is not recognized.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<ValueRule> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.rule)
    }

    /// Recognized names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|entry| entry.name)
    }

    /// Check every parameter against the dictionary, recording violations.
    ///
    /// Unknown names are reported against `path` itself; out-of-domain values
    /// against `path.<name>[<index>]`.
    pub fn check_params<E: ValidationError>(&self, params: &[Param], path: &FieldPath) -> Vec<E> {
        let mut errors = Vec::new();
        for (index, param) in params.iter().enumerate() {
            let Some(rule) = self.rule(&param.name) else {
                errors.push(E::invalid_key_name(param.name.as_str(), path.as_str()));
                continue;
            };
            if !rule.accepts(&param.value) {
                let entry = path.child(&param.name).index(index);
                errors.push(E::invalid_value(param.value.as_str(), entry));
            }
        }
        errors
    }
}

/// Validate a hub parameter list located at `path`.
pub fn validate_hub_params(params: &[Param], path: &FieldPath, errors: &mut FieldErrors) {
    for error in HUB_PARAMS.check_params::<FieldError>(params, path) {
        errors.push(error);
    }
}
