use hubop_shared::{ErrorCode, ErrorEnvelope, ValidationError};
use std::fmt;

/// A single path-qualified violation found while validating a resource.
///
/// `Display` renders the exact messages returned to the submitter:
/// - `missing field(s): <path>`
/// - `invalid key name "<key>": <path>`
/// - `invalid value: <value>: <path>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A required field is empty.
    MissingField {
        /// Field path.
        path: String,
    },
    /// A parameter name is not recognized.
    InvalidKeyName {
        /// Offending key.
        key: String,
        /// Path of the list or map holding the key.
        path: String,
    },
    /// A recognized field holds a value outside its accepted domain.
    InvalidValue {
        /// Offending value.
        value: String,
        /// Field path.
        path: String,
    },
}

impl FieldError {
    /// Path of the offending field.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::MissingField { path }
            | Self::InvalidKeyName { path, .. }
            | Self::InvalidValue { path, .. } => path,
        }
    }

    fn error_code(&self) -> ErrorCode {
        match self {
            Self::MissingField { .. } => ErrorCode::new("validation", "missing_field"),
            Self::InvalidKeyName { .. } => ErrorCode::new("validation", "invalid_key_name"),
            Self::InvalidValue { .. } => ErrorCode::new("validation", "invalid_value"),
        }
    }
}

impl ValidationError for FieldError {
    fn missing_field(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    fn invalid_key_name(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self::InvalidKeyName {
            key: key.into(),
            path: path.into(),
        }
    }

    fn invalid_value(value: impl Into<String>, path: impl Into<String>) -> Self {
        Self::InvalidValue {
            value: value.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { path } => write!(formatter, "missing field(s): {path}"),
            Self::InvalidKeyName { key, path } => {
                write!(formatter, "invalid key name \"{key}\": {path}")
            },
            Self::InvalidValue { value, path } => {
                write!(formatter, "invalid value: {value}: {path}")
            },
        }
    }
}

impl std::error::Error for FieldError {}

impl From<FieldError> for ErrorEnvelope {
    fn from(error: FieldError) -> Self {
        let code = error.error_code();
        let message = error.to_string();
        let envelope = Self::rejected(code, message);

        match error {
            FieldError::MissingField { path } => envelope.with_metadata("field", path),
            FieldError::InvalidKeyName { key, path } => envelope
                .with_metadata("field", path)
                .with_metadata("key", key),
            FieldError::InvalidValue { value, path } => envelope
                .with_metadata("field", path)
                .with_metadata("value", value),
        }
    }
}

/// Ordered collection of violations gathered in one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Record a violation.
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Record the error of a failed check, if any.
    pub fn record(&mut self, result: Result<(), FieldError>) {
        if let Err(error) = result {
            self.0.push(error);
        }
    }

    /// True when no violation was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First violation in category order.
    #[must_use]
    pub fn first(&self) -> Option<&FieldError> {
        self.0.first()
    }

    /// Iterate violations in category order.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// `Ok` when empty, otherwise the first violation.
    pub fn into_first(self) -> Result<(), FieldError> {
        self.0.into_iter().next().map_or(Ok(()), Err)
    }

    /// `Ok` when empty, otherwise the whole collection.
    pub fn into_result(self) -> Result<(), Self> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                formatter.write_str("\n")?;
            }
            write!(formatter, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<FieldErrors> for ErrorEnvelope {
    fn from(errors: FieldErrors) -> Self {
        let count = errors.len();
        let fields = errors
            .iter()
            .map(FieldError::path)
            .collect::<Vec<_>>()
            .join(",");
        Self::rejected(ErrorCode::new("validation", "rejected"), errors.to_string())
            .with_metadata("violations", count.to_string())
            .with_metadata("fields", fields)
    }
}
