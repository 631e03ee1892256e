//! Admission context handed to validators.
//!
//! The admission path builds one context per request. It tells the validator
//! which operation is being admitted and, for updates, the persisted values of
//! fields that may not change in place.

use crate::{ErrorCode, ErrorEnvelope, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// A correlation identifier used for logging.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(Arc<str>);

impl CorrelationId {
    /// Parse a correlation identifier from user input.
    ///
    /// The value is trimmed; empty values are rejected.
    pub fn parse(value: impl AsRef<str>) -> Result<Self> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ErrorEnvelope::rejected(
                ErrorCode::INVALID_INPUT,
                "correlationId must be non-empty",
            ));
        }
        Ok(Self(Arc::<str>::from(trimmed)))
    }

    /// Create a new admission id, best-effort unique within this process.
    #[must_use]
    pub fn new_admission_id() -> Self {
        let n = ADMISSION_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(Arc::<str>::from(format!("adm_{n}")))
    }

    /// Borrow the identifier as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

static ADMISSION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Operation being admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operation {
    /// A new resource is created.
    #[default]
    Create,
    /// An existing resource is replaced.
    Update,
    /// A resource is removed; validation is skipped.
    Delete,
}

impl Operation {
    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Parse an operation name (case-insensitive).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "create" => Some(Self::Create),
            "update" => Some(Self::Update),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Request-scoped admission context.
#[derive(Debug, Clone)]
pub struct AdmissionContext {
    operation: Operation,
    correlation_id: CorrelationId,
    baseline: BTreeMap<Box<str>, Box<str>>,
}

impl AdmissionContext {
    /// Create a context for `operation` with an auto-generated id.
    #[must_use]
    pub fn new(operation: Operation) -> Self {
        Self::with_correlation_id(operation, CorrelationId::new_admission_id())
    }

    /// Create a context with an explicit correlation id.
    #[must_use]
    pub const fn with_correlation_id(operation: Operation, correlation_id: CorrelationId) -> Self {
        Self {
            operation,
            correlation_id,
            baseline: BTreeMap::new(),
        }
    }

    /// Context for a create request.
    #[must_use]
    pub fn create() -> Self {
        Self::new(Operation::Create)
    }

    /// Context for an update request.
    #[must_use]
    pub fn update() -> Self {
        Self::new(Operation::Update)
    }

    /// Context for a delete request.
    #[must_use]
    pub fn delete() -> Self {
        Self::new(Operation::Delete)
    }

    /// Record the persisted value of `path` before this update.
    #[must_use]
    pub fn with_baseline_field(mut self, path: &str, value: &str) -> Self {
        self.baseline.insert(path.into(), value.into());
        self
    }

    /// Operation being admitted.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Return the correlation id.
    #[must_use]
    pub const fn correlation_id(&self) -> &CorrelationId {
        &self.correlation_id
    }

    /// Persisted value of `path`, when the caller supplied one.
    #[must_use]
    pub fn baseline_field(&self, path: &str) -> Option<&str> {
        self.baseline.get(path).map(AsRef::as_ref)
    }

    /// True when the request removes the resource.
    #[must_use]
    pub const fn is_delete(&self) -> bool {
        matches!(self.operation, Operation::Delete)
    }

    /// True when the request replaces an existing resource.
    #[must_use]
    pub const fn is_update(&self) -> bool {
        matches!(self.operation, Operation::Update)
    }
}

impl Default for AdmissionContext {
    fn default() -> Self {
        Self::create()
    }
}
