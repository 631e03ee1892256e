//! Error envelope shared by every crate.
//!
//! Failures fall in two groups. A rejection means the caller's input was
//! refused: an invalid resource, an unknown kind, a malformed document. A
//! failure means the environment got in the way: a missing file, a broken
//! pipe, a serialization bug. Typed errors stay close to where they are raised
//! and convert into an [`ErrorEnvelope`] at the crate boundary.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::{fmt, io};

/// Diagnostic key/value pairs attached to an envelope.
pub type ErrorMetadata = BTreeMap<String, String>;

/// Which side of the boundary an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The input was refused.
    Rejected,
    /// The environment failed.
    Failed,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(match self {
            Self::Rejected => "rejected",
            Self::Failed => "failed",
        })
    }
}

/// Stable `namespace:code` identifier. Serialized as a single string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    namespace: &'static str,
    code: &'static str,
}

impl ErrorCode {
    /// The caller passed a malformed argument.
    pub const INVALID_INPUT: Self = Self::new("core", "invalid_input");
    /// A file or resource does not exist.
    pub const NOT_FOUND: Self = Self::new("core", "not_found");
    /// Access to a file was denied.
    pub const PERMISSION_DENIED: Self = Self::new("core", "permission_denied");
    /// Any other I/O failure.
    pub const IO: Self = Self::new("core", "io");
    /// A bug or an unrecoverable internal state.
    pub const INTERNAL: Self = Self::new("core", "internal");

    /// Build a code from its two parts.
    #[must_use]
    pub const fn new(namespace: &'static str, code: &'static str) -> Self {
        Self { namespace, code }
    }

    /// Namespace portion (`config` in `config:unknown_kind`).
    #[must_use]
    pub const fn namespace(self) -> &'static str {
        self.namespace
    }

    /// Identifier portion (`unknown_kind` in `config:unknown_kind`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        self.code
    }

    /// True for the codes produced from [`io::Error`].
    #[must_use]
    pub fn is_io(self) -> bool {
        self == Self::NOT_FOUND || self == Self::PERMISSION_DENIED || self == Self::IO
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}:{}", self.namespace, self.code)
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Structured error handed across crate boundaries and rendered by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    /// Rejection or failure.
    pub kind: ErrorKind,
    /// Stable code.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Diagnostic metadata (paths, field names, offending values).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: ErrorMetadata,
}

impl ErrorEnvelope {
    /// The caller's input was refused.
    pub fn rejected(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::build(ErrorKind::Rejected, code, message.into())
    }

    /// The environment failed.
    pub fn failed(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::build(ErrorKind::Failed, code, message.into())
    }

    const fn build(kind: ErrorKind, code: ErrorCode, message: String) -> Self {
        Self {
            kind,
            code,
            message,
            metadata: BTreeMap::new(),
        }
    }

    /// Attach one metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {}: {}", self.kind, self.code, self.message)
    }
}

impl std::error::Error for ErrorEnvelope {}

impl From<io::Error> for ErrorEnvelope {
    fn from(error: io::Error) -> Self {
        let code = match error.kind() {
            io::ErrorKind::NotFound => ErrorCode::NOT_FOUND,
            io::ErrorKind::PermissionDenied => ErrorCode::PERMISSION_DENIED,
            _ => ErrorCode::IO,
        };
        Self::failed(code, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_map_to_core_codes() {
        let missing = ErrorEnvelope::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(missing.kind, ErrorKind::Failed);
        assert_eq!(missing.code, ErrorCode::NOT_FOUND);
        assert!(missing.code.is_io());

        let denied = ErrorEnvelope::from(io::Error::new(io::ErrorKind::PermissionDenied, "no"));
        assert_eq!(denied.code, ErrorCode::PERMISSION_DENIED);

        let broken = ErrorEnvelope::from(io::Error::other("pipe"));
        assert_eq!(broken.code, ErrorCode::IO);
        assert!(!ErrorCode::INTERNAL.is_io());
    }

    #[test]
    fn display_includes_kind_code_and_message() {
        let error = ErrorEnvelope::rejected(
            ErrorCode::new("validation", "missing_field"),
            "missing field(s): spec.targetNamespace",
        )
        .with_metadata("field", "spec.targetNamespace");

        assert_eq!(
            error.to_string(),
            "rejected validation:missing_field: missing field(s): spec.targetNamespace"
        );
        assert_eq!(
            error.metadata.get("field").map(String::as_str),
            Some("spec.targetNamespace")
        );
    }

    #[test]
    fn code_serializes_as_one_string() -> Result<(), serde_json::Error> {
        let error = ErrorEnvelope::rejected(ErrorCode::new("config", "unknown_kind"), "nope");
        let value = serde_json::to_value(&error)?;
        assert_eq!(
            value,
            serde_json::json!({
                "kind": "rejected",
                "code": "config:unknown_kind",
                "message": "nope",
            })
        );
        Ok(())
    }
}
