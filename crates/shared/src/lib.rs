//! # hubop-shared
//!
//! Shared building blocks for the hubop workspace:
//!
//! - Result and error envelope types
//! - Validation traits used by resource validators
//! - Bounds errors and the validated-value proof wrapper
//! - Admission context handed to validators
//!
//! This crate only depends on external crates.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod context;
pub mod errors;
pub mod invariants;
pub mod result;
pub mod validation;

pub use context::{AdmissionContext, CorrelationId, Operation};
pub use errors::{ErrorCode, ErrorEnvelope, ErrorKind, ErrorMetadata};
pub use invariants::{BoundsError, Validated};
pub use result::Result;
pub use validation::{Validate, ValidationError};

/// Returns the shared crate version.
#[must_use]
pub const fn shared_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::errors::{ErrorCode, ErrorEnvelope, ErrorKind};
    use super::result::Result;

    #[test]
    fn shared_error_types_are_available() {
        let error = ErrorEnvelope::rejected(ErrorCode::INVALID_INPUT, "invalid");
        assert_eq!(error.kind, ErrorKind::Rejected);
        assert_eq!(error.code.to_string(), "core:invalid_input");
    }

    #[test]
    fn shared_result_type_is_available() {
        let value: Result<i32> = Ok(5);
        assert!(matches!(value.map(|value| value + 1), Ok(6)));
    }
}
