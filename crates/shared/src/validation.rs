//! Validation traits for admission-time resource checks.

use crate::context::AdmissionContext;
use crate::invariants::Validated;

/// Constructors every validation error type must provide.
///
/// Presence and shape checks are written against this trait so they stay
/// independent of the concrete error representation.
pub trait ValidationError: Sized {
    /// A required field was empty or unset.
    fn missing_field(path: impl Into<String>) -> Self;

    /// A map/list key is not recognized at `path`.
    fn invalid_key_name(key: impl Into<String>, path: impl Into<String>) -> Self;

    /// A recognized field holds a value outside its accepted domain.
    fn invalid_value(value: impl Into<String>, path: impl Into<String>) -> Self;
}

/// Validate a resource before it is persisted or reconciled.
pub trait Validate {
    /// Error type returned by validation.
    type Error: ValidationError;

    /// Validate the resource for the operation described by `ctx`.
    fn validate(&self, ctx: &AdmissionContext) -> Result<(), Self::Error>;

    /// Validate and wrap the resource in a [`Validated`] proof.
    fn into_validated(self, ctx: &AdmissionContext) -> Result<Validated<Self>, Self::Error>
    where
        Self: Sized,
    {
        self.validate(ctx)?;
        Ok(Validated::new(self))
    }
}
