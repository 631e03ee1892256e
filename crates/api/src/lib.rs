//! # hubop-api
//!
//! Resource types accepted by the hub operator and the admission-time checks
//! that run before a resource is persisted or reconciled.
//! This crate depends on `shared` only.

/// Resource types and validation for API group version `v1alpha1`.
pub mod v1alpha1;

pub use v1alpha1::{
    ApiSpec, DbSpec, FieldError, FieldErrors, FieldPath, HubDeployment, HubDeploymentSpec,
    HubSection, OperatorConfig, OperatorConfigSpec, Param, ParamSpec, ParameterDictionary,
    Resource, TARGET_NAMESPACE_PATH, ValueRule,
};

/// Returns the api crate version.
#[must_use]
pub const fn api_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
