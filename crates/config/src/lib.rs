//! # hubop-config
//!
//! Start-up configuration for the hub operator: environment variables, the
//! bounded concurrency loader, and resource document loading.
//! This crate depends on `api` and `shared` only.

/// Bounded concurrency limits.
pub mod concurrency;
/// Operator environment variables.
pub mod env;
/// Resource document loading.
pub mod load;

pub use concurrency::{
    ConcurrencyBounds, ConcurrencyLimit, DefaultReason, LimitSource, load_concurrency_limit,
};
pub use env::{ENV_RBAC_PROVISIONING_MAX_CONCURRENT_CALLS, OperatorEnv};
pub use load::{DocumentFormat, load_resource_from_path, parse_resource, to_pretty_json};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
