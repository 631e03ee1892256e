//! Operator resources, API group version `v1alpha1`.
//!
//! Validation is split into small, table-driven pieces:
//! - [`params`]: the Parameter Dictionary and parameter list checks
//! - [`checks`]: presence and value-shape checks plus the field rule tables
//! - [`hub`] and [`operator_config`]: per-resource validators
//!
//! Each validator collects violations in a fixed category order. `validate`
//! surfaces the first one, `validate_all` returns every one.

pub mod checks;
mod field_error;
mod field_path;
pub mod hub;
mod meta;
pub mod operator_config;
pub mod params;
mod resource;

pub use checks::{LiteralField, RequiredField, UrlField};
pub use field_error::{FieldError, FieldErrors};
pub use field_path::FieldPath;
pub use hub::{
    API_SECRET_NAME, ApiSpec, DB_SECRET_NAME, DbSpec, HUB_DEPLOYMENT_KIND, HubDeployment,
    HubDeploymentSpec,
};
pub use meta::ObjectMeta;
pub use operator_config::{
    CONFIG_RESOURCE_NAME, HubSection, OPERATOR_CONFIG_KIND, OperatorConfig, OperatorConfigSpec,
    PROFILE_ALL, PROFILE_BASIC, PROFILE_LITE, PROFILES, TARGET_NAMESPACE_PATH,
};
pub use params::{
    BOOLEAN_VALUES, ENABLE_DEVCONSOLE_INTEGRATION, HUB_PARAMS, Param, ParamSpec,
    ParameterDictionary, ValueRule,
};
pub use resource::{API_VERSION, KNOWN_KINDS, Resource};

use hubop_shared::AdmissionContext;

/// Log a rejected admission and surface its first violation.
fn first_violation(
    kind: &'static str,
    ctx: &AdmissionContext,
    errors: FieldErrors,
) -> Result<(), FieldError> {
    if let Some(first) = errors.first() {
        tracing::debug!(
            kind,
            field = first.path(),
            violations = errors.len(),
            correlation_id = %ctx.correlation_id(),
            operation = %ctx.operation(),
            "resource rejected"
        );
    }
    errors.into_first()
}
