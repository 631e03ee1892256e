//! `OperatorConfig`: the cluster-wide singleton driving which components
//! the operator installs.

use super::checks::{self, LiteralField, RequiredField};
use super::params::validate_hub_params;
use super::{FieldError, FieldErrors, FieldPath, ObjectMeta, Param, first_violation};
use hubop_shared::{AdmissionContext, Validate, ValidationError};
use serde::{Deserialize, Serialize};

/// Kind discriminator of [`OperatorConfig`].
pub const OPERATOR_CONFIG_KIND: &str = "OperatorConfig";

/// The only name an [`OperatorConfig`] may carry.
pub const CONFIG_RESOURCE_NAME: &str = "config";

/// Installs the pipeline engine only.
pub const PROFILE_LITE: &str = "lite";
/// Installs the engine and triggers.
pub const PROFILE_BASIC: &str = "basic";
/// Installs every component.
pub const PROFILE_ALL: &str = "all";
/// Every recognized profile.
pub const PROFILES: &[&str] = &[PROFILE_LITE, PROFILE_BASIC, PROFILE_ALL];

/// Field path of the namespace guarded against change on update. Callers
/// record the persisted value under this key with
/// [`AdmissionContext::with_baseline_field`].
pub const TARGET_NAMESPACE_PATH: &str = "spec.targetNamespace";

/// Cluster-wide operator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatorConfig {
    /// API group version of the document.
    pub api_version: String,
    /// Resource identity.
    pub metadata: ObjectMeta,
    /// Desired state.
    pub spec: OperatorConfigSpec,
}

/// Desired operator state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperatorConfigSpec {
    /// Namespace every component is installed into. Immutable after creation.
    pub target_namespace: String,
    /// Installation profile; empty means "use the default".
    pub profile: String,
    /// Hub integration settings.
    pub hub: HubSection,
}

/// Hub integration settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubSection {
    /// Hub parameters, checked against the hub Parameter Dictionary.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,
}

fn target_namespace(config: &OperatorConfig) -> &str {
    &config.spec.target_namespace
}

fn resource_name(config: &OperatorConfig) -> &str {
    &config.metadata.name
}

fn profile(config: &OperatorConfig) -> &str {
    &config.spec.profile
}

const REQUIRED: &[RequiredField<OperatorConfig>] = &[RequiredField {
    path: TARGET_NAMESPACE_PATH,
    value: target_namespace,
}];

const LITERALS: &[LiteralField<OperatorConfig>] = &[
    LiteralField {
        path: "metadata.name",
        accepted: &[CONFIG_RESOURCE_NAME],
        value: resource_name,
    },
    LiteralField {
        path: "spec.profile",
        accepted: PROFILES,
        value: profile,
    },
];

impl OperatorConfig {
    /// Build the singleton with the current API version.
    #[must_use]
    pub fn new(spec: OperatorConfigSpec) -> Self {
        Self {
            api_version: super::API_VERSION.to_owned(),
            metadata: ObjectMeta::new(CONFIG_RESOURCE_NAME, ""),
            spec,
        }
    }

    /// Collect every violation, in category order: immutable fields, hub
    /// parameters, required fields, then literal fields.
    #[must_use]
    pub fn validate_all(&self, ctx: &AdmissionContext) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if ctx.is_delete() {
            return errors;
        }
        if ctx.is_update() {
            errors.record(self.check_namespace_unchanged(ctx));
        }

        let params_path = FieldPath::root("spec").child("hub").child("params");
        validate_hub_params(&self.spec.hub.params, &params_path, &mut errors);

        for error in checks::check_required::<_, FieldError>(REQUIRED, self) {
            errors.push(error);
        }
        for error in checks::check_literals::<_, FieldError>(LITERALS, self) {
            errors.push(error);
        }
        errors
    }

    fn check_namespace_unchanged(&self, ctx: &AdmissionContext) -> Result<(), FieldError> {
        let Some(previous) = ctx.baseline_field(TARGET_NAMESPACE_PATH) else {
            return Ok(());
        };
        if previous == self.spec.target_namespace {
            return Ok(());
        }
        Err(FieldError::invalid_value(
            self.spec.target_namespace.as_str(),
            TARGET_NAMESPACE_PATH,
        ))
    }

    /// Fill an empty profile with [`PROFILE_ALL`].
    pub fn set_defaults(&mut self) {
        if self.spec.profile.is_empty() {
            self.spec.profile = PROFILE_ALL.to_owned();
        }
    }
}

impl Validate for OperatorConfig {
    type Error = FieldError;

    fn validate(&self, ctx: &AdmissionContext) -> Result<(), FieldError> {
        first_violation(OPERATOR_CONFIG_KIND, ctx, self.validate_all(ctx))
    }
}
