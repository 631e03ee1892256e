use super::{
    FieldError, FieldErrors, HUB_DEPLOYMENT_KIND, HubDeployment, OPERATOR_CONFIG_KIND,
    OperatorConfig,
};
use hubop_shared::{AdmissionContext, Validate};
use serde::{Deserialize, Serialize};

/// API group version written by this crate.
pub const API_VERSION: &str = "operator.hubop.dev/v1alpha1";

/// Every kind a document may declare.
pub const KNOWN_KINDS: &[&str] = &[HUB_DEPLOYMENT_KIND, OPERATOR_CONFIG_KIND];

/// Any resource accepted by the operator, discriminated by its `kind` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Resource {
    /// A hub installation.
    HubDeployment(HubDeployment),
    /// The operator configuration singleton.
    OperatorConfig(OperatorConfig),
}

impl Resource {
    /// Kind discriminator.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::HubDeployment(_) => HUB_DEPLOYMENT_KIND,
            Self::OperatorConfig(_) => OPERATOR_CONFIG_KIND,
        }
    }

    /// Resource name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::HubDeployment(hub) => &hub.metadata.name,
            Self::OperatorConfig(config) => &config.metadata.name,
        }
    }

    /// Every violation of the wrapped resource.
    #[must_use]
    pub fn validate_all(&self, ctx: &AdmissionContext) -> FieldErrors {
        match self {
            Self::HubDeployment(hub) => hub.validate_all(ctx),
            Self::OperatorConfig(config) => config.validate_all(ctx),
        }
    }

    /// Apply defaults to the wrapped resource.
    pub fn set_defaults(&mut self) {
        match self {
            Self::HubDeployment(hub) => hub.set_defaults(),
            Self::OperatorConfig(config) => config.set_defaults(),
        }
    }
}

impl Validate for Resource {
    type Error = FieldError;

    fn validate(&self, ctx: &AdmissionContext) -> Result<(), FieldError> {
        match self {
            Self::HubDeployment(hub) => hub.validate(ctx),
            Self::OperatorConfig(config) => config.validate(ctx),
        }
    }
}
