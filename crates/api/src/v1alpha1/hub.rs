//! `HubDeployment`: one hub installation (database, API, and UI).

use super::checks::{self, LiteralField, RequiredField, UrlField};
use super::{FieldError, FieldErrors, ObjectMeta, first_violation};
use hubop_shared::{AdmissionContext, Validate};
use serde::{Deserialize, Serialize};

/// Kind discriminator of [`HubDeployment`].
pub const HUB_DEPLOYMENT_KIND: &str = "HubDeployment";

/// The only secret name the hub database may use.
pub const DB_SECRET_NAME: &str = "tekton-hub-db";

/// The only secret name the hub API may use.
pub const API_SECRET_NAME: &str = "tekton-hub-api";

/// Desired state of a hub installation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HubDeployment {
    /// API group version of the document.
    pub api_version: String,
    /// Resource identity.
    pub metadata: ObjectMeta,
    /// Desired state.
    pub spec: HubDeploymentSpec,
}

/// Desired state of a hub installation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HubDeploymentSpec {
    /// Namespace the hub components are installed into.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_namespace: String,
    /// Database section.
    pub db: DbSpec,
    /// API section.
    pub api: ApiSpec,
}

/// Database settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbSpec {
    /// Name of the secret holding database credentials.
    #[serde(rename = "secret")]
    pub db_secret_name: String,
}

/// API server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiSpec {
    /// Name of the secret holding API credentials.
    #[serde(rename = "secret")]
    pub api_secret_name: String,
    /// Location of the hub configuration document.
    pub hub_config_url: String,
}

fn hub_config_url(hub: &HubDeployment) -> &str {
    &hub.spec.api.hub_config_url
}

fn db_secret_name(hub: &HubDeployment) -> &str {
    &hub.spec.db.db_secret_name
}

fn api_secret_name(hub: &HubDeployment) -> &str {
    &hub.spec.api.api_secret_name
}

const REQUIRED: &[RequiredField<HubDeployment>] = &[RequiredField {
    path: "spec.api.HubConfigUrl",
    value: hub_config_url,
}];

const LITERALS: &[LiteralField<HubDeployment>] = &[
    LiteralField {
        path: "spec.db.DbSecretName",
        accepted: &[DB_SECRET_NAME],
        value: db_secret_name,
    },
    LiteralField {
        path: "spec.api.ApiSecretName",
        accepted: &[API_SECRET_NAME],
        value: api_secret_name,
    },
];

const URLS: &[UrlField<HubDeployment>] = &[UrlField {
    path: "spec.api.HubConfigUrl",
    value: hub_config_url,
}];

impl HubDeployment {
    /// Build a deployment with the current API version.
    #[must_use]
    pub fn new(metadata: ObjectMeta, spec: HubDeploymentSpec) -> Self {
        Self {
            api_version: super::API_VERSION.to_owned(),
            metadata,
            spec,
        }
    }

    /// Collect every violation, in category order: required fields, then
    /// literal fields, then URL shape.
    #[must_use]
    pub fn validate_all(&self, ctx: &AdmissionContext) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if ctx.is_delete() {
            return errors;
        }
        for error in checks::check_required::<_, FieldError>(REQUIRED, self) {
            errors.push(error);
        }
        for error in checks::check_literals::<_, FieldError>(LITERALS, self) {
            errors.push(error);
        }
        for error in checks::check_urls::<_, FieldError>(URLS, self) {
            errors.push(error);
        }
        errors
    }

    /// Fill empty secret names with the expected literals.
    pub fn set_defaults(&mut self) {
        if self.spec.db.db_secret_name.is_empty() {
            self.spec.db.db_secret_name = DB_SECRET_NAME.to_owned();
        }
        if self.spec.api.api_secret_name.is_empty() {
            self.spec.api.api_secret_name = API_SECRET_NAME.to_owned();
        }
    }
}

impl Validate for HubDeployment {
    type Error = FieldError;

    fn validate(&self, ctx: &AdmissionContext) -> Result<(), FieldError> {
        first_violation(HUB_DEPLOYMENT_KIND, ctx, self.validate_all(ctx))
    }
}
