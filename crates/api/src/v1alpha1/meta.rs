use serde::{Deserialize, Serialize};

/// Identity of a resource inside the cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectMeta {
    /// Resource name.
    pub name: String,
    /// Namespace holding the resource (empty for cluster-scoped resources).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,
}

impl ObjectMeta {
    /// Build metadata from a name and namespace.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}
