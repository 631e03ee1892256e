//! Operator environment variables.
//!
//! The process environment is read once, at start-up, into an
//! [`OperatorEnv`]. Values stay raw here; interpreting them (and deciding
//! what to do with bad input) belongs to the consumers.

use std::collections::BTreeMap;

/// Env var: maximum number of concurrent RBAC provisioning calls.
pub const ENV_RBAC_PROVISIONING_MAX_CONCURRENT_CALLS: &str =
    "RBAC_PROVISIONING_MAX_CONCURRENT_CALLS";

const KNOWN_VARS: &[&str] = &[ENV_RBAC_PROVISIONING_MAX_CONCURRENT_CALLS];

/// Raw operator settings taken from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperatorEnv {
    /// Raw `RBAC_PROVISIONING_MAX_CONCURRENT_CALLS`; `None` when unset.
    pub rbac_max_concurrent_calls: Option<Box<str>>,
}

impl OperatorEnv {
    /// Build from a key/value map (useful for tests and fixtures).
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self {
            rbac_max_concurrent_calls: map
                .get(ENV_RBAC_PROVISIONING_MAX_CONCURRENT_CALLS)
                .map(|value| value.as_str().into()),
        }
    }

    /// Read the current process environment.
    #[must_use]
    pub fn from_std_env() -> Self {
        let map = KNOWN_VARS
            .iter()
            .filter_map(|name| {
                std::env::var(name)
                    .ok()
                    .map(|value| ((*name).to_owned(), value))
            })
            .collect::<BTreeMap<_, _>>();
        Self::from_map(&map)
    }

    /// Raw RBAC concurrency value; unset reads as empty.
    #[must_use]
    pub fn rbac_max_concurrent_calls_raw(&self) -> &str {
        self.rbac_max_concurrent_calls.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_reads_as_empty() {
        let env = OperatorEnv::from_map(&BTreeMap::new());
        assert_eq!(env.rbac_max_concurrent_calls, None);
        assert_eq!(env.rbac_max_concurrent_calls_raw(), "");
    }

    #[test]
    fn value_is_kept_raw() {
        let map = BTreeMap::from([
            (
                ENV_RBAC_PROVISIONING_MAX_CONCURRENT_CALLS.to_owned(),
                " 10 ".to_owned(),
            ),
            ("UNRELATED".to_owned(), "x".to_owned()),
        ]);
        let env = OperatorEnv::from_map(&map);
        assert_eq!(env.rbac_max_concurrent_calls_raw(), " 10 ");
    }
}
