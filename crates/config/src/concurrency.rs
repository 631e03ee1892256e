//! Bounded concurrency limits derived from raw configuration strings.
//!
//! Loading never fails: empty, malformed, or out-of-range input resolves to
//! the configured default. [`ConcurrencyLimit`] records why, so start-up code
//! can report it.

use crate::env::{ENV_RBAC_PROVISIONING_MAX_CONCURRENT_CALLS, OperatorEnv};
use hubop_shared::BoundsError;
use std::fmt;
use std::num::IntErrorKind;

/// Inclusive range and fallback for a concurrency limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrencyBounds {
    min: u32,
    max: u32,
    default: u32,
}

/// Lowest accepted RBAC provisioning concurrency.
pub const RBAC_MIN_CONCURRENT_CALLS: u32 = 1;
/// Highest accepted RBAC provisioning concurrency.
pub const RBAC_MAX_CONCURRENT_CALLS: u32 = 50;
/// Fallback RBAC provisioning concurrency.
pub const RBAC_DEFAULT_CONCURRENT_CALLS: u32 = 25;

impl ConcurrencyBounds {
    /// Bounds used for RBAC provisioning calls.
    pub const RBAC_PROVISIONING: Self = Self {
        min: RBAC_MIN_CONCURRENT_CALLS,
        max: RBAC_MAX_CONCURRENT_CALLS,
        default: RBAC_DEFAULT_CONCURRENT_CALLS,
    };

    /// Build bounds; `min <= default <= max` and `min >= 1` must hold.
    pub const fn new(min: u32, max: u32, default: u32) -> Result<Self, BoundsError<u32>> {
        if min == 0 || min > max {
            return Err(BoundsError {
                value: min,
                min: 1,
                max,
            });
        }
        if default < min || default > max {
            return Err(BoundsError {
                value: default,
                min,
                max,
            });
        }
        Ok(Self { min, max, default })
    }

    /// Inclusive minimum.
    #[must_use]
    pub const fn min(self) -> u32 {
        self.min
    }

    /// Inclusive maximum.
    #[must_use]
    pub const fn max(self) -> u32 {
        self.max
    }

    /// Fallback value.
    #[must_use]
    pub const fn default_value(self) -> u32 {
        self.default
    }
}

/// Why a limit fell back to its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultReason {
    /// Input was empty.
    Empty,
    /// Input was not an integer.
    NotAnInteger,
    /// Input was below the minimum.
    BelowMinimum,
    /// Input was above the maximum.
    AboveMaximum,
}

impl DefaultReason {
    /// Stable identifier used in logs and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::NotAnInteger => "not_an_integer",
            Self::BelowMinimum => "below_minimum",
            Self::AboveMaximum => "above_maximum",
        }
    }
}

impl fmt::Display for DefaultReason {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Where a resolved limit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitSource {
    /// Input was accepted as-is.
    Configured,
    /// Input was rejected and the default applied.
    Defaulted(DefaultReason),
}

/// A resolved concurrency limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConcurrencyLimit {
    value: u32,
    source: LimitSource,
}

impl ConcurrencyLimit {
    /// Resolve `raw` against `bounds`. Pure; never fails. Surrounding
    /// whitespace makes the input malformed.
    #[must_use]
    pub fn resolve(raw: &str, bounds: ConcurrencyBounds) -> Self {
        match classify(raw, bounds) {
            Ok(value) => Self {
                value,
                source: LimitSource::Configured,
            },
            Err(reason) => Self {
                value: bounds.default,
                source: LimitSource::Defaulted(reason),
            },
        }
    }

    /// Resolve the RBAC provisioning limit from the operator environment,
    /// logging when the default is used.
    #[must_use]
    pub fn rbac_from_env(env: &OperatorEnv) -> Self {
        let raw = env.rbac_max_concurrent_calls_raw();
        let limit = Self::resolve(raw, ConcurrencyBounds::RBAC_PROVISIONING);
        match limit.source {
            LimitSource::Configured | LimitSource::Defaulted(DefaultReason::Empty) => {},
            LimitSource::Defaulted(reason) => tracing::warn!(
                env_var = ENV_RBAC_PROVISIONING_MAX_CONCURRENT_CALLS,
                value = raw,
                reason = reason.as_str(),
                default = limit.value,
                "concurrency limit out of range or malformed; using default"
            ),
        }
        tracing::info!(
            env_var = ENV_RBAC_PROVISIONING_MAX_CONCURRENT_CALLS,
            limit = limit.value,
            "resolved rbac provisioning concurrency"
        );
        limit
    }

    /// The limit.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.value
    }

    /// Where the limit came from.
    #[must_use]
    pub const fn source(self) -> LimitSource {
        self.source
    }

    /// True when the default was applied.
    #[must_use]
    pub const fn is_defaulted(self) -> bool {
        matches!(self.source, LimitSource::Defaulted(_))
    }
}

impl fmt::Display for ConcurrencyLimit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source {
            LimitSource::Configured => write!(formatter, "{} (configured)", self.value),
            LimitSource::Defaulted(reason) => {
                write!(formatter, "{} (default: {reason})", self.value)
            },
        }
    }
}

/// Parse `raw` as an integer within `bounds`, falling back to the default.
#[must_use]
pub fn load_concurrency_limit(raw: &str, bounds: ConcurrencyBounds) -> u32 {
    ConcurrencyLimit::resolve(raw, bounds).value
}

fn classify(raw: &str, bounds: ConcurrencyBounds) -> Result<u32, DefaultReason> {
    if raw.is_empty() {
        return Err(DefaultReason::Empty);
    }
    let parsed = raw.parse::<i64>().map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow => DefaultReason::AboveMaximum,
        IntErrorKind::NegOverflow => DefaultReason::BelowMinimum,
        _ => DefaultReason::NotAnInteger,
    })?;
    if parsed < i64::from(bounds.min) {
        return Err(DefaultReason::BelowMinimum);
    }
    if parsed > i64::from(bounds.max) {
        return Err(DefaultReason::AboveMaximum);
    }
    u32::try_from(parsed).map_err(|_| DefaultReason::AboveMaximum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    const RBAC: ConcurrencyBounds = ConcurrencyBounds::RBAC_PROVISIONING;

    #[test]
    fn bad_input_falls_back_to_default() {
        for raw in ["", "xyz", "-1", "60", "0", "1.5", "  ", " 10 ", "10\n"] {
            assert_eq!(load_concurrency_limit(raw, RBAC), 25, "input {raw:?}");
        }
    }

    #[test]
    fn in_range_input_is_returned() {
        assert_eq!(load_concurrency_limit("10", RBAC), 10);
        assert_eq!(load_concurrency_limit("1", RBAC), 1);
        assert_eq!(load_concurrency_limit("50", RBAC), 50);
        assert_eq!(load_concurrency_limit("+10", RBAC), 10);
    }

    #[test]
    fn reasons_are_recorded() {
        let reason = |raw: &str| ConcurrencyLimit::resolve(raw, RBAC).source();
        assert_eq!(reason(""), LimitSource::Defaulted(DefaultReason::Empty));
        assert_eq!(
            reason("xyz"),
            LimitSource::Defaulted(DefaultReason::NotAnInteger)
        );
        assert_eq!(
            reason("-1"),
            LimitSource::Defaulted(DefaultReason::BelowMinimum)
        );
        assert_eq!(
            reason("60"),
            LimitSource::Defaulted(DefaultReason::AboveMaximum)
        );
        assert_eq!(
            reason("99999999999999999999999"),
            LimitSource::Defaulted(DefaultReason::AboveMaximum)
        );
        assert_eq!(
            reason(" 10 "),
            LimitSource::Defaulted(DefaultReason::NotAnInteger)
        );
        assert_eq!(reason("10"), LimitSource::Configured);
    }

    #[test]
    fn bounds_reject_inconsistent_ranges() {
        assert!(ConcurrencyBounds::new(0, 10, 5).is_err());
        assert!(ConcurrencyBounds::new(10, 5, 7).is_err());
        assert!(ConcurrencyBounds::new(1, 10, 11).is_err());
        assert_eq!(ConcurrencyBounds::new(1, 50, 25), Ok(RBAC));
    }

    #[test]
    fn env_drives_the_rbac_limit() {
        let unset = OperatorEnv::from_map(&BTreeMap::new());
        let limit = ConcurrencyLimit::rbac_from_env(&unset);
        assert_eq!(limit.value(), RBAC_DEFAULT_CONCURRENT_CALLS);
        assert!(limit.is_defaulted());

        let map = BTreeMap::from([(
            ENV_RBAC_PROVISIONING_MAX_CONCURRENT_CALLS.to_owned(),
            "7".to_owned(),
        )]);
        let limit = ConcurrencyLimit::rbac_from_env(&OperatorEnv::from_map(&map));
        assert_eq!(limit.value(), 7);
        assert_eq!(limit.to_string(), "7 (configured)");
    }

    proptest! {
        #[test]
        fn in_range_values_are_unchanged(value in 1_u32..=50) {
            prop_assert_eq!(load_concurrency_limit(&value.to_string(), RBAC), value);
        }

        #[test]
        fn out_of_range_values_use_default(value in prop_oneof![i64::MIN..1_i64, 51_i64..i64::MAX]) {
            prop_assert_eq!(load_concurrency_limit(&value.to_string(), RBAC), 25);
        }

        #[test]
        fn result_is_always_within_bounds(raw in ".*") {
            let value = load_concurrency_limit(&raw, RBAC);
            prop_assert!((RBAC.min()..=RBAC.max()).contains(&value));
        }
    }
}
