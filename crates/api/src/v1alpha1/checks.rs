//! Presence and value-shape checks, and the declarative field rule tables
//! that drive them.
//!
//! A resource declares its constrained fields as static tables of
//! `(path, accessor)` rows. Validation walks the tables in category order.

use hubop_shared::ValidationError;
use url::Url;

/// Fail with `missing field(s): <path>` when `value` is empty.
///
/// Only the empty string counts as absent. Every check in this module uses
/// the same rule, so a whitespace-only value is present and is judged by the
/// shape checks that follow.
pub fn require_non_empty<E: ValidationError>(value: &str, path: &str) -> Result<(), E> {
    if value.is_empty() {
        return Err(E::missing_field(path));
    }
    Ok(())
}

/// Fail with `invalid value: <value>: <path>` unless `value` is one of `accepted`.
pub fn require_one_of<E: ValidationError>(
    value: &str,
    accepted: &[&str],
    path: &str,
) -> Result<(), E> {
    if accepted.contains(&value) {
        return Ok(());
    }
    Err(E::invalid_value(value, path))
}

/// Fail with `invalid value: <value>: <path>` unless `value` is an absolute
/// URL carrying both a scheme and a host.
///
/// The value is judged as written: the URL parser repairs input (strips
/// surrounding whitespace, drops tabs and newlines, supplies a missing `//`),
/// so those shapes are rejected before it runs.
pub fn require_absolute_url<E: ValidationError>(value: &str, path: &str) -> Result<(), E> {
    if is_absolute_url(value) {
        return Ok(());
    }
    Err(E::invalid_value(value, path))
}

fn is_absolute_url(value: &str) -> bool {
    if value.trim() != value || value.chars().any(|ch| ch.is_ascii_control()) {
        return false;
    }
    let Some((scheme, rest)) = value.split_once(':') else {
        return false;
    };
    let Some(after_slashes) = rest.strip_prefix("//") else {
        return false;
    };
    let authority = after_slashes
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    if scheme.is_empty() || authority.is_empty() || authority.contains('\\') {
        return false;
    }
    Url::parse(value).is_ok_and(|url| url.host_str().is_some_and(|host| !host.is_empty()))
}

/// A field that must not be empty.
pub struct RequiredField<T> {
    /// Reported field path.
    pub path: &'static str,
    /// Reads the field from the resource.
    pub value: fn(&T) -> &str,
}

/// A field restricted to a fixed set of literals. Empty values are left to
/// defaulting and pass.
pub struct LiteralField<T> {
    /// Reported field path.
    pub path: &'static str,
    /// Accepted literals.
    pub accepted: &'static [&'static str],
    /// Reads the field from the resource.
    pub value: fn(&T) -> &str,
}

/// A field that must hold an absolute URL once it is present.
pub struct UrlField<T> {
    /// Reported field path.
    pub path: &'static str,
    /// Reads the field from the resource.
    pub value: fn(&T) -> &str,
}

impl<T> RequiredField<T> {
    /// Run the presence check against `resource`.
    pub fn check<E: ValidationError>(&self, resource: &T) -> Result<(), E> {
        require_non_empty((self.value)(resource), self.path)
    }
}

impl<T> LiteralField<T> {
    /// Run the membership check against `resource`.
    pub fn check<E: ValidationError>(&self, resource: &T) -> Result<(), E> {
        let value = (self.value)(resource);
        if value.is_empty() {
            return Ok(());
        }
        require_one_of(value, self.accepted, self.path)
    }
}

impl<T> UrlField<T> {
    /// Run the URL shape check against `resource`; absent values are skipped.
    pub fn check<E: ValidationError>(&self, resource: &T) -> Result<(), E> {
        let value = (self.value)(resource);
        if value.is_empty() {
            return Ok(());
        }
        require_absolute_url(value, self.path)
    }
}

/// Run every row of a required-field table, collecting failures in table order.
pub fn check_required<T, E: ValidationError>(table: &[RequiredField<T>], resource: &T) -> Vec<E> {
    table.iter().filter_map(|rule| rule.check(resource).err()).collect()
}

/// Run every row of a literal-field table, collecting failures in table order.
pub fn check_literals<T, E: ValidationError>(table: &[LiteralField<T>], resource: &T) -> Vec<E> {
    table.iter().filter_map(|rule| rule.check(resource).err()).collect()
}

/// Run every row of a URL-field table, collecting failures in table order.
pub fn check_urls<T, E: ValidationError>(table: &[UrlField<T>], resource: &T) -> Vec<E> {
    table.iter().filter_map(|rule| rule.check(resource).err()).collect()
}
