//! Proof of validation and out-of-range errors.

use std::fmt;

/// Proof wrapper indicating a value has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T>(T);

impl<T> Validated<T> {
    /// Wrap a validated value.
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the inner value.
    pub const fn as_ref(&self) -> &T {
        &self.0
    }

    /// Consume and return the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Validated<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Out-of-range error for bounded numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsError<T> {
    /// Raw value provided.
    pub value: T,
    /// Inclusive minimum.
    pub min: T,
    /// Inclusive maximum.
    pub max: T,
}

impl<T: fmt::Display> fmt::Display for BoundsError<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "value {} is outside [{}, {}]",
            self.value, self.min, self.max
        )
    }
}

impl<T: fmt::Debug + fmt::Display> std::error::Error for BoundsError<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_error_names_the_range() {
        let error = BoundsError {
            value: 60_u32,
            min: 1,
            max: 50,
        };
        assert_eq!(error.to_string(), "value 60 is outside [1, 50]");
    }

    #[test]
    fn validated_exposes_inner_value() {
        let validated = Validated::new(String::from("config"));
        assert_eq!(validated.len(), 6);
        assert_eq!(validated.as_ref(), "config");
        assert_eq!(validated.into_inner(), "config");
    }
}
