//! Behaviour shared by every entity's draft and change-set types.

use rust_decimal::Decimal;

use crate::errors::ModelError;

/// A partial update. Each present field overwrites the matching field of the
/// stored model; absent fields leave it untouched.
pub trait Patch<M> {
    fn apply(self, model: &mut M);

    /// True when no field is present, i.e. applying is a no-op.
    fn is_empty(&self) -> bool;
}

/// Surrogate `BIGINT` key shared by every table.
pub trait HasId {
    fn id(&self) -> i64;
}

/// Field-level invariants checked before anything reaches storage.
pub trait Validate {
    fn validate(&self) -> Result<(), ModelError>;
}

pub(crate) fn non_empty(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::invalid(format!("{field} required")));
    }
    Ok(())
}

pub(crate) fn email(value: &str) -> Result<(), ModelError> {
    if !value.contains('@') {
        return Err(ModelError::invalid("invalid email"));
    }
    Ok(())
}

pub(crate) fn non_negative(field: &str, value: Decimal) -> Result<(), ModelError> {
    if value < Decimal::ZERO {
        return Err(ModelError::invalid(format!("{field} must be >= 0")));
    }
    Ok(())
}

pub(crate) fn at_least(field: &str, value: i32, min: i32) -> Result<(), ModelError> {
    if value < min {
        return Err(ModelError::invalid(format!("{field} must be >= {min}")));
    }
    Ok(())
}

/// Run `check` only when the optional field is present.
pub(crate) fn when<T>(value: &Option<T>, check: impl FnOnce(&T) -> Result<(), ModelError>) -> Result<(), ModelError> {
    match value {
        Some(v) => check(v),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_positive_amounts_pass() {
        assert!(non_negative("price", Decimal::ZERO).is_ok());
        assert!(non_negative("price", Decimal::new(1999, 2)).is_ok());
        assert!(non_negative("price", Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn blank_strings_are_rejected() {
        assert!(non_empty("name", "   ").is_err());
        assert!(non_empty("name", "Helmet").is_ok());
    }

    #[test]
    fn when_skips_absent_fields() {
        let absent: Option<String> = None;
        assert!(when(&absent, |v| email(v)).is_ok());
        assert!(when(&Some("nope".to_string()), |v| email(v)).is_err());
    }
}
