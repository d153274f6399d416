//! Shared input checks used by the domain `validate()` methods.

use crate::errors::{Error, Result, ValidationError};

/// Currency amounts must be finite and non-negative.
pub fn ensure_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::Validation(ValidationError::NegativeAmount {
            field: field.to_string(),
            value,
        }));
    }
    Ok(())
}

pub fn ensure_optional_amount(field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) => ensure_amount(field, v),
        None => Ok(()),
    }
}

pub fn ensure_day_of_month(field: &str, value: i32) -> Result<()> {
    if !(1..=31).contains(&value) {
        return Err(Error::Validation(ValidationError::InvalidDay {
            field: field.to_string(),
            value,
        }));
    }
    Ok(())
}

pub fn ensure_not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            field.to_string(),
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_must_be_non_negative_and_finite() {
        assert!(ensure_amount("amount", 0.0).is_ok());
        assert!(ensure_amount("amount", 12.5).is_ok());
        assert!(ensure_amount("amount", -0.01).is_err());
        assert!(ensure_amount("amount", f64::NAN).is_err());
        assert!(ensure_amount("amount", f64::INFINITY).is_err());
    }

    #[test]
    fn day_of_month_bounds() {
        assert!(ensure_day_of_month("dueDay", 1).is_ok());
        assert!(ensure_day_of_month("dueDay", 31).is_ok());
        assert!(ensure_day_of_month("dueDay", 0).is_err());
        assert!(ensure_day_of_month("dueDay", 32).is_err());
    }
}
