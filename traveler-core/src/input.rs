//! Validation of numeric inputs at converter entry

use crate::ConvertError;

/// Reject NaN and infinities
pub fn ensure_finite(value: f64, what: &str) -> Result<f64, ConvertError> {
    if !value.is_finite() {
        return Err(ConvertError::invalid_input(format!(
            "{} must be a finite number, got {}",
            what, value
        )));
    }
    Ok(value)
}

/// Reject non-finite and negative magnitudes (lengths, masses, amounts...)
pub fn ensure_non_negative(value: f64, what: &str) -> Result<f64, ConvertError> {
    let value = ensure_finite(value, what)?;
    if value < 0.0 {
        return Err(ConvertError::invalid_input(format!("negative {} not permitted", what)));
    }
    Ok(value)
}

/// Reject a computed result that overflowed the f64 range
pub fn ensure_representable(result: f64) -> Result<f64, ConvertError> {
    if !result.is_finite() {
        return Err(ConvertError::invalid_input("value too large: result exceeds the representable range"));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_zero_and_positive() {
        assert_eq!(ensure_non_negative(0.0, "value"), Ok(0.0));
        assert_eq!(ensure_non_negative(12.5, "value"), Ok(12.5));
    }

    #[test]
    fn test_rejects_negative() {
        let err = ensure_non_negative(-1.0, "value").unwrap_err();
        assert_eq!(err, ConvertError::InvalidInput("negative value not permitted".to_string()));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(ensure_non_negative(f64::NAN, "amount").is_err());
        assert!(ensure_non_negative(f64::INFINITY, "amount").is_err());
        assert!(ensure_finite(f64::NEG_INFINITY, "temperature").is_err());
        assert_eq!(ensure_finite(-40.0, "temperature"), Ok(-40.0));
    }

    #[test]
    fn test_rejects_overflowed_result() {
        assert_eq!(ensure_representable(2.5e300), Ok(2.5e300));
        assert!(matches!(
            ensure_representable(1e308 * 100.0),
            Err(ConvertError::InvalidInput(_))
        ));
    }
}
