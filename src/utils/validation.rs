use crate::utils::error::{DemoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Payment amounts are rubles and must be positive and finite. The
/// reference behavior accepted anything; rejection here is a deliberate
/// tightening applied at every payment entry point.
pub fn validate_payment_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(DemoError::InvalidAmount { value: amount });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a positive number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_payment_amount() {
        assert!(validate_payment_amount(1000.0).is_ok());
        assert!(validate_payment_amount(0.01).is_ok());
        assert!(validate_payment_amount(0.0).is_err());
        assert!(validate_payment_amount(-5.0).is_err());
        assert!(validate_payment_amount(f64::NAN).is_err());
        assert!(validate_payment_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("amount", 1000.0).is_ok());
        assert!(validate_positive_number("amount", 0.0).is_err());
        assert!(validate_positive_number("amount", -1.0).is_err());
        assert!(validate_positive_number("amount", f64::NAN).is_err());
    }
}
