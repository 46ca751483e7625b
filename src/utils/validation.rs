use crate::utils::error::{Result, SearchError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SearchError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_latitude(value: f64) -> Result<()> {
    validate_range("latitude", value, -90.0, 90.0)
}

pub fn validate_longitude(value: f64) -> Result<()> {
    validate_range("longitude", value, -180.0, 180.0)
}

pub fn validate_positive_number(field_name: &str, value: f64) -> Result<()> {
    if value <= 0.0 {
        return Err(SearchError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than zero".to_string(),
        });
    }
    Ok(())
}
