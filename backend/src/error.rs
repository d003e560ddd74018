//! Error types shared by the cost model and reporting layers

use thiserror::Error;

/// Errors that can occur while building priced items or cost reports
#[derive(Debug, Error)]
pub enum PricingError {
    /// A constructor or report received inputs it cannot price
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The chart collaborator rejected or failed to draw the chart
    #[error("Chart rendering failed: {0}")]
    Render(String),

    /// Writing a diagnostic dump failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A report could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PricingError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        PricingError::InvalidConfiguration(message.into())
    }
}

/// Reject negative, NaN and infinite amounts.
///
/// Every monetary or physical input to the cost model goes through this
/// check, so queries can never produce NaN or Inf.
pub(crate) fn require_non_negative(field: &str, value: f64) -> Result<f64, PricingError> {
    if !value.is_finite() {
        return Err(PricingError::invalid(format!(
            "{} must be a finite number, got {}",
            field, value
        )));
    }
    if value < 0.0 {
        return Err(PricingError::invalid(format!(
            "{} must not be negative, got {}",
            field, value
        )));
    }
    Ok(value)
}
