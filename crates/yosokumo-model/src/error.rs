use thiserror::Error;

/// Invariant violations raised by entity constructors and setters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Predictor names are client-assigned and must be positive.
    #[error("predictor name must be greater than zero, got {0}")]
    InvalidPredictorName(u64),

    /// Specimen weights must be at least one.
    #[error("specimen weight must be at least 1, got {0}")]
    InvalidWeight(u64),

    /// Privilege numbers run from 1 to 13.
    #[error("privilege number {0} is outside 1..=13")]
    InvalidPrivilegeNumber(u32),
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ModelError::InvalidPredictorName(0).to_string(),
            "predictor name must be greater than zero, got 0"
        );
        assert_eq!(
            ModelError::InvalidWeight(0).to_string(),
            "specimen weight must be at least 1, got 0"
        );
        assert_eq!(
            ModelError::InvalidPrivilegeNumber(14).to_string(),
            "privilege number 14 is outside 1..=13"
        );
    }
}
