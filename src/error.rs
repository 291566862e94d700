//! Application error type.
//!
//! Every variant carries enough context to be printed as-is, and maps to a
//! process exit code so the binary can stay a thin wrapper.

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    /// A configuration field or sampling window is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The wave cannot lift a wire over its crossing neighbour.
    ///
    /// Callers treat this as "generation skipped": nothing is written.
    #[error(
        "generation skipped: {parameter} = {value} is below the crossing clearance minimum {minimum} \
         (2 * wire_radius + mid_gap) / 2"
    )]
    ClearanceViolation {
        parameter: &'static str,
        value: f64,
        minimum: f64,
    },

    #[error("{0}")]
    Io(String),

    #[error("{0}")]
    Serialization(String),
}

impl AppError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::InvalidConfig(_) => 2,
            AppError::ClearanceViolation { .. } => 3,
            AppError::Io(_) | AppError::Serialization(_) => 4,
        }
    }

    /// Whether this error means generation was skipped rather than failed.
    pub fn is_skip(&self) -> bool {
        matches!(self, AppError::ClearanceViolation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearance_violation_reports_skip() {
        let err = AppError::ClearanceViolation {
            parameter: "amplitude",
            value: 0.0,
            minimum: 0.075,
        };
        assert!(err.is_skip());
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().starts_with("generation skipped"));
    }

    #[test]
    fn io_is_not_a_skip() {
        let err = AppError::io("disk full");
        assert!(!err.is_skip());
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.to_string(), "disk full");
    }
}
