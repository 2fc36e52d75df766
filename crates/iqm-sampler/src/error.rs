//! Sampler error types.

/// Error type for sampler operations.
#[derive(Debug, Clone)]
pub enum SamplerError {
    /// Model has no variables.
    EmptyModel,
    /// Model exceeds the backend's variable limit.
    TooManyVariables {
        /// Number of variables in the model.
        count: usize,
        /// The backend's limit.
        limit: usize,
    },
    /// A configuration option is invalid for this backend.
    InvalidConfig(String),
    /// Internal backend error.
    InternalError(String),
}

impl SamplerError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            SamplerError::EmptyModel => "SAMPLER_EMPTY_MODEL",
            SamplerError::TooManyVariables { .. } => "SAMPLER_TOO_MANY_VARIABLES",
            SamplerError::InvalidConfig(_) => "SAMPLER_INVALID_CONFIG",
            SamplerError::InternalError(_) => "SAMPLER_INTERNAL",
        }
    }
}

impl std::fmt::Display for SamplerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SamplerError::EmptyModel => write!(f, "[{}] Model has no variables", self.code()),
            SamplerError::TooManyVariables { count, limit } => {
                write!(
                    f,
                    "[{}] Model has {} variables, backend limit is {}",
                    self.code(),
                    count,
                    limit
                )
            }
            SamplerError::InvalidConfig(msg) => {
                write!(f, "[{}] Invalid configuration: {}", self.code(), msg)
            }
            SamplerError::InternalError(msg) => {
                write!(f, "[{}] Sampler internal error: {}", self.code(), msg)
            }
        }
    }
}

impl std::error::Error for SamplerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_empty_model() {
        let err = SamplerError::EmptyModel;
        let msg = format!("{}", err);
        assert!(msg.contains("SAMPLER_EMPTY_MODEL"));
        assert!(msg.contains("no variables"));
    }

    #[test]
    fn test_error_display_too_many_variables() {
        let err = SamplerError::TooManyVariables {
            count: 40,
            limit: 24,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("SAMPLER_TOO_MANY_VARIABLES"));
        assert!(msg.contains("40"));
        assert!(msg.contains("24"));
    }

    #[test]
    fn test_error_display_invalid_config() {
        let err = SamplerError::InvalidConfig("negative time limit".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("SAMPLER_INVALID_CONFIG"));
        assert!(msg.contains("negative time limit"));
    }

    #[test]
    fn test_error_display_internal_error() {
        let err = SamplerError::InternalError("something went wrong".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("SAMPLER_INTERNAL"));
        assert!(msg.contains("something went wrong"));
    }
}
