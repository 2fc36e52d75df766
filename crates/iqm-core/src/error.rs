//! Model error types.

use iqm_sampler::SamplerError;

/// Error type for integer model operations.
#[derive(Debug, Clone)]
pub enum ModelError {
    /// A variable with this name is already declared.
    DuplicateName(String),
    /// Precision is outside the supported range for an integer kind.
    InvalidPrecision {
        /// The offending variable name.
        name: String,
        /// The declared precision.
        precision: u32,
    },
    /// A term references a name that was never declared.
    UnknownVariable(String),
    /// Problem dimensions are inconsistent.
    DimensionMismatch(String),
    /// Sampling was requested but no sampler is registered.
    UnregisteredSampler,
    /// Failure reported by the sampler backend, surfaced as-is.
    Sampler(SamplerError),
}

impl ModelError {
    /// Returns a semantic error code for programmatic handling.
    ///
    /// Sampler failures keep the backend's own code.
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::DuplicateName(_) => "MODEL_DUPLICATE_NAME",
            ModelError::InvalidPrecision { .. } => "MODEL_INVALID_PRECISION",
            ModelError::UnknownVariable(_) => "MODEL_UNKNOWN_VARIABLE",
            ModelError::DimensionMismatch(_) => "MODEL_DIMENSION_MISMATCH",
            ModelError::UnregisteredSampler => "MODEL_UNREGISTERED_SAMPLER",
            ModelError::Sampler(err) => err.code(),
        }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::DuplicateName(name) => {
                write!(f, "[{}] Variable '{}' is already declared", self.code(), name)
            }
            ModelError::InvalidPrecision { name, precision } => {
                write!(
                    f,
                    "[{}] Precision {} for variable '{}' is outside 1..={}",
                    self.code(),
                    precision,
                    name,
                    crate::encoding::MAX_PRECISION
                )
            }
            ModelError::UnknownVariable(name) => {
                write!(
                    f,
                    "[{}] Variable '{}' is not declared; add it with add_variable first",
                    self.code(),
                    name
                )
            }
            ModelError::DimensionMismatch(msg) => {
                write!(f, "[{}] Inconsistent problem dimensions: {}", self.code(), msg)
            }
            ModelError::UnregisteredSampler => {
                write!(
                    f,
                    "[{}] No sampler registered; call set_sampler or sample_with",
                    self.code()
                )
            }
            ModelError::Sampler(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Sampler(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SamplerError> for ModelError {
    fn from(err: SamplerError) -> Self {
        ModelError::Sampler(err)
    }
}
