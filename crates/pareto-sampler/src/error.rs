use thiserror::Error;

/// Errors raised when building a sampler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplerError {
    /// A distribution parameter was zero, negative or NaN.
    #[error("{name} is not strictly positive: {value}")]
    InvalidArgument { name: &'static str, value: f64 },
}

impl SamplerError {
    /// Name of the rejected parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            SamplerError::InvalidArgument { name, .. } => name,
        }
    }
}
