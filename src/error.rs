use thiserror::Error;

/// Errors surfaced by the simulator and its waveform helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlrError {
    /// Malformed waveform, axis or helper argument. Nothing is computed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SlrError>;

impl SlrError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        SlrError::InvalidInput(msg.into())
    }
}

#[cfg(feature = "python")]
impl From<SlrError> for pyo3::PyErr {
    fn from(err: SlrError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SlrError::invalid("rf has 3 samples, g has 4");
        assert_eq!(err.to_string(), "invalid input: rf has 3 samples, g has 4");

        let err = SlrError::Config("SLR_GAMMA_BAR".into());
        assert_eq!(err.to_string(), "invalid configuration: SLR_GAMMA_BAR");
    }
}
