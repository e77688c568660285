//! Error types for the CAM tools crate.
//!
//! Derivation and packing never fail; these errors come from export
//! settings validation and from writing cut files.

use shelfkit_core::ParameterError;
use std::io;
use thiserror::Error;

/// Errors that can occur during cut-file generation and export.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// Invalid parameters were provided to an exporter.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cam_tool_error_display() {
        let err = CamToolError::InvalidParameters("passes must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid parameters: passes must be at least 1"
        );
    }

    #[test]
    fn test_error_conversion() {
        let param_err = ParameterError::InvalidDimensions("sheet width must be > 0".to_string());
        let cam_err: CamToolError = param_err.into();
        assert!(matches!(cam_err, CamToolError::Parameter(_)));

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let cam_err: CamToolError = io_err.into();
        assert!(matches!(cam_err, CamToolError::IoError(_)));
    }
}
