//! Error types for the verdict core library
//!
//! This module defines the crate-level error type using thiserror, plus the
//! origin taxonomy that classifies individual pipeline failures by the layer
//! that raised them.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for verdict operations
///
/// Pipeline failures are not errors in this sense: validation and execution
/// problems travel as [`crate::FailureDescriptor`] values inside the
/// pipeline. This type covers the machinery itself, chiefly response
/// rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// JSON serialization errors while rendering a response body
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Generic internal error with context
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// The layer that raised a failure
///
/// Origin is informational: it is used only to pick a default severity code
/// when a failure is raised without one explicitly set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    /// Input failed an intrinsic type constraint (format, length, range)
    Domain,
    /// A cross-entity business rule failed (absent reference, uniqueness)
    Application,
    /// The unit of work failed for an infrastructure reason
    Persistence,
}

impl Origin {
    /// Default severity code for failures raised at this layer
    pub fn default_code(&self) -> u16 {
        match self {
            Origin::Domain => 400,
            Origin::Application => 404,
            Origin::Persistence => 500,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Domain => write!(f, "Domain"),
            Origin::Application => write!(f, "Application"),
            Origin::Persistence => write!(f, "Persistence"),
        }
    }
}

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_display() {
        assert_eq!(Origin::Domain.to_string(), "Domain");
        assert_eq!(Origin::Application.to_string(), "Application");
        assert_eq!(Origin::Persistence.to_string(), "Persistence");
    }

    #[test]
    fn test_origin_default_codes() {
        assert_eq!(Origin::Domain.default_code(), 400);
        assert_eq!(Origin::Application.default_code(), 404);
        assert_eq!(Origin::Persistence.default_code(), 500);
    }

    #[test]
    fn test_json_error_conversion() {
        let bad = serde_json::from_str::<serde_json::Value>("{not json");
        let err: Error = bad.unwrap_err().into();
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_internal_error_conversion() {
        let err: Error = anyhow::anyhow!("connection pool exhausted").into();
        assert_eq!(err.to_string(), "Internal error: connection pool exhausted");
        assert!(std::error::Error::source(&err).is_some());
    }
}
