//! Failure descriptors collected by the pipeline
//!
//! A failure descriptor is an immutable record of one detected problem: a
//! severity code drawn from the transport-status vocabulary, a human-readable
//! message, and the origin layer that raised it. Descriptors are created at
//! the site that detects the problem and never mutated afterwards.
//!
//! Copyright (c) 2025 Verdict Team
//! Licensed under the Apache-2.0 license

use crate::error::Origin;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one fallible typed-value construction or unit of work
pub type Checked<T> = std::result::Result<T, FailureDescriptor>;

/// A classified, immutable record of one detected problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDescriptor {
    /// Severity code; numerically higher codes outrank lower ones
    pub code: u16,
    /// Human-readable description of the problem
    pub message: String,
    /// The layer that raised the failure
    pub origin: Origin,
}

impl FailureDescriptor {
    /// Create a descriptor with an explicit code and origin
    pub fn with_code<M: Into<String>>(code: u16, origin: Origin, message: M) -> Self {
        Self {
            code,
            message: message.into(),
            origin,
        }
    }

    /// Create a descriptor carrying the default code for its origin
    pub fn from_origin<M: Into<String>>(origin: Origin, message: M) -> Self {
        Self::with_code(origin.default_code(), origin, message)
    }

    /// Input failed an intrinsic constraint (400, Domain)
    pub fn domain<M: Into<String>>(message: M) -> Self {
        Self::from_origin(Origin::Domain, message)
    }

    /// A referenced entity is absent (404, Application)
    pub fn not_found<M: Into<String>>(message: M) -> Self {
        Self::from_origin(Origin::Application, message)
    }

    /// A uniqueness or concurrency rule was violated (409, Application)
    pub fn conflict<M: Into<String>>(message: M) -> Self {
        Self::with_code(409, Origin::Application, message)
    }

    /// The unit of work itself failed (500, Persistence)
    pub fn persistence<M: Into<String>>(message: M) -> Self {
        Self::from_origin(Origin::Persistence, message)
    }
}

impl fmt::Display for FailureDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}] {}", self.code, self.origin, self.message)
    }
}
