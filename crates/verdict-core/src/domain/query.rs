//! Marker types for parameterless queries
//!
//! Copyright (c) 2025 Verdict Team
//! Licensed under the Apache-2.0 license

/// Marker input for "list everything" queries
///
/// Stateless and immutable, so there is nothing to validate and nothing to
/// share: a fresh value is constructed wherever one is needed instead of
/// keeping a process-wide singleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct All;

impl All {
    pub const fn new() -> Self {
        All
    }
}
