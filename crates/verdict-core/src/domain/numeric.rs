//! Numeric typed values
//!
//! Copyright (c) 2025 Verdict Team
//! Licensed under the Apache-2.0 license

use crate::failure::{Checked, FailureDescriptor};
use std::fmt;

/// Upper bound on any requested count
const COUNT_MAX: i64 = 10_000;

/// A strictly positive, bounded count (page sizes, version numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Count(u32);

impl Count {
    /// Validate a raw integer into a count
    pub fn parse(raw: i64) -> Checked<Self> {
        if raw <= 0 {
            return Err(FailureDescriptor::domain(format!(
                "count must be positive, got {}",
                raw
            )));
        }
        if raw > COUNT_MAX {
            return Err(FailureDescriptor::domain(format!(
                "count must be at most {}, got {}",
                COUNT_MAX, raw
            )));
        }
        Ok(Self(raw as u32))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
