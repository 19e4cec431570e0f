//! Date-valued typed values
//!
//! Copyright (c) 2025 Verdict Team
//! Licensed under the Apache-2.0 license

use crate::failure::{Checked, FailureDescriptor};
use chrono::NaiveDate;
use std::fmt;

/// An inclusive date interval with `from <= to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Validate a pair of dates into an ordered range
    pub fn parse(from: NaiveDate, to: NaiveDate) -> Checked<Self> {
        if from > to {
            return Err(FailureDescriptor::domain(format!(
                "date range start {} is after end {}",
                from, to
            )));
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn to(&self) -> NaiveDate {
        self.to
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}
