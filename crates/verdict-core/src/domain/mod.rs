//! Typed values for catalog request input
//!
//! Each type here wraps a primitive behind a fallible `parse` constructor:
//! the only way to obtain an instance is to pass the constraints fixed for
//! that kind, so holding a value proves it was validated. Construction never
//! panics; every input yields either a value or a
//! [`FailureDescriptor`](crate::FailureDescriptor) with origin `Domain` and
//! code 400.
//!
//! Copyright (c) 2025 Verdict Team
//! Licensed under the Apache-2.0 license

mod dates;
mod numeric;
mod query;
mod text;

pub use dates::DateRange;
pub use numeric::Count;
pub use query::All;
pub use text::{Keyword, StyleName, Tag};
