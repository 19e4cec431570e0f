//! Verdict Core - validation and outcome pipeline for request handlers
//!
//! This crate provides the framework every catalog request handler uses to
//! validate raw input into typed values while collecting all violations,
//! conditionally run one unit of work, and deterministically collapse any
//! collected failures into exactly one transport-level outcome drawn from
//! the handler's declared set of allowed response shapes.
//!
//! # Main Components
//!
//! - **Typed Values**: validated wrappers whose only constructor is the
//!   validation itself (`domain` module)
//! - **Failure Descriptors**: classified, immutable failure records
//! - **Pipeline**: the per-request accumulator state machine
//! - **Outcome Resolver**: priority selection against an allowed-outcome set
//! - **Transport Adapter**: pure rendering of the canonical outcome
//!
//! # Example
//!
//! ```no_run
//! use verdict_core::domain::{Count, StyleName};
//! use verdict_core::{
//!     render, resolve, AllowedOutcomes, OperationKind, Pipeline, Rendered, Result,
//! };
//!
//! async fn create_style(raw_name: &str, raw_limit: i64) -> Result<Rendered> {
//!     const ALLOWED: AllowedOutcomes = AllowedOutcomes::CREATION;
//!
//!     let name = StyleName::parse(raw_name);
//!     let limit = Count::parse(raw_limit);
//!
//!     let pipeline = Pipeline::seeded(String::new())
//!         .collect(&name)
//!         .collect(&limit)
//!         .execute_if_no_failures(|| async move {
//!             let name = name?;
//!             let _limit = limit?;
//!             // persistence call goes here
//!             Ok(name.as_str().to_string())
//!         })
//!         .await;
//!
//!     let outcome = resolve(pipeline.map_result(|created| created), &ALLOWED);
//!     render(
//!         outcome,
//!         OperationKind::Creation {
//!             location: "/styles/1".to_string(),
//!         },
//!     )
//! }
//! ```

pub mod domain;
pub mod error;
pub mod failure;
pub mod outcome;
pub mod pipeline;
pub mod transport;

// Re-export main types for convenience
pub use error::{Error, Origin, Result};
pub use failure::{Checked, FailureDescriptor};
pub use outcome::{resolve, AllowedOutcomes, CanonicalOutcome, OutcomeKind};
pub use pipeline::{Group, Pipeline, PipelineResult};
pub use transport::{render, ErrorBody, OperationKind, Rendered};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
