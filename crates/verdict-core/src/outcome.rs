//! Outcome resolution: collapsing collected failures into one response
//!
//! A handler declares, once, the small set of response shapes it is allowed
//! to emit. Resolution takes the pipeline's terminal state and that declared
//! set and produces exactly one canonical outcome: the success value, or the
//! single highest-priority failure — demoted to the generic 400 whenever its
//! severity falls outside what the handler declared. The demotion is a
//! containment boundary: an endpoint only ever emits the outcome vocabulary
//! it was wired up with.
//!
//! Copyright (c) 2025 Verdict Team
//! Licensed under the Apache-2.0 license

use crate::pipeline::PipelineResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One response shape an endpoint may emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeKind {
    Ok,
    Created,
    NoContent,
    BadRequest,
    NotFound,
    Conflict,
    /// Present so the resolver vocabulary covers persistence-level codes;
    /// no endpoint family declares it, so a 500 always demotes to 400.
    Internal,
}

impl OutcomeKind {
    /// Transport status carried by this kind
    pub const fn status(&self) -> u16 {
        match self {
            OutcomeKind::Ok => 200,
            OutcomeKind::Created => 201,
            OutcomeKind::NoContent => 204,
            OutcomeKind::BadRequest => 400,
            OutcomeKind::NotFound => 404,
            OutcomeKind::Conflict => 409,
            OutcomeKind::Internal => 500,
        }
    }

    /// Map a severity code back into the outcome vocabulary
    pub const fn from_status(status: u16) -> Option<Self> {
        match status {
            200 => Some(OutcomeKind::Ok),
            201 => Some(OutcomeKind::Created),
            204 => Some(OutcomeKind::NoContent),
            400 => Some(OutcomeKind::BadRequest),
            404 => Some(OutcomeKind::NotFound),
            409 => Some(OutcomeKind::Conflict),
            500 => Some(OutcomeKind::Internal),
            _ => None,
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status())
    }
}

/// The fixed set of response shapes one endpoint is permitted to emit
///
/// Declared as a constant where the handler is wired up; never mutated.
/// `BadRequest` is implicitly a member of every set — it is the universal
/// fallback for demoted failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowedOutcomes {
    kinds: &'static [OutcomeKind],
}

impl AllowedOutcomes {
    /// Read/"exists" checks: {200} plus the implicit 400
    pub const EXISTS_CHECK: Self = Self::new(&[OutcomeKind::Ok]);
    /// List/detail reads: {200, 404} plus the implicit 400
    pub const READ: Self = Self::new(&[OutcomeKind::Ok, OutcomeKind::NotFound]);
    /// Creation: {201, 409} plus the implicit 400
    pub const CREATION: Self = Self::new(&[OutcomeKind::Created, OutcomeKind::Conflict]);
    /// Update: {200, 404} plus the implicit 400
    pub const UPDATE: Self = Self::new(&[OutcomeKind::Ok, OutcomeKind::NotFound]);
    /// Deletion: {204, 404} plus the implicit 400
    pub const DELETION: Self = Self::new(&[OutcomeKind::NoContent, OutcomeKind::NotFound]);

    pub const fn new(kinds: &'static [OutcomeKind]) -> Self {
        Self { kinds }
    }

    /// Whether this endpoint may emit the given kind
    pub fn allows(&self, kind: OutcomeKind) -> bool {
        kind == OutcomeKind::BadRequest || self.kinds.contains(&kind)
    }
}

/// The single resolved result handed to the transport adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalOutcome<T> {
    Success(T),
    Failure { code: u16, message: String },
}

impl<T> CanonicalOutcome<T> {
    /// Re-apply the allowed-set constraint to an already resolved outcome
    ///
    /// A failure whose code is already allowed passes through verbatim, so
    /// constraining is idempotent.
    pub fn constrain(self, allowed: &AllowedOutcomes) -> Self {
        match self {
            CanonicalOutcome::Success(value) => CanonicalOutcome::Success(value),
            CanonicalOutcome::Failure { code, message } => {
                constrain_failure(code, message, allowed)
            }
        }
    }
}

/// Collapse a terminal pipeline state into exactly one canonical outcome
///
/// Among the collected failures the numerically highest code wins — higher
/// status is treated as higher severity, so a 500 outranks a 409 outranks a
/// 400. Ties go to the first occurrence in insertion order. The winner is
/// emitted verbatim when its code maps to a kind the endpoint declared, and
/// demoted to 400 otherwise (message preserved).
pub fn resolve<T>(result: PipelineResult<T>, allowed: &AllowedOutcomes) -> CanonicalOutcome<T> {
    match result {
        PipelineResult::Success(value) => CanonicalOutcome::Success(value),
        PipelineResult::Failures(failures) => {
            let selected = failures
                .iter()
                .reduce(|best, f| if f.code > best.code { f } else { best });
            match selected {
                Some(failure) => {
                    constrain_failure(failure.code, failure.message.clone(), allowed)
                }
                // An empty failure list cannot stand for a success; reject.
                None => CanonicalOutcome::Failure {
                    code: OutcomeKind::BadRequest.status(),
                    message: "request could not be processed".to_string(),
                },
            }
        }
    }
}

fn constrain_failure<T>(
    code: u16,
    message: String,
    allowed: &AllowedOutcomes,
) -> CanonicalOutcome<T> {
    match OutcomeKind::from_status(code) {
        Some(kind) if allowed.allows(kind) => CanonicalOutcome::Failure { code, message },
        _ => {
            log::warn!("demoting disallowed failure code {} to 400", code);
            CanonicalOutcome::Failure {
                code: OutcomeKind::BadRequest.status(),
                message,
            }
        }
    }
}
