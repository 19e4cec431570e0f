//! Per-request accumulator state machine
//!
//! A [`Pipeline`] coordinates the three steps every handler performs:
//! gather validation failures from typed-value constructions, run at most
//! one asynchronous unit of work if nothing failed, and map the work's
//! product into a response shape. Each operation consumes the pipeline and
//! returns the next state, so the whole sequence is a chain of pure
//! transitions that can be tested without any request machinery.
//!
//! The pipeline has two phases. While **Collecting**, failures may grow and
//! no work has run. Once [`Pipeline::execute_if_no_failures`] actually runs
//! its work the pipeline is **Executed** (`halted`) and terminal; collection
//! alone never causes that transition.
//!
//! Copyright (c) 2025 Verdict Team
//! Licensed under the Apache-2.0 license

use crate::failure::{Checked, FailureDescriptor};
use std::future::Future;

/// The per-request accumulator of validation failures and work output
///
/// `T` is the value produced by the unit of work. For read-only checks whose
/// "work" is itself the query, the pipeline is seeded with a placeholder and
/// [`Pipeline::map_result`] maps the seed.
#[derive(Debug, Clone)]
pub struct Pipeline<T> {
    failures: Vec<FailureDescriptor>,
    halted: bool,
    value: T,
}

impl<T: Default> Pipeline<T> {
    /// Create an empty pipeline seeded with `T::default()`
    pub fn new() -> Self {
        Self::seeded(T::default())
    }
}

impl<T: Default> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pipeline<T> {
    /// Create an empty pipeline with an explicit seed value
    pub fn seeded(value: T) -> Self {
        Self {
            failures: Vec::new(),
            halted: false,
            value,
        }
    }

    /// Record the failure of one typed-value construction, if any
    ///
    /// A successful candidate leaves the pipeline untouched. Collection never
    /// halts the pipeline and never gates later collections: independent
    /// constructions each get to report their own failure. Only the
    /// membership of the failure set matters downstream; resolution applies
    /// its own priority, not arrival order.
    pub fn collect<V>(mut self, candidate: &Checked<V>) -> Self {
        if let Err(failure) = candidate {
            self.failures.push(failure.clone());
        }
        self
    }

    /// Run related collections against an isolated sub-accumulator
    ///
    /// The group's failures are concatenated into this pipeline as one batch,
    /// without deduplication. Used when several fields of one composite input
    /// must all be checked together before any of them can gate execution.
    pub fn group(mut self, build: impl FnOnce(Group) -> Group) -> Self {
        let group = build(Group::new());
        self.failures.extend(group.failures);
        self
    }

    /// Run the unit of work, unless any failure has been collected
    ///
    /// This is the only place side-effecting work may run, and the only
    /// suspension point in the pipeline. A halted pipeline is terminal:
    /// once work has run, further calls return the pipeline unchanged, so
    /// at most one unit of work ever runs per request. If any failure is
    /// pending the work is skipped entirely (short-circuit before I/O) and
    /// the pipeline stays in the Collecting phase. Otherwise the work runs
    /// exactly once and the pipeline halts: on success the produced value
    /// replaces the seed, on failure the returned descriptor is appended.
    /// A cancellation that drops the awaited future propagates as-is; it is
    /// never converted into a descriptor.
    pub async fn execute_if_no_failures<F, Fut>(mut self, work: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Checked<T>>,
    {
        if self.halted {
            log::debug!("skipping unit of work: pipeline already executed");
            return self;
        }
        if !self.failures.is_empty() {
            log::debug!(
                "skipping unit of work: {} validation failure(s) pending",
                self.failures.len()
            );
            return self;
        }
        match work().await {
            Ok(value) => self.value = value,
            Err(failure) => self.failures.push(failure),
        }
        self.halted = true;
        self
    }

    /// Terminal step: collapse the pipeline into success or failures
    ///
    /// With no failures, applies `transform` to the work's product (or to the
    /// seed when no work ever ran). Otherwise yields the full failure list,
    /// still unresolved; picking the single reported failure is the
    /// resolver's job.
    pub fn map_result<U>(self, transform: impl FnOnce(T) -> U) -> PipelineResult<U> {
        if self.failures.is_empty() {
            PipelineResult::Success(transform(self.value))
        } else {
            PipelineResult::Failures(self.failures)
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[FailureDescriptor] {
        &self.failures
    }

    /// Whether the unit of work has actually run
    pub fn is_halted(&self) -> bool {
        self.halted
    }
}

/// Isolated sub-accumulator used by [`Pipeline::group`]
#[derive(Debug, Default)]
pub struct Group {
    failures: Vec<FailureDescriptor>,
}

impl Group {
    fn new() -> Self {
        Self::default()
    }

    /// Record the failure of one typed-value construction, if any
    pub fn collect<V>(mut self, candidate: &Checked<V>) -> Self {
        if let Err(failure) = candidate {
            self.failures.push(failure.clone());
        }
        self
    }
}

/// Terminal state of a pipeline before outcome resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineResult<T> {
    /// The transformed success value
    Success(T),
    /// Every failure collected, in insertion order
    Failures(Vec<FailureDescriptor>),
}

impl<T> PipelineResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, PipelineResult::Success(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Count, StyleName};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_collect_keeps_only_failures() {
        let good = StyleName::parse("Noir");
        let bad = StyleName::parse("");
        let pipeline = Pipeline::<()>::new().collect(&good).collect(&bad);
        assert_eq!(pipeline.failures().len(), 1);
        assert!(!pipeline.is_halted());
    }

    #[test]
    fn test_collect_order_does_not_change_membership() {
        let a = Count::parse(-1);
        let b = StyleName::parse("");
        let ab = Pipeline::<()>::new().collect(&a).collect(&b);
        let ba = Pipeline::<()>::new().collect(&b).collect(&a);

        let mut ab_codes: Vec<_> = ab.failures().iter().map(|f| f.message.clone()).collect();
        let mut ba_codes: Vec<_> = ba.failures().iter().map(|f| f.message.clone()).collect();
        ab_codes.sort();
        ba_codes.sort();
        assert_eq!(ab_codes, ba_codes);
    }

    #[test]
    fn test_group_merges_as_one_batch() {
        let from = StyleName::parse("");
        let to = Count::parse(0);
        let pipeline = Pipeline::<()>::new()
            .collect(&StyleName::parse("ok"))
            .group(|g| g.collect(&from).collect(&to));
        assert_eq!(pipeline.failures().len(), 2);
        assert!(!pipeline.is_halted());
    }

    #[tokio::test]
    async fn test_execute_runs_once_and_halts() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let pipeline = Pipeline::<u32>::new()
            .execute_if_no_failures(|| async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(7)
            })
            .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(pipeline.is_halted());
        assert!(matches!(
            pipeline.map_result(|v| v),
            PipelineResult::Success(7)
        ));
    }

    #[tokio::test]
    async fn test_halted_pipeline_never_executes_again() {
        let calls = Arc::new(AtomicUsize::new(0));
        let first = calls.clone();
        let second = calls.clone();
        let pipeline = Pipeline::<u32>::new()
            .execute_if_no_failures(|| async move {
                first.fetch_add(1, Ordering::SeqCst);
                Ok(7)
            })
            .await
            .execute_if_no_failures(|| async move {
                second.fetch_add(1, Ordering::SeqCst);
                Err(FailureDescriptor::persistence("must not run"))
            })
            .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(pipeline.is_halted());
        assert!(pipeline.failures().is_empty());
        assert!(matches!(
            pipeline.map_result(|v| v),
            PipelineResult::Success(7)
        ));
    }

    #[tokio::test]
    async fn test_execute_skipped_when_failures_pending() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let bad = StyleName::parse("");
        let pipeline = Pipeline::<u32>::new()
            .collect(&bad)
            .execute_if_no_failures(|| async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(7)
            })
            .await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!pipeline.is_halted());
        assert_eq!(pipeline.failures().len(), 1);
    }

    #[tokio::test]
    async fn test_execute_failure_appends_descriptor() {
        let pipeline = Pipeline::<u32>::new()
            .execute_if_no_failures(|| async {
                Err(FailureDescriptor::persistence("connection reset"))
            })
            .await;
        assert!(pipeline.is_halted());
        assert_eq!(pipeline.failures().len(), 1);
        assert_eq!(pipeline.failures()[0].code, 500);
    }

    #[test]
    fn test_map_result_over_seed_without_execution() {
        let result = Pipeline::seeded(41).map_result(|v| v + 1);
        assert_eq!(result, PipelineResult::Success(42));
    }

    #[test]
    fn test_map_result_yields_full_failure_list() {
        let a = StyleName::parse("");
        let b = Count::parse(0);
        let result = Pipeline::<()>::new()
            .collect(&a)
            .collect(&b)
            .map_result(|_| "unused");
        match result {
            PipelineResult::Failures(failures) => assert_eq!(failures.len(), 2),
            PipelineResult::Success(_) => panic!("expected failures"),
        }
    }
}
