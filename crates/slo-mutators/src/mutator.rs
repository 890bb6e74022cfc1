//! The mutator contract and the sequential pipeline.
//!
//! A mutator is the unit of composition in the rule-augmentation pipeline:
//! it reads the SLO description and performs one well-defined augmentation
//! of the shared [`SloRules`] result. Mutators never communicate directly;
//! all coordination happens through the result's named groups and rules.

use std::fmt;

use slo_model::{Slo, SloRules};
use tracing::debug;

use crate::error::Result;

/// Version tag shared by the built-in mutators.
pub const MUTATOR_VERSION: &str = "prometheus/slo/v1";

/// The per-invocation input handed to every mutator.
///
/// Read-only for the duration of the call; the same request is passed to
/// each mutator in the sequence.
#[derive(Debug, Clone, Default)]
pub struct Request {
    /// The SLO whose rules are being augmented.
    pub slo: Slo,
}

impl Request {
    /// Creates a request for the given SLO.
    #[must_use]
    pub const fn new(slo: Slo) -> Self {
        Self { slo }
    }
}

/// A single rule augmentation applied to the shared result.
///
/// Implementations are constructed from their own validated configuration
/// and must not fail at invocation time for configuration reasons: all
/// config validation happens at construction. Invocations are synchronous;
/// the host runtime serializes calls per SLO, and implementations hold no
/// per-SLO state so one instance is safe to reuse across SLOs.
///
/// Partial mutation is never rolled back on error, so each write an
/// implementation performs must be individually safe to have taken effect.
pub trait SloMutator: Send + Sync + fmt::Debug {
    /// Globally unique identifier, used by the host runtime for
    /// configuration binding and diagnostics. Format is opaque.
    fn id(&self) -> &'static str;

    /// Stable version tag of the mutator contract this implements.
    fn version(&self) -> &'static str;

    /// Applies this mutator's augmentation to `result`.
    fn process(&self, req: &Request, result: &mut SloRules) -> Result<()>;
}

/// An ordered sequence of mutators applied to one result.
///
/// The pipeline owns no SLO state; the host runtime may reuse it across
/// SLOs but must serialize calls touching the same [`SloRules`].
#[derive(Debug, Default)]
pub struct MutatorPipeline {
    mutators: Vec<Box<dyn SloMutator>>,
}

impl MutatorPipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a mutator to the end of the sequence.
    pub fn push(&mut self, mutator: Box<dyn SloMutator>) {
        self.mutators.push(mutator);
    }

    /// Appends a mutator, builder style.
    #[must_use]
    pub fn with(mut self, mutator: Box<dyn SloMutator>) -> Self {
        self.push(mutator);
        self
    }

    /// Number of mutators in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mutators.len()
    }

    /// Returns true if the pipeline holds no mutators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mutators.is_empty()
    }

    /// Runs every mutator once, in order, against the same result.
    ///
    /// Stops at the first error and propagates it; mutations already
    /// applied by earlier mutators remain in place.
    pub fn run(&self, req: &Request, result: &mut SloRules) -> Result<()> {
        for mutator in &self.mutators {
            debug!(
                mutator = mutator.id(),
                version = mutator.version(),
                slo = %req.slo.name,
                service = %req.slo.service,
                "running mutator"
            );
            mutator.process(req, result)?;
        }
        Ok(())
    }
}
