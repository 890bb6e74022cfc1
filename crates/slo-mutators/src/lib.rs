//! Composable rule mutators for the SLO rule-generation pipeline.
//!
//! `slo-mutators` augments the recording and alerting rule groups an SLO
//! generator produced, before they are serialized for the monitoring
//! backend. Each mutator performs one well-defined augmentation of the
//! shared [`SloRules`](slo_model::SloRules) result; the host runtime builds
//! mutators from per-mutator JSON configuration and runs them in a fixed
//! sequence via [`MutatorPipeline`].
//!
//! # Features
//!
//! - **Uniform contract**: the [`SloMutator`] trait — construct-time config
//!   validation, synchronous in-place mutation, stable id/version metadata
//! - **Error-budget-exhausted alert**: appends an alert firing when the
//!   remaining budget ratio reaches a configured threshold
//! - **Info labels**: merges user labels into the SLO info recording rule,
//!   tolerating its absence
//! - **Rule intervals**: sets every group's evaluation interval from a
//!   default-plus-overrides hierarchy
//!
//! # Example
//!
//! ```rust
//! use slo_model::{Slo, SloRules};
//! use slo_mutators::{
//!     ErrorBudgetExhaustedMutator, MutatorPipeline, Request, RuleIntervalsMutator,
//! };
//!
//! let pipeline = MutatorPipeline::new()
//!     .with(Box::new(
//!         ErrorBudgetExhaustedMutator::from_config(
//!             r#"{"alert_labels": {"severity": "critical"}}"#,
//!         )
//!         .unwrap(),
//!     ))
//!     .with(Box::new(
//!         RuleIntervalsMutator::from_config(r#"{"interval": {"default": "30s"}}"#).unwrap(),
//!     ));
//!
//! let req = Request::new(Slo::new("availability", "checkout"));
//! let mut result = SloRules::default();
//! pipeline.run(&req, &mut result).unwrap();
//!
//! assert_eq!(result.alert_rules.rules.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod error_budget;
pub mod info_labels;
pub mod interval;
pub mod intervals;
pub mod matcher;
pub mod mutator;

// Re-export main types at crate root
pub use error::{MutatorError, Result};
pub use error_budget::{ERROR_BUDGET_REMAINING_METRIC, ErrorBudgetExhaustedMutator};
pub use info_labels::{DEFAULT_INFO_RECORD, InfoLabelsMutator};
pub use interval::IntervalResolver;
pub use intervals::RuleIntervalsMutator;
pub use matcher::encode_label_matcher;
pub use mutator::{MUTATOR_VERSION, MutatorPipeline, Request, SloMutator};
