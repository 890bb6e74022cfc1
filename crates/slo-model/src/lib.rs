//! Shared data model for SLO-generated Prometheus rule groups.
//!
//! `slo-model` defines the artifact flowing through the SLO rule-augmentation
//! pipeline: the read-only [`Slo`] description, individual [`Rule`]s grouped
//! into [`RuleGroup`]s, and the three-group [`SloRules`] result that every
//! mutator reads and writes in place.
//!
//! # Features
//!
//! - **Durations**: [`PromDuration`] parses and formats the unit-suffixed
//!   textual form (`"5m"`, `"1h30m"`) used at configuration boundaries
//! - **Rule location**: [`SloRules::rule_mut`] finds a rule by group role and
//!   name, returning `None` instead of erroring when it is absent
//! - **Label merging**: [`Rule::merge_labels`] merges a label set in place
//!   with incoming-wins precedence
//!
//! # Example
//!
//! ```rust
//! use slo_model::{GroupRole, Rule, SloRules};
//! use std::collections::HashMap;
//!
//! let mut result = SloRules::default();
//! result
//!     .metadata_rec_rules
//!     .rules
//!     .push(Rule::new("sloth_slo_info", "vector(1)").unwrap());
//!
//! // Locate and enrich the info rule.
//! if let Some(rule) = result.rule_mut(GroupRole::Metadata, "sloth_slo_info") {
//!     let extra = HashMap::from([("owner".to_string(), "platform".to_string())]);
//!     rule.merge_labels(&extra);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod duration;
pub mod error;
pub mod rules;
pub mod slo;

// Re-export main types at crate root
pub use duration::PromDuration;
pub use error::{ModelError, Result};
pub use rules::{GroupRole, Rule, RuleGroup, SloRules};
pub use slo::Slo;
