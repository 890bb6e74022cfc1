//! Inject user-configured labels into the SLO info recording rule.

use std::collections::HashMap;

use serde::Deserialize;
use slo_model::{GroupRole, SloRules};
use tracing::debug;

use crate::error::{MutatorError, Result};
use crate::mutator::{MUTATOR_VERSION, Request, SloMutator};

/// Record name of the SLO info series produced by the upstream generator.
pub const DEFAULT_INFO_RECORD: &str = "sloth_slo_info";

/// Configuration payload for [`InfoLabelsMutator`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Labels to merge into the target rule. Mandatory and non-empty.
    #[serde(default)]
    pub labels: HashMap<String, String>,
    /// Record name to target instead of [`DEFAULT_INFO_RECORD`].
    #[serde(default)]
    pub metric_name: Option<String>,
}

/// Merges a fixed label set into one metadata recording rule.
///
/// The target record may be absent when the user customized or disabled
/// metadata-rule generation upstream; that is a legal no-op, not an error.
/// Re-running the mutator leaves the result unchanged.
#[derive(Debug, Clone)]
pub struct InfoLabelsMutator {
    labels: HashMap<String, String>,
    metric_name: String,
}

impl InfoLabelsMutator {
    /// Globally unique mutator identifier.
    pub const ID: &'static str = "slo-mutators/info-labels/v1";

    /// Constructs the mutator from a raw JSON configuration payload.
    ///
    /// # Errors
    ///
    /// Returns `MutatorError::InvalidConfig` on malformed JSON or an
    /// empty/absent label set.
    pub fn from_config(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        Self::new(config)
    }

    /// Constructs the mutator from an already-decoded configuration.
    ///
    /// # Errors
    ///
    /// Returns `MutatorError::InvalidConfig` if the label set is empty.
    pub fn new(config: Config) -> Result<Self> {
        if config.labels.is_empty() {
            return Err(MutatorError::InvalidConfig {
                reason: "labels are required".to_string(),
            });
        }

        Ok(Self {
            labels: config.labels,
            metric_name: config
                .metric_name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| DEFAULT_INFO_RECORD.to_string()),
        })
    }
}

impl SloMutator for InfoLabelsMutator {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn version(&self) -> &'static str {
        MUTATOR_VERSION
    }

    fn process(&self, req: &Request, result: &mut SloRules) -> Result<()> {
        match result.rule_mut(GroupRole::Metadata, &self.metric_name) {
            Some(rule) => {
                rule.merge_labels(&self.labels);
                debug!(
                    record = %self.metric_name,
                    slo = %req.slo.name,
                    count = self.labels.len(),
                    "merged info labels"
                );
            }
            None => {
                // Legal no-op: the upstream generator may not have produced
                // the target record.
                debug!(record = %self.metric_name, slo = %req.slo.name, "info record not found");
            }
        }
        Ok(())
    }
}
