//! Set evaluation intervals on all three rule groups.

use serde::Deserialize;
use slo_model::{GroupRole, PromDuration, SloRules};
use tracing::debug;

use crate::error::{MutatorError, Result};
use crate::interval::IntervalResolver;
use crate::mutator::{MUTATOR_VERSION, Request, SloMutator};

/// The `interval` block of the configuration payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInterval {
    /// Interval applied to any group without an override. Mandatory.
    #[serde(default)]
    pub default: Option<PromDuration>,
    /// Override for the SLI-error recording group.
    #[serde(default)]
    pub sli_error: Option<PromDuration>,
    /// Override for the metadata recording group.
    #[serde(default)]
    pub metadata: Option<PromDuration>,
    /// Override for the alert group.
    #[serde(default)]
    pub alert: Option<PromDuration>,
}

/// Configuration payload for [`RuleIntervalsMutator`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// The interval hierarchy.
    #[serde(default)]
    pub interval: ConfigInterval,
}

/// Overwrites the evaluation interval of every rule group, resolving each
/// from the configured hierarchy. Idempotent.
#[derive(Debug, Clone)]
pub struct RuleIntervalsMutator {
    resolver: IntervalResolver,
}

impl RuleIntervalsMutator {
    /// Globally unique mutator identifier.
    pub const ID: &'static str = "slo-mutators/rule-intervals/v1";

    /// Constructs the mutator from a raw JSON configuration payload.
    ///
    /// # Errors
    ///
    /// Returns `MutatorError::InvalidConfig` on malformed JSON, a malformed
    /// duration string, or a missing/zero default interval.
    pub fn from_config(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        Self::new(config)
    }

    /// Constructs the mutator from an already-decoded configuration.
    ///
    /// # Errors
    ///
    /// Returns `MutatorError::InvalidConfig` if the default interval is
    /// missing or zero.
    pub fn new(config: Config) -> Result<Self> {
        let default = config.interval.default.ok_or_else(|| {
            MutatorError::InvalidConfig {
                reason: "at least default interval is required".to_string(),
            }
        })?;

        let resolver = IntervalResolver::new(default)?
            .with_override(GroupRole::SliError, config.interval.sli_error)
            .with_override(GroupRole::Metadata, config.interval.metadata)
            .with_override(GroupRole::Alert, config.interval.alert);

        Ok(Self { resolver })
    }
}

impl SloMutator for RuleIntervalsMutator {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn version(&self) -> &'static str {
        MUTATOR_VERSION
    }

    fn process(&self, req: &Request, result: &mut SloRules) -> Result<()> {
        for role in GroupRole::ALL {
            let interval = self.resolver.resolve(role);
            debug!(group = %role, interval = %interval, slo = %req.slo.name, "setting interval");
            result.group_mut(role).interval = Some(interval);
        }
        Ok(())
    }
}
