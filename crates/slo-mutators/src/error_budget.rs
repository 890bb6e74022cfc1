//! Alert on a fully (or nearly) exhausted error budget.
//!
//! Adds one alert declaring that the SLO's remaining error-budget ratio has
//! reached a configured threshold. More informational than directly
//! actionable: burn-rate alerts should fire first, this one backs
//! organization-level policy around budget depletion.

use std::collections::HashMap;

use serde::Deserialize;
use slo_model::{PromDuration, Rule, SloRules};
use tracing::debug;

use crate::error::{MutatorError, Result};
use crate::matcher::encode_label_matcher;
use crate::mutator::{MUTATOR_VERSION, Request, SloMutator};

/// The recording rule holding the remaining error-budget ratio per SLO.
pub const ERROR_BUDGET_REMAINING_METRIC: &str = "slo:period_error_budget_remaining:ratio";

/// Identity labels stamped onto every generated series.
const LABEL_SLO: &str = "sloth_slo";
const LABEL_SERVICE: &str = "sloth_service";
const LABEL_ID: &str = "sloth_id";

fn default_for() -> String {
    "5m".to_string()
}

fn default_alert_name() -> String {
    "ErrorBudgetExhausted".to_string()
}

/// Configuration payload for [`ErrorBudgetExhaustedMutator`].
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Remaining-budget ratio at or below which the alert fires.
    /// Defaults to 0, fully exhausted.
    #[serde(default)]
    pub threshold: f64,
    /// How long the condition must hold before firing, as a duration
    /// string. Defaults to `"5m"`.
    #[serde(rename = "for", default = "default_for")]
    pub for_duration: String,
    /// Name of the generated alert. Defaults to `"ErrorBudgetExhausted"`.
    #[serde(default = "default_alert_name")]
    pub alert_name: String,
    /// Labels attached to the generated alert rule, and overlaid onto the
    /// series matcher. Defaults to empty.
    #[serde(default)]
    pub alert_labels: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            for_duration: default_for(),
            alert_name: default_alert_name(),
            alert_labels: HashMap::new(),
        }
    }
}

/// Appends an error-budget-exhausted alert to the alert rule group.
///
/// Always appends; it never replaces an existing alert of the same name,
/// so invoking it twice against the same result produces two rules.
#[derive(Debug, Clone)]
pub struct ErrorBudgetExhaustedMutator {
    threshold: f64,
    for_duration: PromDuration,
    alert_name: String,
    alert_labels: HashMap<String, String>,
}

impl ErrorBudgetExhaustedMutator {
    /// Globally unique mutator identifier.
    pub const ID: &'static str = "slo-mutators/error-budget-exhausted/v1";

    /// Constructs the mutator from a raw JSON configuration payload.
    ///
    /// # Errors
    ///
    /// Returns `MutatorError::InvalidConfig` on malformed JSON, a malformed
    /// `for` duration, or an empty alert name.
    pub fn from_config(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        Self::new(config)
    }

    /// Constructs the mutator from an already-decoded configuration.
    ///
    /// # Errors
    ///
    /// Returns `MutatorError::InvalidConfig` on a malformed `for` duration
    /// or an empty alert name.
    pub fn new(config: Config) -> Result<Self> {
        let for_duration: PromDuration = config.for_duration.parse()?;
        if config.alert_name.is_empty() {
            return Err(MutatorError::InvalidConfig {
                reason: "alert name cannot be empty".to_string(),
            });
        }

        Ok(Self {
            threshold: config.threshold,
            for_duration,
            alert_name: config.alert_name,
            alert_labels: config.alert_labels,
        })
    }
}

impl SloMutator for ErrorBudgetExhaustedMutator {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn version(&self) -> &'static str {
        MUTATOR_VERSION
    }

    fn process(&self, req: &Request, result: &mut SloRules) -> Result<()> {
        let slo = &req.slo;

        // Identity labels pin the matcher to this SLO's series; configured
        // labels win on key collision.
        let mut matcher_labels = HashMap::from([
            (LABEL_SLO.to_string(), slo.name.clone()),
            (LABEL_SERVICE.to_string(), slo.service.clone()),
            (LABEL_ID.to_string(), slo.id()),
        ]);
        for (k, v) in &self.alert_labels {
            matcher_labels.insert(k.clone(), v.clone());
        }

        let expr = format!(
            "{ERROR_BUDGET_REMAINING_METRIC}{{{}}} <= {}",
            encode_label_matcher(&matcher_labels),
            self.threshold,
        );

        let rule = Rule::new(self.alert_name.clone(), expr)
            .map_err(|e| MutatorError::MutationFailed {
                reason: e.to_string(),
            })?
            .with_for_duration(self.for_duration)
            .with_labels(self.alert_labels.clone())
            .with_annotation(
                "description",
                format!("Error budget exhausted for SLO: {}", slo.name),
            );

        debug!(alert = %rule.name, slo = %slo.name, "appending error budget exhausted alert");
        result.alert_rules.rules.push(rule);

        Ok(())
    }
}
