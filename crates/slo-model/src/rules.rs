//! Rule, rule-group, and shared-result types.
//!
//! This module provides the artifact the mutation pipeline operates on:
//! - [`Rule`]: a single recording or alerting rule
//! - [`RuleGroup`]: an ordered collection of rules sharing an evaluation interval
//! - [`GroupRole`]: the fixed role a group plays inside the result
//! - [`SloRules`]: the three-group result shared across mutators

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::duration::PromDuration;
use crate::error::{ModelError, Result};

/// A single recording or alerting rule.
///
/// `name` is the record name for recording rules and the alert name for
/// alerting rules. `for_duration` only carries meaning on alerting rules:
/// the expression must hold continuously for that long before firing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Record or alert name. Never empty.
    pub name: String,
    /// The query-language expression the rule evaluates.
    pub expr: String,
    /// How long the expression must hold before an alert fires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub for_duration: Option<PromDuration>,
    /// Labels attached to the produced series or alert.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    /// Annotations providing human-readable context.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub annotations: HashMap<String, String>,
}

impl Rule {
    /// Creates a new rule.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidRule` if the name is empty.
    pub fn new(name: impl Into<String>, expr: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(ModelError::InvalidRule {
                reason: "rule name cannot be empty".to_string(),
            });
        }

        Ok(Self {
            name,
            expr: expr.into(),
            for_duration: None,
            labels: HashMap::new(),
            annotations: HashMap::new(),
        })
    }

    /// Sets the for-duration.
    #[must_use]
    pub const fn with_for_duration(mut self, d: PromDuration) -> Self {
        self.for_duration = Some(d);
        self
    }

    /// Adds a label.
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Replaces the label set.
    #[must_use]
    pub fn with_labels(mut self, labels: HashMap<String, String>) -> Self {
        self.labels = labels;
        self
    }

    /// Adds an annotation.
    #[must_use]
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }

    /// Merges `incoming` into this rule's labels in place.
    ///
    /// A key present in both takes the incoming value; keys present only in
    /// the existing set are preserved. Merging the same set twice produces
    /// the same end state as merging it once.
    pub fn merge_labels(&mut self, incoming: &HashMap<String, String>) {
        for (k, v) in incoming {
            self.labels.insert(k.clone(), v.clone());
        }
    }
}

/// The fixed role a rule group plays inside [`SloRules`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupRole {
    /// Recording rules computing the SLI error ratio at multiple windows.
    SliError,
    /// Recording rules carrying SLO metadata (objective, info series).
    Metadata,
    /// Alerting rules derived from the SLO.
    Alert,
}

impl GroupRole {
    /// All three roles, in result order.
    pub const ALL: [Self; 3] = [Self::SliError, Self::Metadata, Self::Alert];

    /// Returns the role as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SliError => "sli_error",
            Self::Metadata => "metadata",
            Self::Alert => "alert",
        }
    }
}

impl std::fmt::Display for GroupRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named collection of rules sharing an evaluation interval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleGroup {
    /// Group name as emitted to the monitoring backend.
    #[serde(default)]
    pub name: String,
    /// Evaluation interval; `None` means the engine-wide default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<PromDuration>,
    /// The rules in display order. Order does not affect mutation.
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl RuleGroup {
    /// Creates an empty group with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            interval: None,
            rules: Vec::new(),
        }
    }

    /// Finds a rule by record/alert name, mutably.
    pub fn rule_mut(&mut self, name: &str) -> Option<&mut Rule> {
        self.rules.iter_mut().find(|r| r.name == name)
    }

    /// Finds a rule by record/alert name.
    #[must_use]
    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name == name)
    }
}

/// The shared mutable result every mutator in the pipeline operates on.
///
/// Holds exactly three fixed-role groups. Any group may be empty; absence of
/// an expected rule is a legal state that mutators treat as a no-op, never
/// an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SloRules {
    /// SLI-error recording rules.
    #[serde(default)]
    pub sli_error_rec_rules: RuleGroup,
    /// Metadata recording rules.
    #[serde(default)]
    pub metadata_rec_rules: RuleGroup,
    /// Alerting rules.
    #[serde(default)]
    pub alert_rules: RuleGroup,
}

impl SloRules {
    /// Returns the group with the given role.
    #[must_use]
    pub const fn group(&self, role: GroupRole) -> &RuleGroup {
        match role {
            GroupRole::SliError => &self.sli_error_rec_rules,
            GroupRole::Metadata => &self.metadata_rec_rules,
            GroupRole::Alert => &self.alert_rules,
        }
    }

    /// Returns the group with the given role, mutably.
    pub const fn group_mut(&mut self, role: GroupRole) -> &mut RuleGroup {
        match role {
            GroupRole::SliError => &mut self.sli_error_rec_rules,
            GroupRole::Metadata => &mut self.metadata_rec_rules,
            GroupRole::Alert => &mut self.alert_rules,
        }
    }

    /// Locates a rule by group role and record/alert name, mutably.
    ///
    /// Returns `None` when the rule is absent; callers decide whether
    /// absence is acceptable.
    pub fn rule_mut(&mut self, role: GroupRole, name: &str) -> Option<&mut Rule> {
        self.group_mut(role).rule_mut(name)
    }
}
