//! Evaluation-interval resolution with per-group fallbacks.

use slo_model::{GroupRole, PromDuration};

use crate::error::{MutatorError, Result};

/// Resolves an effective evaluation interval per rule group from a
/// three-level fallback chain: explicit per-group override, else the
/// overall default.
///
/// The overall default is mandatory and validated at construction; a
/// per-group override that is present but zero counts as unset, matching
/// the textual-config convention where omitted fields decode to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalResolver {
    default: PromDuration,
    sli_error: Option<PromDuration>,
    metadata: Option<PromDuration>,
    alert: Option<PromDuration>,
}

impl IntervalResolver {
    /// Creates a resolver with the mandatory overall default.
    ///
    /// # Errors
    ///
    /// Returns `MutatorError::InvalidConfig` if the default is zero.
    pub fn new(default: PromDuration) -> Result<Self> {
        if default.is_zero() {
            return Err(MutatorError::InvalidConfig {
                reason: "at least default interval is required".to_string(),
            });
        }

        Ok(Self {
            default,
            sli_error: None,
            metadata: None,
            alert: None,
        })
    }

    /// Sets the override for one group. A zero override counts as unset.
    #[must_use]
    pub fn with_override(mut self, role: GroupRole, interval: Option<PromDuration>) -> Self {
        let interval = interval.filter(|d| !d.is_zero());
        match role {
            GroupRole::SliError => self.sli_error = interval,
            GroupRole::Metadata => self.metadata = interval,
            GroupRole::Alert => self.alert = interval,
        }
        self
    }

    /// Returns the effective interval for the given group.
    #[must_use]
    pub const fn resolve(&self, role: GroupRole) -> PromDuration {
        let overridden = match role {
            GroupRole::SliError => self.sli_error,
            GroupRole::Metadata => self.metadata,
            GroupRole::Alert => self.alert,
        };
        match overridden {
            Some(interval) => interval,
            None => self.default,
        }
    }
}
