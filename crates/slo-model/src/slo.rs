//! The canonical SLO description handed to the pipeline.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A Service-Level Objective as produced by the upstream definition parser.
///
/// Read-only for the duration of a pipeline run; mutators receive it by
/// shared reference and never modify it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slo {
    /// The SLO name, unique within its service.
    pub name: String,
    /// The service that owns this SLO.
    pub service: String,
    /// User-supplied metadata labels attached to the SLO definition.
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

impl Slo {
    /// Creates a new SLO description.
    #[must_use]
    pub fn new(name: impl Into<String>, service: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            service: service.into(),
            labels: HashMap::new(),
        }
    }

    /// Adds a metadata label.
    #[must_use]
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Returns the composite `{service}-{name}` identifier used to match
    /// generated series back to this SLO.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}-{}", self.service, self.name)
    }
}
