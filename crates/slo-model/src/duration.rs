//! Prometheus-style textual durations.
//!
//! Configuration boundaries exchange durations in the unit-suffixed textual
//! form Prometheus uses (`"5m"`, `"1h30m"`, `"90s"`). Internally they are
//! plain [`std::time::Duration`] values wrapped in [`PromDuration`], which
//! provides the parse/format round-trip and serde support.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ModelError, Result};

/// Component units in strictly descending order, as milliseconds.
const UNITS: &[(&str, u64)] = &[
    ("y", 1000 * 60 * 60 * 24 * 365),
    ("w", 1000 * 60 * 60 * 24 * 7),
    ("d", 1000 * 60 * 60 * 24),
    ("h", 1000 * 60 * 60),
    ("m", 1000 * 60),
    ("s", 1000),
    ("ms", 1),
];

static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^(?:([0-9]+)y)?(?:([0-9]+)w)?(?:([0-9]+)d)?(?:([0-9]+)h)?(?:([0-9]+)m)?(?:([0-9]+)s)?(?:([0-9]+)ms)?$")
        .expect("duration pattern is valid")
});

/// A duration encoded as a unit-suffixed string at the boundary
/// (`"5m"`, `"1h30m"`) and as a structured value internally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PromDuration(Duration);

impl PromDuration {
    /// The zero duration.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Creates a duration from whole seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    /// Creates a duration from whole milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Returns the wrapped [`Duration`].
    #[must_use]
    pub const fn as_duration(&self) -> Duration {
        self.0
    }

    /// Returns true if this is the zero duration.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Duration> for PromDuration {
    fn from(d: Duration) -> Self {
        Self(d)
    }
}

impl From<PromDuration> for Duration {
    fn from(d: PromDuration) -> Self {
        d.0
    }
}

impl FromStr for PromDuration {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "0" {
            return Ok(Self::ZERO);
        }
        if s.is_empty() {
            return Err(ModelError::InvalidDuration {
                reason: "empty duration string".to_string(),
            });
        }
        let caps = DURATION_RE.captures(s).ok_or_else(|| {
            ModelError::InvalidDuration {
                reason: format!("not a valid duration string: {s:?}"),
            }
        })?;

        let mut millis: u64 = 0;
        for (i, (unit, scale)) in UNITS.iter().enumerate() {
            let Some(m) = caps.get(i + 1) else { continue };
            let n: u64 = m.as_str().parse().map_err(|_| ModelError::InvalidDuration {
                reason: format!("component {}{unit} out of range", m.as_str()),
            })?;
            millis = n
                .checked_mul(*scale)
                .and_then(|v| millis.checked_add(v))
                .ok_or_else(|| ModelError::InvalidDuration {
                    reason: format!("duration overflows: {s:?}"),
                })?;
        }
        Ok(Self(Duration::from_millis(millis)))
    }
}

impl fmt::Display for PromDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut millis =
            u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX);
        if millis == 0 {
            return write!(f, "0s");
        }
        for (unit, scale) in UNITS {
            let n = millis / scale;
            if n > 0 {
                write!(f, "{n}{unit}")?;
                millis -= n * scale;
            }
        }
        Ok(())
    }
}

impl Serialize for PromDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PromDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
