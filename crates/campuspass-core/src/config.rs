use serde::{Deserialize, Serialize};

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Tunables for the validation pipeline.
///
/// The defaults apply a 24 hour freshness window, reject timestamps more than
/// five minutes in the future, and leave the expected-event check optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ValidatorConfig {
    /// Maximum credential age in hours.
    pub max_age_hours: u32,
    /// How far ahead of the clock an issuance time may be; `None` accepts any.
    pub future_skew_tolerance_secs: Option<u64>,
    /// Reject campus-aware codes scanned without an expected event.
    pub require_event_ref: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_age_hours: 24,
            future_skew_tolerance_secs: Some(300),
            require_event_ref: false,
        }
    }
}

impl ValidatorConfig {
    /// Parses a configuration from JSON; missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Freshness window in milliseconds.
    pub fn max_age_millis(&self) -> i64 {
        i64::from(self.max_age_hours) * MILLIS_PER_HOUR
    }

    /// Future skew tolerance in milliseconds, saturating at `i64::MAX`.
    pub fn future_tolerance_millis(&self) -> Option<i64> {
        self.future_skew_tolerance_secs
            .map(|secs| i64::try_from(secs.saturating_mul(1000)).unwrap_or(i64::MAX))
    }
}
