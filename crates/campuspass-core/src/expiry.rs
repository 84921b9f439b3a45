use crate::config::ValidatorConfig;
use crate::errors::CoreError;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Outcome of a freshness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryVerdict {
    /// Within the window.
    Fresh,
    /// Older than the window.
    Expired,
    /// Issued further in the future than the skew tolerance allows.
    NotYetValid,
    /// The issuance time could not be read.
    Unreadable,
}

/// Result of [`ExpiryValidator::check_age`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpiryCheck {
    /// Whether the credential passes the freshness check.
    pub is_valid: bool,
    /// Age in hours; negative for future-dated credentials.
    pub age_hours: Option<f64>,
    /// Detailed verdict.
    pub verdict: ExpiryVerdict,
}

impl ExpiryCheck {
    fn new(verdict: ExpiryVerdict, age_hours: Option<f64>) -> Self {
        Self {
            is_valid: verdict == ExpiryVerdict::Fresh,
            age_hours,
            verdict,
        }
    }
}

/// Checks credential age against a fixed freshness window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryValidator {
    max_age_millis: i64,
    future_tolerance_millis: Option<i64>,
}

impl Default for ExpiryValidator {
    fn default() -> Self {
        Self::from_config(&ValidatorConfig::default())
    }
}

impl ExpiryValidator {
    /// Builds a validator from explicit bounds.
    pub fn new(max_age_millis: i64, future_tolerance_millis: Option<i64>) -> Self {
        Self {
            max_age_millis,
            future_tolerance_millis,
        }
    }

    /// Builds a validator from pipeline configuration.
    pub fn from_config(config: &ValidatorConfig) -> Self {
        Self::new(config.max_age_millis(), config.future_tolerance_millis())
    }

    /// Checks `now - issued_at` against the window.
    ///
    /// Expired iff the age is strictly greater than the window. Future-dated
    /// times beyond the tolerance are not yet valid.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TimestampOverflow`] when the age does not fit in `i64`.
    pub fn check_age(&self, issued_at: Option<i64>, now_millis: i64) -> Result<ExpiryCheck, CoreError> {
        let Some(issued_at) = issued_at else {
            return Ok(ExpiryCheck::new(ExpiryVerdict::Unreadable, None));
        };
        let age = now_millis
            .checked_sub(issued_at)
            .ok_or(CoreError::TimestampOverflow {
                now: now_millis,
                issued_at,
            })?;
        let age_hours = Some(age as f64 / MILLIS_PER_HOUR);

        let verdict = if age > self.max_age_millis {
            ExpiryVerdict::Expired
        } else if self
            .future_tolerance_millis
            .is_some_and(|tolerance| age < -tolerance)
        {
            ExpiryVerdict::NotYetValid
        } else {
            ExpiryVerdict::Fresh
        };
        Ok(ExpiryCheck::new(verdict, age_hours))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_760_000_000_000;
    const HOUR: i64 = 3_600_000;

    #[test]
    fn boundary_is_inclusive() {
        let validator = ExpiryValidator::default();
        let check = validator.check_age(Some(NOW - 24 * HOUR), NOW).unwrap();
        assert!(check.is_valid);
        assert_eq!(check.age_hours, Some(24.0));

        let check = validator.check_age(Some(NOW - 24 * HOUR - 1), NOW).unwrap();
        assert_eq!(check.verdict, ExpiryVerdict::Expired);
    }

    #[test]
    fn future_skew_respects_tolerance() {
        let validator = ExpiryValidator::default();
        assert!(validator.check_age(Some(NOW + 60_000), NOW).unwrap().is_valid);
        assert_eq!(
            validator.check_age(Some(NOW + HOUR), NOW).unwrap().verdict,
            ExpiryVerdict::NotYetValid
        );

        let relaxed = ExpiryValidator::new(24 * HOUR, None);
        assert!(relaxed.check_age(Some(NOW + 100 * HOUR), NOW).unwrap().is_valid);
    }

    #[test]
    fn unreadable_timestamp_fails() {
        let check = ExpiryValidator::default().check_age(None, NOW).unwrap();
        assert!(!check.is_valid);
        assert_eq!(check.verdict, ExpiryVerdict::Unreadable);
    }

    #[test]
    fn overflow_is_a_fault() {
        let result = ExpiryValidator::default().check_age(Some(i64::MIN), NOW);
        assert!(matches!(result, Err(CoreError::TimestampOverflow { .. })));
    }
}
