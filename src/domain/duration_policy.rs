//! Expiry policies a caller may request for a new mapping.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const HOUR: Duration = Duration::from_secs(60 * 60);
const DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Returned when a duration token is not one of the recognized policies.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown duration: {0}")]
pub struct UnrecognizedPolicy(pub String);

/// Lifetime policy for a short link.
///
/// The set is closed: only `single`, `day` and `hour` are accepted.
///
/// | Token    | TTL   | Single use |
/// |----------|-------|------------|
/// | `single` | none  | yes        |
/// | `day`    | 24h   | no         |
/// | `hour`   | 1h    | no         |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationPolicy {
    Single,
    Day,
    Hour,
}

impl DurationPolicy {
    /// Store TTL for the policy. `None` means the entry never expires on its own.
    pub fn ttl(self) -> Option<Duration> {
        match self {
            Self::Single => None,
            Self::Day => Some(DAY),
            Self::Hour => Some(HOUR),
        }
    }

    /// Whether the mapping is deleted after its first resolution.
    pub fn single_use(self) -> bool {
        matches!(self, Self::Single)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

impl FromStr for DurationPolicy {
    type Err = UnrecognizedPolicy;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "single" => Ok(Self::Single),
            "day" => Ok(Self::Day),
            "hour" => Ok(Self::Hour),
            other => Err(UnrecognizedPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for DurationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_has_no_ttl_and_is_single_use() {
        let policy: DurationPolicy = "single".parse().unwrap();
        assert_eq!(policy, DurationPolicy::Single);
        assert_eq!(policy.ttl(), None);
        assert!(policy.single_use());
    }

    #[test]
    fn test_day_is_twenty_four_hours() {
        let policy: DurationPolicy = "day".parse().unwrap();
        assert_eq!(policy.ttl(), Some(Duration::from_secs(86_400)));
        assert!(!policy.single_use());
    }

    #[test]
    fn test_hour_is_one_hour() {
        let policy: DurationPolicy = "hour".parse().unwrap();
        assert_eq!(policy.ttl(), Some(Duration::from_secs(3_600)));
        assert!(!policy.single_use());
    }

    #[test]
    fn test_unrecognized_tokens_are_rejected() {
        for token in ["", "week", "Hour", "DAY", " single", "minute"] {
            let result = token.parse::<DurationPolicy>();
            assert_eq!(result, Err(UnrecognizedPolicy(token.to_string())));
        }
    }

    #[test]
    fn test_error_message_names_token() {
        let err = "forever".parse::<DurationPolicy>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown duration: forever");
    }

    #[test]
    fn test_display_matches_token() {
        for policy in [
            DurationPolicy::Single,
            DurationPolicy::Day,
            DurationPolicy::Hour,
        ] {
            assert_eq!(policy.to_string().parse::<DurationPolicy>(), Ok(policy));
        }
    }
}
