use {
    ballot_types::Duration,
    serde::{Deserialize, Serialize},
};

/// Constraints checked before a call is submitted. The engine itself accepts
/// any title and any option label.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum title length, in characters.
    pub max_title_len: usize,
    pub forbidden_chars: String,
    /// Option labels participants may vote for. Matched case-insensitively.
    pub options: Vec<String>,
    pub min_voting_period: Duration,
    pub max_voting_period: Duration,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_len: 200,
            forbidden_chars: "<>{}&;".to_string(),
            options: vec!["yes".to_string(), "no".to_string(), "abstain".to_string()],
            min_voting_period: Duration::from_hours(1),
            max_voting_period: Duration::from_days(7),
        }
    }
}

/// At most `count` actions in any window of length `window`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub count: usize,
    pub window: Duration,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct RateLimitConfig {
    pub vote: RateLimit,
    pub proposal: RateLimit,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            vote: RateLimit {
                count: 1,
                window: Duration::from_hours(1),
            },
            proposal: RateLimit {
                count: 3,
                window: Duration::from_days(1),
            },
        }
    }
}
