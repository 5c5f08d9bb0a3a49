use {
    crate::Duration,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// How long a proposal accepts votes, unless configured otherwise.
pub const DEFAULT_VOTING_PERIOD: Duration = Duration::from_hours(24);

/// Total votes a proposal needs before its result counts as having quorum.
pub const DEFAULT_MIN_VOTES: u64 = 10;

/// Bound on the number of distinct option labels one proposal can tally.
pub const DEFAULT_MAX_OPTIONS: u32 = 32;

/// What "has voted" means for an account.
#[derive(
    Serialize, Deserialize, BorshSerialize, BorshDeserialize, Default, Debug, Clone, Copy, PartialEq, Eq,
)]
#[serde(rename_all = "snake_case")]
#[borsh(use_discriminant = true)]
pub enum VoteScope {
    /// An account may vote once in each proposal.
    #[default]
    PerProposal = 0,
    /// An account may vote once, ever. Having voted in a closed proposal
    /// blocks voting in every later one.
    Lifetime = 1,
}

/// Engine parameters, saved once at initialization.
#[derive(Serialize, Deserialize, BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub voting_period: Duration,
    pub min_votes: u64,
    pub max_options: u32,
    pub vote_scope: VoteScope,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            voting_period: DEFAULT_VOTING_PERIOD,
            min_votes: DEFAULT_MIN_VOTES,
            max_options: DEFAULT_MAX_OPTIONS,
            vote_scope: VoteScope::default(),
        }
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use crate::{Config, Duration, JsonDeExt, VoteScope};

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: Config = r#"{"max_options":2,"vote_scope":"lifetime"}"#
            .as_bytes()
            .deserialize_json()
            .unwrap();

        assert_eq!(cfg, Config {
            max_options: 2,
            vote_scope: VoteScope::Lifetime,
            ..Default::default()
        });
        assert_eq!(cfg.voting_period, Duration::from_seconds(86_400));
    }
}
