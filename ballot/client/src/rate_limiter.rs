use {
    crate::{RateLimit, RateLimitConfig},
    ballot_types::{Addr, Timestamp},
    serde::{Deserialize, Serialize},
    std::collections::{BTreeMap, BTreeSet, VecDeque},
    strum_macros::{Display, EnumString},
};

/// The kinds of action the submitter limits.
#[derive(
    Serialize, Deserialize, EnumString, Display, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    Vote,
    Proposal,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimiterStats {
    /// Number of distinct accounts with at least one recorded action.
    pub tracked_accounts: usize,
    /// Number of recorded actions, across all accounts.
    pub tracked_actions: usize,
    pub limits_configured: usize,
    /// Number of (account, action) pairs being tracked.
    pub active_keys: usize,
}

/// A per (account, action) sliding window limiter.
///
/// Time is passed in by the caller, so that the limiter follows the ledger
/// clock rather than the wall clock. An action recorded at `t` counts against
/// the limit up to and including `t + window`.
#[derive(Debug, Clone, Default)]
pub struct RateLimiter {
    cfg: RateLimitConfig,
    history: BTreeMap<(Addr, Action), VecDeque<Timestamp>>,
}

impl RateLimiter {
    pub fn new(cfg: RateLimitConfig) -> Self {
        Self {
            cfg,
            history: BTreeMap::new(),
        }
    }

    fn limit(&self, action: Action) -> RateLimit {
        match action {
            Action::Vote => self.cfg.vote,
            Action::Proposal => self.cfg.proposal,
        }
    }

    /// Drop the recorded actions that have left the window.
    fn prune(&mut self, account: Addr, action: Action, now: Timestamp) {
        let limit = self.limit(action);

        // Before one full window has passed since time zero, nothing expires.
        let Ok(cutoff) = now.checked_sub(limit.window) else {
            return;
        };

        if let Some(times) = self.history.get_mut(&(account, action)) {
            // An entry exactly one window old still counts.
            while times.front().is_some_and(|t| *t < cutoff) {
                times.pop_front();
            }

            if times.is_empty() {
                self.history.remove(&(account, action));
            }
        }
    }

    fn count(&self, account: Addr, action: Action) -> usize {
        self.history
            .get(&(account, action))
            .map_or(0, |times| times.len())
    }

    /// Whether the account may take the action at `now`. If so, the action is
    /// recorded.
    pub fn is_allowed(&mut self, account: Addr, action: Action, now: Timestamp) -> bool {
        self.prune(account, action, now);

        let limit = self.limit(action);
        if self.count(account, action) >= limit.count {
            tracing::warn!(
                account = account.to_string(),
                %action,
                "Rate limit exceeded"
            );

            return false;
        }

        self.history.entry((account, action)).or_default().push_back(now);

        tracing::debug!(
            account = account.to_string(),
            %action,
            used = self.count(account, action),
            max = limit.count,
            "Rate limit check passed"
        );

        true
    }

    /// How many more times the account may take the action before the limit
    /// is reached.
    pub fn remaining(&mut self, account: Addr, action: Action, now: Timestamp) -> usize {
        self.prune(account, action, now);

        self.limit(action)
            .count
            .saturating_sub(self.count(account, action))
    }

    /// When the oldest recorded action reaches the edge of the window. The
    /// limit frees up right after this instant. `now` if nothing is recorded.
    pub fn reset_time(&self, account: Addr, action: Action, now: Timestamp) -> Timestamp {
        self.history
            .get(&(account, action))
            .and_then(|times| times.front())
            .map_or(now, |oldest| *oldest + self.limit(action).window)
    }

    /// Forget everything recorded for the account.
    pub fn clear_account(&mut self, account: Addr) {
        self.history.retain(|(addr, _), _| *addr != account);

        tracing::info!(account = account.to_string(), "Cleared rate limits");
    }

    pub fn stats(&self) -> RateLimiterStats {
        RateLimiterStats {
            tracked_accounts: self
                .history
                .keys()
                .map(|(account, _)| account)
                .collect::<BTreeSet<_>>()
                .len(),
            tracked_actions: self.history.values().map(VecDeque::len).sum(),
            limits_configured: 2,
            active_keys: self.history.len(),
        }
    }
}

// ----------------------------------- tests -----------------------------------
