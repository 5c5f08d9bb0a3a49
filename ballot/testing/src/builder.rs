use {
    crate::{setup_tracing_subscriber, RecordingObserver, TestAccount, TestAccounts, TestSuite},
    ballot_app::{Engine, MockClock, TraceOption},
    ballot_types::{Config, Duration, MemStorage, ResultExt, Timestamp, VoteScope},
    tracing::Level,
};

const DEFAULT_TRACING_LEVEL: Level = Level::INFO;

pub struct TestBuilder {
    tracing_level: Option<Level>,
    trace_opt: TraceOption,
    genesis_time: Option<Timestamp>,
    config: Config,
    accounts: TestAccounts,
}

// Clippy incorrectly thinks we can derive `Default` here, which we can't.
#[allow(clippy::new_without_default)]
impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tracing_level: Some(DEFAULT_TRACING_LEVEL),
            trace_opt: TraceOption::LOUD,
            genesis_time: None,
            config: Config::default(),
            accounts: TestAccounts::default(),
        }
    }

    // Setting this to `None` means no tracing.
    pub fn set_tracing_level(mut self, level: Option<Level>) -> Self {
        self.tracing_level = level;
        self
    }

    pub fn set_trace_option(mut self, trace_opt: TraceOption) -> Self {
        self.trace_opt = trace_opt;
        self
    }

    pub fn set_genesis_time(mut self, genesis_time: Timestamp) -> Self {
        self.genesis_time = Some(genesis_time);
        self
    }

    pub fn set_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn set_voting_period(mut self, voting_period: Duration) -> Self {
        self.config.voting_period = voting_period;
        self
    }

    pub fn set_min_votes(mut self, min_votes: u64) -> Self {
        self.config.min_votes = min_votes;
        self
    }

    pub fn set_max_options(mut self, max_options: u32) -> Self {
        self.config.max_options = max_options;
        self
    }

    pub fn set_vote_scope(mut self, vote_scope: VoteScope) -> Self {
        self.config.vote_scope = vote_scope;
        self
    }

    /// Add an account. It is not enrolled; tests do that explicitly.
    pub fn add_account(mut self, name: &str) -> Self {
        self.accounts.insert(TestAccount::new(name));
        self
    }

    pub fn build(self) -> (TestSuite, TestAccounts) {
        if let Some(level) = self.tracing_level {
            setup_tracing_subscriber(level);
        }

        let clock = MockClock::new(self.genesis_time.unwrap_or(Timestamp::ZERO));
        let observer = RecordingObserver::new();

        let mut engine = Engine::new(MemStorage::new(), clock.clone(), observer.clone())
            .with_trace_option(self.trace_opt);

        engine.do_init(self.config).should_succeed();

        (TestSuite::new(engine, clock, observer), self.accounts)
    }
}
