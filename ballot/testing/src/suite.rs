use {
    crate::{RecordingObserver, TestAccount},
    ballot_app::{AppResult, Engine, LedgerClock, MockClock},
    ballot_types::{
        Addr, Binary, Call, CallOutcome, Config, Duration, MemStorage, Proposal, ProposalId,
        ResultExt, Results, Timestamp, VoterRecord,
    },
    std::collections::BTreeMap,
};

/// An engine over an in-memory store, driven by a clock the test controls.
pub struct TestSuite {
    pub engine: Engine<MemStorage, MockClock, RecordingObserver>,
    clock: MockClock,
    observer: RecordingObserver,
}

impl TestSuite {
    pub fn new(
        engine: Engine<MemStorage, MockClock, RecordingObserver>,
        clock: MockClock,
        observer: RecordingObserver,
    ) -> Self {
        Self {
            engine,
            clock,
            observer,
        }
    }

    // ------------------------------------ time -----------------------------------

    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    pub fn set_time(&self, now: Timestamp) {
        self.clock.set(now);
    }

    pub fn set_time_seconds(&self, seconds: u128) {
        self.clock.set(Timestamp::from_seconds(seconds));
    }

    pub fn advance(&self, duration: Duration) {
        self.clock.advance(duration);
    }

    // ----------------------------------- calls -----------------------------------

    /// Submit a call, panicking if the engine fails to process it. Rejections
    /// are returned like any other outcome.
    pub fn call(&mut self, call: Call) -> CallOutcome {
        self.engine.do_call(call).should_succeed()
    }

    pub fn try_call(&mut self, call: Call) -> AppResult<CallOutcome> {
        self.engine.do_call(call)
    }

    pub fn enroll(&mut self, account: &TestAccount) -> CallOutcome {
        self.call(Call::enroll(account.address))
    }

    pub fn create_proposal<T>(&mut self, account: &TestAccount, title: T) -> CallOutcome
    where
        T: Into<Binary>,
    {
        self.call(Call::create_proposal(account.address, title))
    }

    pub fn cast_vote<T>(&mut self, account: &TestAccount, option: T) -> CallOutcome
    where
        T: Into<Binary>,
    {
        self.call(Call::cast_vote(account.address, option))
    }

    pub fn close_voting(&mut self, account: &TestAccount) -> CallOutcome {
        self.call(Call::close_voting(account.address))
    }

    pub fn get_results(&mut self, account: &TestAccount) -> CallOutcome {
        self.call(Call::get_results(account.address))
    }

    // ---------------------------------- queries ----------------------------------

    pub fn query_config(&self) -> AppResult<Config> {
        self.engine.query_config()
    }

    pub fn query_current_proposal_id(&self) -> AppResult<Option<ProposalId>> {
        self.engine.query_current_proposal_id()
    }

    pub fn query_proposal(&self, id: ProposalId) -> AppResult<Option<Proposal>> {
        self.engine.query_proposal(id)
    }

    /// Tally of a proposal, with labels as UTF-8 strings for easy comparison.
    pub fn query_tally(&self, id: ProposalId) -> AppResult<BTreeMap<String, u64>> {
        self.engine.query_tally(id).map(|tally| {
            tally
                .into_iter()
                .map(|(label, count)| (label.to_string_lossy(), count))
                .collect()
        })
    }

    pub fn query_voter(&self, account: Addr, id: ProposalId) -> AppResult<VoterRecord> {
        self.engine.query_voter(account, id)
    }

    pub fn query_results(&self, id: ProposalId) -> AppResult<Option<Results>> {
        self.engine.query_results(id)
    }

    /// A copy of the entire committed store, for byte-level comparisons.
    pub fn snapshot(&self) -> MemStorage {
        self.engine.db().clone()
    }

    pub fn observer(&self) -> &RecordingObserver {
        &self.observer
    }
}
