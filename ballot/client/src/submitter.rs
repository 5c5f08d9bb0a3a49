use {
    crate::{Action, ClientError, ClientResult, InputValidator, RateLimiter},
    ballot_app::{Engine, LedgerClock, Observer},
    ballot_types::{Addr, Call, CallOutcome, Storage},
};

/// The off-chain entry point for participants.
///
/// Every call goes through the same steps: validate the input, check the
/// rate limit, build the call, submit it to the engine. Input that fails
/// validation doesn't count against the rate limit.
pub struct Submitter<DB, CL, OB> {
    engine: Engine<DB, CL, OB>,
    validator: InputValidator,
    limiter: RateLimiter,
}

impl<DB, CL, OB> Submitter<DB, CL, OB> {
    pub fn new(engine: Engine<DB, CL, OB>, validator: InputValidator, limiter: RateLimiter) -> Self {
        Self {
            engine,
            validator,
            limiter,
        }
    }

    pub fn engine(&self) -> &Engine<DB, CL, OB> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine<DB, CL, OB> {
        &mut self.engine
    }

    pub fn validator(&self) -> &InputValidator {
        &self.validator
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub fn limiter_mut(&mut self) -> &mut RateLimiter {
        &mut self.limiter
    }

    pub fn into_engine(self) -> Engine<DB, CL, OB> {
        self.engine
    }
}

impl<DB, CL, OB> Submitter<DB, CL, OB>
where
    DB: Storage,
    CL: LedgerClock,
    OB: Observer,
{
    fn check_rate_limit(&mut self, account: Addr, action: Action) -> ClientResult<()> {
        let now = self.engine.clock().now();

        if !self.limiter.is_allowed(account, action, now) {
            return Err(ClientError::RateLimited {
                account,
                action,
                reset_at: self.limiter.reset_time(account, action, now),
            });
        }

        Ok(())
    }

    fn submit(&mut self, call: Call) -> ClientResult<CallOutcome> {
        Ok(self.engine.do_call(call)?)
    }

    pub fn enroll(&mut self, account: Addr) -> ClientResult<CallOutcome> {
        self.submit(Call::enroll(account))
    }

    pub fn create_proposal(&mut self, account: Addr, title: &str) -> ClientResult<CallOutcome> {
        let title = self.validator.validate_title(title)?;

        self.check_rate_limit(account, Action::Proposal)?;

        self.submit(Call::create_proposal(account, title))
    }

    pub fn cast_vote(&mut self, account: Addr, option: &str) -> ClientResult<CallOutcome> {
        let option = self.validator.validate_option(option)?;

        self.check_rate_limit(account, Action::Vote)?;

        self.submit(Call::cast_vote(account, option))
    }

    pub fn close_voting(&mut self, account: Addr) -> ClientResult<CallOutcome> {
        self.submit(Call::close_voting(account))
    }

    pub fn get_results(&mut self, account: Addr) -> ClientResult<CallOutcome> {
        self.submit(Call::get_results(account))
    }
}

// ----------------------------------- tests -----------------------------------
