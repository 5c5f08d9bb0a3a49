#[cfg(feature = "tracing")]
use crate::TraceOption;
use {
    crate::{
        dispatch::dispatch, error::CallError, execute::Context, AppError, AppResult, LedgerClock,
        MockClock, NullObserver, Observer, StorageProvider, CONFIG, LAST_CALL_TIME,
    },
    ballot_types::{Buffer, Call, CallOutcome, Config, MemStorage, Storage, Timestamp},
};

/// The state-transition engine.
///
/// Processes one call at a time, in the order they are given. Each call runs
/// against staging buffers laid over the committed store, one per namespace
/// it can see; the buffers are flushed only if the call is accepted.
pub struct Engine<DB = MemStorage, CL = MockClock, OB = NullObserver> {
    db: DB,
    clock: CL,
    observer: OB,
    /// Ledger time of the last call processed, accepted or rejected.
    last_seen: Option<Timestamp>,
    #[cfg(feature = "tracing")]
    trace_opt: TraceOption,
}

impl<DB, CL, OB> Engine<DB, CL, OB> {
    pub fn new(db: DB, clock: CL, observer: OB) -> Self {
        Self {
            db,
            clock,
            observer,
            last_seen: None,
            #[cfg(feature = "tracing")]
            trace_opt: TraceOption::LOUD,
        }
    }

    #[cfg(feature = "tracing")]
    pub fn with_trace_option(mut self, trace_opt: TraceOption) -> Self {
        self.trace_opt = trace_opt;
        self
    }

    /// The committed store.
    pub fn db(&self) -> &DB {
        &self.db
    }

    pub fn clock(&self) -> &CL {
        &self.clock
    }

    pub fn observer(&self) -> &OB {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut OB {
        &mut self.observer
    }
}

impl<DB, CL, OB> Engine<DB, CL, OB>
where
    DB: Storage,
    CL: LedgerClock,
    OB: Observer,
{
    /// Save the engine parameters. Must be done exactly once, before the first
    /// call.
    pub fn do_init(&mut self, cfg: Config) -> AppResult<()> {
        if CONFIG.exists(&StorageProvider::global(Buffer::new(&self.db))) {
            return Err(AppError::AlreadyInitialized);
        }

        let now = self.clock.now();
        let mut global = StorageProvider::global(Buffer::new(&self.db));

        CONFIG.save(&mut global, &cfg)?;
        LAST_CALL_TIME.save(&mut global, &now)?;

        let batch = global.into_inner().into_batch();
        self.db.flush(batch);
        self.last_seen = Some(now);

        #[cfg(feature = "tracing")]
        tracing::info!(
            voting_period = cfg.voting_period.to_string(),
            min_votes = cfg.min_votes,
            max_options = cfg.max_options,
            "Initialized engine"
        );

        Ok(())
    }

    /// Process a single call to completion.
    ///
    /// A rejection is a normal outcome and is returned as `Ok`. An `Err` means
    /// the engine couldn't process the call at all; the observer is not
    /// notified then. Nothing is written in either case.
    pub fn do_call(&mut self, call: Call) -> AppResult<CallOutcome> {
        let now = self.clock.now();

        let outcome = match self.process_call(&call, now) {
            Ok(outcome) => outcome,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::error!(
                    caller = call.caller.to_string(),
                    err = err.to_string(),
                    "Failed to process call"
                );

                return Err(err);
            },
        };

        #[cfg(feature = "tracing")]
        match outcome.reason {
            None => {
                crate::dyn_event!(
                    self.trace_opt.ok_level,
                    caller = call.caller.to_string(),
                    op = call.op.as_deref().unwrap_or("enroll"),
                    events = outcome.events.len(),
                    "Call accepted"
                );
            },
            Some(reason) => {
                crate::dyn_event!(
                    self.trace_opt.error_level,
                    caller = call.caller.to_string(),
                    op = call.op.as_deref().unwrap_or("enroll"),
                    reason = reason.to_string(),
                    "Call rejected"
                );
            },
        }

        if let Err(_err) = self.observer.on_call(&call, &outcome) {
            #[cfg(feature = "tracing")]
            tracing::warn!(err = _err.to_string(), "Observer failed to handle call");
        }

        Ok(outcome)
    }

    /// Process calls in order. Stops at the first call the engine fails to
    /// process; calls before it stay committed.
    pub fn do_calls<I>(&mut self, calls: I) -> AppResult<Vec<CallOutcome>>
    where
        I: IntoIterator<Item = Call>,
    {
        calls.into_iter().map(|call| self.do_call(call)).collect()
    }

    fn process_call(&mut self, call: &Call, now: Timestamp) -> AppResult<CallOutcome> {
        let committed = StorageProvider::global(Buffer::new(&self.db));

        if !CONFIG.exists(&committed) {
            return Err(AppError::NotInitialized);
        }

        // Rejected calls leave no trace in the store, so the committed time
        // alone can lag behind the last call processed.
        let last = LAST_CALL_TIME
            .load(&committed)?
            .max(self.last_seen.unwrap_or_default());
        if now < last {
            return Err(AppError::ClockRegression { last, now });
        }

        let ctx = Context {
            caller: call.caller,
            now,
        };

        // The handler sees the global namespace and the caller's own one. The
        // two never share a key, so their staged writes can be flushed one
        // after the other.
        let mut global = StorageProvider::global(Buffer::new(&self.db));
        let mut local = StorageProvider::local(Buffer::new(&self.db), &call.caller);

        match dispatch(&mut global, &mut local, ctx, call) {
            Ok(events) => {
                LAST_CALL_TIME.save(&mut global, &now)?;

                let global = global.into_inner().into_batch();
                let local = local.into_inner().into_batch();
                self.db.flush(global);
                self.db.flush(local);
                self.last_seen = Some(now);

                Ok(CallOutcome::accepted(events))
            },
            // Dropping the buffers discards whatever the handler staged.
            Err(CallError::Rejected(reason)) => {
                self.last_seen = Some(now);

                Ok(CallOutcome::rejected(reason))
            },
            Err(CallError::Std(err)) => Err(err.into()),
        }
    }
}

// ----------------------------------- tests -----------------------------------
