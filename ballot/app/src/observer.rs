use {
    ballot_types::{Call, CallOutcome},
    std::{convert::Infallible, fmt::Display},
};

/// Receives every processed call together with its outcome, after the
/// engine has committed or discarded the call's writes.
///
/// An observer can't influence the outcome. An error it returns is logged and
/// otherwise ignored.
pub trait Observer {
    type Error: Display;

    fn on_call(&mut self, call: &Call, outcome: &CallOutcome) -> Result<(), Self::Error>;
}

/// An observer that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl Observer for NullObserver {
    type Error = Infallible;

    fn on_call(&mut self, _call: &Call, _outcome: &CallOutcome) -> Result<(), Self::Error> {
        Ok(())
    }
}
