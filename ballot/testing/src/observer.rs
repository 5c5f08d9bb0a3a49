use {
    ballot_app::Observer,
    ballot_types::{Call, CallOutcome, Event},
    std::{cell::RefCell, convert::Infallible, rc::Rc},
};

/// An observer that keeps every notification it receives. Clones share the
/// same record, so a test can inspect it while the engine owns another clone.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    records: Rc<RefCell<Vec<(Call, CallOutcome)>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(Call, CallOutcome)> {
        self.records.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Events of all accepted calls so far, in order.
    pub fn events(&self) -> Vec<Event> {
        self.records
            .borrow()
            .iter()
            .flat_map(|(_, outcome)| outcome.events.iter().cloned())
            .collect()
    }
}

impl Observer for RecordingObserver {
    type Error = Infallible;

    fn on_call(&mut self, call: &Call, outcome: &CallOutcome) -> Result<(), Self::Error> {
        self.records
            .borrow_mut()
            .push((call.clone(), outcome.clone()));

        Ok(())
    }
}
