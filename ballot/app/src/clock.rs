use {
    ballot_types::Timestamp,
    std::{cell::Cell, rc::Rc},
};

/// The hosting network's clock. The engine only ever reads it.
pub trait LedgerClock {
    fn now(&self) -> Timestamp;
}

/// A clock that only moves when told to. Clones share the same reading, so a
/// test can hold a handle while the engine owns another.
#[derive(Debug, Default, Clone)]
pub struct MockClock {
    now: Rc<Cell<Timestamp>>,
}

impl MockClock {
    pub fn new(now: Timestamp) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    pub fn set(&self, now: Timestamp) {
        self.now.set(now);
    }

    pub fn advance(&self, duration: Timestamp) {
        self.now.set(self.now.get() + duration);
    }
}

impl LedgerClock for MockClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}
