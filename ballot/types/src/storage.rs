use std::collections::BTreeMap;

/// An owned key-value pair.
pub type Record = (Vec<u8>, Vec<u8>);

/// Writes and deletes keyed by the full storage key, applied in one go.
pub type Batch = BTreeMap<Vec<u8>, BatchOp>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOp {
    Insert(Vec<u8>),
    Delete,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// A byte-keyed store with ordered iteration.
///
/// Every namespace, staging buffer and committed store the engine works with
/// implements this, so typed storage can run on any of them.
pub trait Storage {
    /// `None` if the key doesn't exist.
    fn read(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Iterate over the records with keys in `[min, max)`, either bound being
    /// optional. Yields nothing if `min > max`.
    fn scan<'a>(
        &'a self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'a>;

    fn write(&mut self, key: &[u8], value: &[u8]);

    /// No-op if the key doesn't exist.
    fn remove(&mut self, key: &[u8]);

    /// Apply a batch. Stores that can do better than one op at a time should
    /// override this.
    fn flush(&mut self, batch: Batch) {
        for (key, op) in batch {
            match op {
                BatchOp::Insert(value) => self.write(&key, &value),
                BatchOp::Delete => self.remove(&key),
            }
        }
    }
}

// ----------------------------------- tests -----------------------------------
