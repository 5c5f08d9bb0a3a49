use {
    crate::{Order, Record, Storage},
    std::{collections::BTreeMap, iter, ops::Bound},
};

/// An in-memory KV store.
///
/// This is the committed store the engine runs on by default. Equality
/// compares every key and value, which is what atomicity tests rely on.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct MemStorage {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Storage for MemStorage {
    fn read(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.data.get(key).cloned()
    }

    fn scan<'a>(
        &'a self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'a> {
        // `BTreeMap::range` panics if start > end. We interpret min as
        // inclusive and max as exclusive, and return an empty iterator instead.
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Box::new(iter::empty());
            }
        }

        let min = min.map_or(Bound::Unbounded, |bytes| Bound::Included(bytes.to_vec()));
        let max = max.map_or(Bound::Unbounded, |bytes| Bound::Excluded(bytes.to_vec()));
        let iter = self
            .data
            .range((min, max))
            .map(|(k, v)| (k.clone(), v.clone()));

        match order {
            Order::Ascending => Box::new(iter),
            Order::Descending => Box::new(iter.rev()),
        }
    }

    fn write(&mut self, key: &[u8], value: &[u8]) {
        self.data.insert(key.to_vec(), value.to_vec());
    }

    fn remove(&mut self, key: &[u8]) {
        self.data.remove(key);
    }
}
