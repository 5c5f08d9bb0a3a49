use {
    crate::{Batch, BatchOp, Order, Record, Storage},
    std::{cmp::Ordering, iter::Peekable, ops::Bound},
};

/// A staging layer over a borrowed store.
///
/// Reads see the staged ops first and fall through to the base. Writes never
/// reach the base: the caller either takes the staged ops with
/// [`into_batch`](Buffer::into_batch) and flushes them, or drops the buffer.
pub struct Buffer<'a, S: ?Sized> {
    base: &'a S,
    pending: Batch,
}

impl<'a, S: ?Sized> Buffer<'a, S> {
    pub fn new(base: &'a S) -> Self {
        Self {
            base,
            pending: Batch::new(),
        }
    }

    /// Release the base store and return everything staged.
    pub fn into_batch(self) -> Batch {
        self.pending
    }
}

impl<S> Storage for Buffer<'_, S>
where
    S: Storage + ?Sized,
{
    fn read(&self, key: &[u8]) -> Option<Vec<u8>> {
        match self.pending.get(key) {
            Some(BatchOp::Insert(value)) => Some(value.clone()),
            Some(BatchOp::Delete) => None,
            None => self.base.read(key),
        }
    }

    fn scan<'b>(
        &'b self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'b> {
        if matches!((min, max), (Some(min), Some(max)) if min > max) {
            return Box::new(std::iter::empty());
        }

        let lower = min.map_or(Bound::Unbounded, |min| Bound::Included(min.to_vec()));
        let upper = max.map_or(Bound::Unbounded, |max| Bound::Excluded(max.to_vec()));
        let staged = self.pending.range::<Vec<u8>, _>((lower, upper));
        let pending: Box<dyn Iterator<Item = _>> = match order {
            Order::Ascending => Box::new(staged),
            Order::Descending => Box::new(staged.rev()),
        };

        Box::new(Overlay {
            base: self.base.scan(min, max, order).peekable(),
            pending: pending.peekable(),
            order,
        })
    }

    fn write(&mut self, key: &[u8], value: &[u8]) {
        self.pending
            .insert(key.to_vec(), BatchOp::Insert(value.to_vec()));
    }

    fn remove(&mut self, key: &[u8]) {
        self.pending.insert(key.to_vec(), BatchOp::Delete);
    }

    // Later ops on the same key replace earlier ones.
    fn flush(&mut self, batch: Batch) {
        self.pending.extend(batch);
    }
}

/// Staged ops laid over a scan of the base store, both in the same order.
struct Overlay<'a> {
    base: Peekable<Box<dyn Iterator<Item = Record> + 'a>>,
    pending: Peekable<Box<dyn Iterator<Item = (&'a Vec<u8>, &'a BatchOp)> + 'a>>,
    order: Order,
}

impl Iterator for Overlay<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // Which side yields next: `Less` is the base, `Greater` is the
            // staged op, `Equal` means the staged op shadows the base record.
            let next = match (self.base.peek(), self.pending.peek()) {
                (None, None) => return None,
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (Some((base_key, _)), Some((staged_key, _))) => {
                    let ordering = base_key.as_slice().cmp(staged_key.as_slice());
                    match self.order {
                        Order::Ascending => ordering,
                        Order::Descending => ordering.reverse(),
                    }
                },
            };

            match next {
                Ordering::Less => return self.base.next(),
                Ordering::Equal => {
                    self.base.next();
                },
                Ordering::Greater => {},
            }

            if let Some((key, BatchOp::Insert(value))) = self.pending.next() {
                return Some((key.clone(), value.clone()));
            }
        }
    }
}

// ----------------------------------- tests -----------------------------------
