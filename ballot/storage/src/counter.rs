use {
    crate::{Borsh, Codec, Item},
    ballot_types::{StdError, StdResult, Storage},
};

/// Numbers a [`Counter`] can hold.
pub trait Number: Copy {
    fn checked_add(self, rhs: Self) -> StdResult<Self>;
}

macro_rules! impl_number {
    ($($t:ty),+) => {
        $(impl Number for $t {
            fn checked_add(self, rhs: Self) -> StdResult<Self> {
                <$t>::checked_add(self, rhs).ok_or_else(|| StdError::overflow(self, "+", rhs))
            }
        })*
    };
}

impl_number!(u32, u64, u128);

/// A single number that is monotonically incremented by the given step size.
///
/// Internally, this is an abstraction over an [`Item`].
pub struct Counter<'a, T, C = Borsh>
where
    C: Codec<T>,
{
    item: Item<'a, T, C>,
    base: T,
    step: T,
}

impl<'a, T, C> Counter<'a, T, C>
where
    T: Number,
    C: Codec<T>,
{
    pub const fn new(storage_key: &'a str, base: T, step: T) -> Self {
        Self {
            item: Item::new(storage_key),
            base,
            step,
        }
    }

    /// Load the current counter value.
    pub fn current(&self, storage: &dyn Storage) -> StdResult<T> {
        self.item
            .may_load(storage)
            .map(|maybe_value| maybe_value.unwrap_or(self.base))
    }

    /// Increment the value by the step size; return the values before and after
    /// incrementing.
    pub fn increment(&self, storage: &mut dyn Storage) -> StdResult<(T, T)> {
        let old_value = self.current(storage)?;
        let new_value = old_value.checked_add(self.step)?;

        self.item.save(storage, &new_value)?;

        Ok((old_value, new_value))
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        crate::Counter,
        ballot_types::{MemStorage, StdError},
    };

    const COUNTER: Counter<u64> = Counter::new("counter", 1, 1);

    #[test]
    fn counter_works() {
        let mut storage = MemStorage::new();

        assert_eq!(COUNTER.current(&storage).unwrap(), 1);
        assert_eq!(COUNTER.increment(&mut storage).unwrap(), (1, 2));
        assert_eq!(COUNTER.increment(&mut storage).unwrap(), (2, 3));
        assert_eq!(COUNTER.current(&storage).unwrap(), 3);
    }

    #[test]
    fn counter_overflow_fails() {
        let mut storage = MemStorage::new();
        let counter: Counter<u32> = Counter::new("c", u32::MAX, 1);

        assert!(matches!(
            counter.increment(&mut storage),
            Err(StdError::Overflow { .. })
        ));
        assert_eq!(counter.current(&storage).unwrap(), u32::MAX);
    }
}
