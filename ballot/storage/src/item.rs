use {
    crate::{Borsh, Codec, Path},
    ballot_types::{StdResult, Storage},
};

/// A single value under a fixed key.
pub struct Item<'a, T, C = Borsh> {
    path: Path<'a, T, C>,
}

impl<'a, T, C> Item<'a, T, C> {
    pub const fn new(storage_key: &'a str) -> Self {
        Self {
            path: Path::from_raw(storage_key.as_bytes()),
        }
    }
}

impl<T, C> Item<'_, T, C>
where
    C: Codec<T>,
{
    pub fn exists(&self, storage: &dyn Storage) -> bool {
        self.path.exists(storage)
    }

    pub fn may_load(&self, storage: &dyn Storage) -> StdResult<Option<T>> {
        self.path.may_load(storage)
    }

    pub fn load(&self, storage: &dyn Storage) -> StdResult<T> {
        self.path.load(storage)
    }

    pub fn save(&self, storage: &mut dyn Storage, value: &T) -> StdResult<()> {
        self.path.save(storage, value)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        crate::Item,
        ballot_types::{MemStorage, StdError, Storage, Timestamp},
    };

    const LAST_SEEN: Item<Timestamp> = Item::new("last_seen");

    #[test]
    fn save_then_load() {
        let mut storage = MemStorage::new();

        assert!(!LAST_SEEN.exists(&storage));
        assert_eq!(LAST_SEEN.may_load(&storage).unwrap(), None);
        assert!(matches!(
            LAST_SEEN.load(&storage),
            Err(StdError::DataNotFound { .. })
        ));

        LAST_SEEN
            .save(&mut storage, &Timestamp::from_seconds(5))
            .unwrap();

        assert!(LAST_SEEN.exists(&storage));
        assert_eq!(LAST_SEEN.load(&storage).unwrap(), Timestamp::from_seconds(5));
        // Items sit under their raw key, with no length prefix.
        assert!(storage.read(b"last_seen").is_some());
    }

    #[test]
    fn corrupt_value_fails_to_load() {
        let mut storage = MemStorage::new();
        storage.write(b"last_seen", &[1, 2]);

        assert!(matches!(
            LAST_SEEN.load(&storage),
            Err(StdError::Deserialize { .. })
        ));
    }
}
