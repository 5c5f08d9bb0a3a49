use {
    crate::{Borsh, Codec, Path, Prefix, Prefixer, PrimaryKey},
    ballot_types::{StdResult, Storage},
    std::marker::PhantomData,
};

/// Values keyed by `K`, all under one namespace.
pub struct Map<'a, K, T, C = Borsh> {
    namespace: &'a [u8],
    types: PhantomData<(K, T, C)>,
}

impl<'a, K, T, C> Map<'a, K, T, C> {
    pub const fn new(namespace: &'a str) -> Self {
        Self {
            namespace: namespace.as_bytes(),
            types: PhantomData,
        }
    }
}

impl<K, T, C> Map<'_, K, T, C>
where
    K: PrimaryKey,
    C: Codec<T>,
{
    fn path(&self, key: &K) -> Path<'static, T, C> {
        Path::join(self.namespace, key.raw_keys())
    }

    /// The entries whose key starts with `prefix`, keyed by the rest.
    pub fn prefix(&self, prefix: K::Prefix) -> Prefix<K::Suffix, T, C> {
        Prefix::new(self.namespace, prefix.raw_prefixes())
    }

    pub fn is_empty(&self, storage: &dyn Storage) -> bool {
        Prefix::<K, T, C>::new(self.namespace, vec![]).is_empty(storage)
    }

    pub fn has(&self, storage: &dyn Storage, key: K) -> bool {
        self.path(&key).exists(storage)
    }

    pub fn may_load(&self, storage: &dyn Storage, key: K) -> StdResult<Option<T>> {
        self.path(&key).may_load(storage)
    }

    pub fn save(&self, storage: &mut dyn Storage, key: K, data: &T) -> StdResult<()> {
        self.path(&key).save(storage, data)
    }
}

// ----------------------------------- tests -----------------------------------
