use {
    crate::{key::join_elements, Codec, PrimaryKey},
    ballot_types::{namespace_upper_bound, trim, Order, StdResult, Storage},
    std::{borrow::Cow, marker::PhantomData},
};

/// The entries of a [`Map`](crate::Map) whose keys share a prefix. Keys are
/// decoded as `K`, the part of the map key after the prefix.
pub struct Prefix<K, T, C> {
    namespace: Vec<u8>,
    types: PhantomData<(K, T, C)>,
}

impl<K, T, C> Prefix<K, T, C> {
    pub(crate) fn new(namespace: &[u8], prefixes: Vec<Cow<[u8]>>) -> Self {
        let elements = std::iter::once(namespace).chain(prefixes.iter().map(|elem| &**elem));

        Self {
            namespace: join_elements(elements, None),
            types: PhantomData,
        }
    }
}

impl<K, T, C> Prefix<K, T, C>
where
    K: PrimaryKey,
    C: Codec<T>,
{
    pub fn is_empty(&self, storage: &dyn Storage) -> bool {
        self.scan(storage, Order::Ascending).next().is_none()
    }

    /// Every entry under the prefix, in key order.
    pub fn range<'a>(
        &self,
        storage: &'a dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = StdResult<(K::Output, T)>> + 'a> {
        let iter = self.scan(storage, order).map(|(key, value)| {
            Ok((K::from_slice(&key)?, C::decode(&value)?))
        });

        Box::new(iter)
    }

    fn scan<'a>(
        &self,
        storage: &'a dyn Storage,
        order: Order,
    ) -> Box<dyn Iterator<Item = (Vec<u8>, Vec<u8>)> + 'a> {
        let max = namespace_upper_bound(&self.namespace);
        // The iterator outlives `&self`.
        let namespace = self.namespace.clone();
        let iter = storage
            .scan(Some(&self.namespace), max.as_deref(), order)
            .map(move |(key, value)| (trim(&namespace, &key), value));

        Box::new(iter)
    }
}

// ----------------------------------- tests -----------------------------------
