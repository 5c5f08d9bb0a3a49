use ballot_types::{concat, namespace_upper_bound, trim, Addr, Order, Record, Storage};

/// Prefix of the namespace holding state every call can see.
pub const GLOBAL_NAMESPACE: &[u8] = b"global";

/// Prefix of the per-account namespaces. The full namespace of an account is
/// this prefix followed by the account address.
pub const LOCAL_NAMESPACE: &[u8] = b"local";

/// A prefixed view into a key-value store.
///
/// Handlers only ever see one of these, either the global namespace or the
/// caller's own local namespace. Keys outside the prefix are unreachable.
pub struct StorageProvider<S> {
    storage: S,
    namespace: Vec<u8>,
}

impl<S> StorageProvider<S> {
    pub fn new(storage: S, prefixes: &[&[u8]]) -> Self {
        Self {
            storage,
            namespace: prefixes.concat(),
        }
    }

    pub fn global(storage: S) -> Self {
        Self::new(storage, &[GLOBAL_NAMESPACE])
    }

    pub fn local(storage: S, account: &Addr) -> Self {
        Self::new(storage, &[LOCAL_NAMESPACE, account.as_ref()])
    }

    pub fn namespace(&self) -> &[u8] {
        &self.namespace
    }

    /// Give back the underlying store.
    pub fn into_inner(self) -> S {
        self.storage
    }
}

impl<S> Storage for StorageProvider<S>
where
    S: Storage,
{
    fn read(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.storage.read(&concat(&self.namespace, key))
    }

    fn scan<'a>(
        &'a self,
        min: Option<&[u8]>,
        max: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'a> {
        let min = match min {
            Some(min) => concat(&self.namespace, min),
            None => self.namespace.clone(),
        };
        let max = match max {
            Some(max) => Some(concat(&self.namespace, max)),
            None => namespace_upper_bound(&self.namespace),
        };

        let iter = self
            .storage
            .scan(Some(&min), max.as_deref(), order)
            .map(|(key, value)| (trim(&self.namespace, &key), value));

        Box::new(iter)
    }

    fn write(&mut self, key: &[u8], value: &[u8]) {
        self.storage.write(&concat(&self.namespace, key), value);
    }

    fn remove(&mut self, key: &[u8]) {
        self.storage.remove(&concat(&self.namespace, key));
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        ballot_types::{Buffer, MemStorage},
    };

    #[test]
    fn namespaces_are_isolated() {
        let mut db = MemStorage::new();
        let alice = Addr::mock(1);
        let bob = Addr::mock(2);

        let mut global = StorageProvider::global(Buffer::new(&db));
        let mut local_alice = StorageProvider::local(Buffer::new(&db), &alice);

        global.write(b"k", b"global");
        local_alice.write(b"k", b"alice");

        assert_eq!(global.read(b"k"), Some(b"global".to_vec()));
        assert_eq!(local_alice.read(b"k"), Some(b"alice".to_vec()));

        let global = global.into_inner().into_batch();
        let local_alice = local_alice.into_inner().into_batch();
        db.flush(global);
        db.flush(local_alice);

        // The raw store holds both entries under their full keys.
        assert_eq!(db.read(b"globalk"), Some(b"global".to_vec()));
        assert_eq!(
            db.read(&[LOCAL_NAMESPACE, alice.as_ref(), b"k".as_slice()].concat()),
            Some(b"alice".to_vec())
        );

        let local_bob = StorageProvider::local(Buffer::new(&db), &bob);
        assert_eq!(local_bob.read(b"k"), None);
    }

    #[test]
    fn scans_are_trimmed_and_bounded() {
        let mut db = MemStorage::new();
        db.write(b"globalx", b"0");

        let mut alice = StorageProvider::local(Buffer::new(&db), &Addr::mock(1));
        alice.write(b"a", b"1");
        alice.write(b"b", b"2");
        let alice = alice.into_inner().into_batch();
        db.flush(alice);

        let mut bob = StorageProvider::local(Buffer::new(&db), &Addr::mock(2));
        bob.write(b"c", b"3");

        let alice = StorageProvider::local(Buffer::new(&db), &Addr::mock(1));
        let records = alice.scan(None, None, Order::Ascending).collect::<Vec<_>>();
        assert_eq!(records, vec![
            (b"a".to_vec(), b"1".to_vec()),
            (b"b".to_vec(), b"2".to_vec()),
        ]);

        let records = alice
            .scan(Some(b"b".as_slice()), None, Order::Descending)
            .collect::<Vec<_>>();
        assert_eq!(records, vec![(b"b".to_vec(), b"2".to_vec())]);

        bob.remove(b"c");
        assert_eq!(bob.read(b"c"), None);
        assert!(bob.scan(None, None, Order::Ascending).next().is_none());
    }
}
