use {
    ballot_types::{StdError, StdResult},
    std::borrow::Cow,
};

/// A key of a [`Map`](crate::Map).
///
/// Keys serialize to bytes that sort the same way the keys do. A tuple key
/// `(A, B)` splits into the prefix `A` and the suffix `B`, so that all
/// entries sharing an `A` can be iterated together.
pub trait PrimaryKey {
    type Prefix: Prefixer;

    type Suffix: PrimaryKey;

    /// What the raw key decodes into, e.g. `Vec<u8>` for `&[u8]`.
    type Output;

    /// The elements of the key, outermost first.
    fn raw_keys(&self) -> Vec<Cow<[u8]>>;

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output>;
}

impl PrimaryKey for () {
    type Output = ();
    type Prefix = ();
    type Suffix = ();

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        vec![]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<()> {
        if bytes.is_empty() {
            Ok(())
        } else {
            Err(StdError::deserialize::<(), _>("key", "expecting empty bytes"))
        }
    }
}

impl PrimaryKey for &[u8] {
    type Output = Vec<u8>;
    type Prefix = ();
    type Suffix = ();

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        vec![Cow::Borrowed(self)]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Vec<u8>> {
        Ok(bytes.to_vec())
    }
}

// Big endian, so that numeric order and byte order agree.
impl PrimaryKey for u64 {
    type Output = u64;
    type Prefix = ();
    type Suffix = ();

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        vec![Cow::Owned(self.to_be_bytes().to_vec())]
    }

    fn from_slice(bytes: &[u8]) -> StdResult<u64> {
        let array = <[u8; 8]>::try_from(bytes).map_err(|_| {
            StdError::deserialize::<u64, _>(
                "key",
                format!("expecting 8 bytes, got {}", bytes.len()),
            )
        })?;

        Ok(u64::from_be_bytes(array))
    }
}

/// Only the first element of a tuple key can be used as a prefix, and it must
/// be a single element itself.
impl<A, B> PrimaryKey for (A, B)
where
    A: PrimaryKey + Prefixer,
    B: PrimaryKey,
{
    type Output = (A::Output, B::Output);
    type Prefix = A;
    type Suffix = B;

    fn raw_keys(&self) -> Vec<Cow<[u8]>> {
        let mut keys = self.0.raw_keys();
        keys.extend(self.1.raw_keys());
        keys
    }

    fn from_slice(bytes: &[u8]) -> StdResult<Self::Output> {
        let (a, b) = split_length_prefixed(bytes)?;

        Ok((A::from_slice(a)?, B::from_slice(b)?))
    }
}

/// Types that can select the entries of a [`Map`](crate::Map) whose keys
/// start with them.
pub trait Prefixer {
    fn raw_prefixes(&self) -> Vec<Cow<[u8]>>;
}

impl Prefixer for () {
    fn raw_prefixes(&self) -> Vec<Cow<[u8]>> {
        vec![]
    }
}

impl Prefixer for u64 {
    fn raw_prefixes(&self) -> Vec<Cow<[u8]>> {
        self.raw_keys()
    }
}

/// Join the elements of a storage key. Every element but the last carries a
/// 2-byte big endian length, so a key can be split again:
///
/// ```plain
/// len(A) | A | len(B) | B | C
/// ```
///
/// Panics if an element is longer than `u16::MAX` bytes.
pub(crate) fn join_elements<'a, I>(elements: I, last: Option<&[u8]>) -> Vec<u8>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut joined = Vec::new();

    for element in elements {
        let len = u16::try_from(element.len())
            .unwrap_or_else(|_| panic!("key element too long: {} bytes", element.len()));
        joined.extend_from_slice(&len.to_be_bytes());
        joined.extend_from_slice(element);
    }

    if let Some(last) = last {
        joined.extend_from_slice(last);
    }

    joined
}

fn split_length_prefixed(bytes: &[u8]) -> StdResult<(&[u8], &[u8])> {
    let missing = || StdError::deserialize::<Vec<u8>, _>("key", "truncated key element");

    let (len, rest) = bytes.split_first_chunk::<2>().ok_or_else(missing)?;
    let len = u16::from_be_bytes(*len) as usize;

    if rest.len() < len {
        return Err(missing());
    }

    Ok(rest.split_at(len))
}

// ----------------------------------- tests -----------------------------------
