use {
    crate::{key::join_elements, Codec},
    ballot_types::{StdError, StdResult, Storage},
    std::{borrow::Cow, marker::PhantomData},
};

/// One storage key, together with the type of the value under it and the
/// codec that value is kept in.
pub struct Path<'a, T, C> {
    key: Cow<'a, [u8]>,
    value: PhantomData<(T, C)>,
}

impl<'a, T, C> Path<'a, T, C> {
    pub(crate) const fn from_raw(key: &'a [u8]) -> Self {
        Self {
            key: Cow::Borrowed(key),
            value: PhantomData,
        }
    }

    /// `len(namespace) | namespace | elements...`, see [`join_elements`].
    pub(crate) fn join(namespace: &[u8], mut elements: Vec<Cow<[u8]>>) -> Self {
        let last = elements.pop();
        let key = join_elements(
            std::iter::once(namespace).chain(elements.iter().map(|elem| &**elem)),
            last.as_deref(),
        );

        Self {
            key: Cow::Owned(key),
            value: PhantomData,
        }
    }
}

impl<T, C> Path<'_, T, C>
where
    C: Codec<T>,
{
    pub fn exists(&self, storage: &dyn Storage) -> bool {
        storage.read(&self.key).is_some()
    }

    pub fn may_load(&self, storage: &dyn Storage) -> StdResult<Option<T>> {
        match storage.read(&self.key) {
            Some(raw) => C::decode(&raw).map(Some),
            None => Ok(None),
        }
    }

    pub fn load(&self, storage: &dyn Storage) -> StdResult<T> {
        self.may_load(storage)?
            .ok_or_else(|| StdError::data_not_found::<T>(&self.key))
    }

    pub fn save(&self, storage: &mut dyn Storage, value: &T) -> StdResult<()> {
        storage.write(&self.key, &C::encode(value)?);
        Ok(())
    }
}
