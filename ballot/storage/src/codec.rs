use {
    ballot_types::{BorshDeExt, BorshSerExt, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
};

/// How a value is turned into the bytes kept in storage, and back.
pub trait Codec<T> {
    fn encode(data: &T) -> StdResult<Vec<u8>>;

    fn decode(data: &[u8]) -> StdResult<T>;
}

/// Borsh, the encoding of every value in the engine's namespaces.
pub struct Borsh;

impl<T> Codec<T> for Borsh
where
    T: BorshSerialize + BorshDeserialize,
{
    fn encode(data: &T) -> StdResult<Vec<u8>> {
        data.to_borsh_vec()
    }

    fn decode(data: &[u8]) -> StdResult<T> {
        data.deserialize_borsh()
    }
}
