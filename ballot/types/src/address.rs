use {
    crate::{StdError, StdResult},
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{de, ser},
    sha2::{Digest, Sha256},
    std::{fmt, str::FromStr},
};

/// An account identity.
///
/// Addresses are 20 bytes long, displayed in lowercase hex with the `0x`
/// prefix. They are validated during deserialization, so an `Addr` found in a
/// call is always well formed.
#[derive(
    BorshSerialize, BorshDeserialize, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct Addr([u8; Addr::LENGTH]);

impl Addr {
    pub const LENGTH: usize = 20;

    pub const fn from_array(array: [u8; Self::LENGTH]) -> Self {
        Self(array)
    }

    /// Derive an address from a human readable name, as the first 20 bytes of
    /// `sha256(name)`.
    pub fn derive(name: &str) -> Self {
        let hash = Sha256::digest(name.as_bytes());
        let mut bytes = [0; Self::LENGTH];
        bytes.copy_from_slice(&hash[..Self::LENGTH]);
        Self(bytes)
    }

    /// Generate a mock address from use in testing.
    pub const fn mock(index: u8) -> Self {
        let mut bytes = [0; Self::LENGTH];
        bytes[Self::LENGTH - 1] = index;
        Self(bytes)
    }

    pub fn into_array(self) -> [u8; Self::LENGTH] {
        self.0
    }
}

impl AsRef<[u8]> for Addr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Addr {
    type Error = StdError;

    fn try_from(bytes: &[u8]) -> StdResult<Self> {
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| StdError::deserialize::<Self, _>("bytes", "expecting 20 bytes"))
    }
}

impl FromStr for Addr {
    type Err = StdError;

    fn from_str(s: &str) -> StdResult<Self> {
        let hex_str = s
            .strip_prefix("0x")
            .ok_or_else(|| StdError::deserialize::<Self, _>("hex", "missing `0x` prefix"))?;

        let bytes =
            hex::decode(hex_str).map_err(|err| StdError::deserialize::<Self, _>("hex", err))?;

        Self::try_from(bytes.as_slice())
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Addr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Addr({self})")
    }
}

impl ser::Serialize for Addr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> de::Deserialize<'de> for Addr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(AddrVisitor)
    }
}

struct AddrVisitor;

impl de::Visitor<'_> for AddrVisitor {
    type Value = Addr;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a 0x-prefixed hex encoded string of 20 bytes")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Addr::from_str(v).map_err(E::custom)
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        crate::{Addr, JsonDeExt, JsonSerExt},
        std::str::FromStr,
        test_case::test_case,
    };

    #[test]
    fn serialization_works() {
        let addr = Addr::mock(7);
        let json = addr.to_json_string().unwrap();
        assert_eq!(json, "\"0x0000000000000000000000000000000000000007\"");

        let de: Addr = json.as_bytes().deserialize_json().unwrap();
        assert_eq!(de, addr);
    }

    #[test_case(
        "0000000000000000000000000000000000000007";
        "missing prefix"
    )]
    #[test_case(
        "0x00000000000000000000000000000000000007";
        "too short"
    )]
    #[test_case(
        "0xzz00000000000000000000000000000000000007";
        "not hex"
    )]
    fn parsing_invalid_fails(s: &str) {
        assert!(Addr::from_str(s).is_err());
    }

    #[test]
    fn derive_is_deterministic() {
        assert_eq!(Addr::derive("alice"), Addr::derive("alice"));
        assert_ne!(Addr::derive("alice"), Addr::derive("bob"));
    }
}
