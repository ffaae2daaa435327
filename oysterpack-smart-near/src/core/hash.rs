use near_sdk::json_types::ValidAccountId;
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
};

/// sha256 hashed data
///
/// Used to build storage keys for the NEAR Trie:
/// - keys are evenly distributed
/// - key size is constant 32 bytes
#[derive(
    BorshDeserialize,
    BorshSerialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Ord,
    PartialOrd,
    Default,
)]
pub struct Hash([u8; Hash::LENGTH]);

impl Hash {
    pub const LENGTH: usize = 32;
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for Hash {
    fn from(value: &[u8]) -> Self {
        assert!(!value.is_empty(), "value must not be empty");
        let mut hash = [0_u8; Hash::LENGTH];
        hash.copy_from_slice(&env::sha256(value));
        Self(hash)
    }
}

impl From<u128> for Hash {
    fn from(value: u128) -> Self {
        Hash::from(value.to_be_bytes().as_ref())
    }
}

impl From<&str> for Hash {
    fn from(value: &str) -> Self {
        Hash::from(value.as_bytes())
    }
}

impl From<&ValidAccountId> for Hash {
    fn from(account_id: &ValidAccountId) -> Self {
        Hash::from(account_id.as_ref().as_str())
    }
}

/// (namespace, instance) key - used to key component instances
impl From<(u128, u128)> for Hash {
    fn from((k1, k2): (u128, u128)) -> Self {
        Hash::from((k1.to_be_bytes().as_ref(), k2))
    }
}

/// (object_id, attribute_id) key
/// - ULIDs should be used for attribute IDs to avoid collisions
impl From<(&str, u128)> for Hash {
    fn from((k1, k2): (&str, u128)) -> Self {
        Hash::from((k1.as_bytes(), k2))
    }
}

impl From<(&[u8], u128)> for Hash {
    fn from((k1, k2): (&[u8], u128)) -> Self {
        assert!(!k1.is_empty(), "k1 must not be empty");
        let key: Vec<u8> = [k1, k2.to_be_bytes().as_ref()].concat();
        Hash::from(key.as_slice())
    }
}

/// compound key
impl From<(&[u8], &[u8])> for Hash {
    fn from((k1, k2): (&[u8], &[u8])) -> Self {
        assert!(!k1.is_empty(), "k1 must not be empty");
        assert!(!k2.is_empty(), "k2 must not be empty");
        let key: Vec<u8> = [k1, k2].concat();
        Hash::from(key.as_slice())
    }
}

impl From<(Hash, u64)> for Hash {
    fn from((k1, k2): (Hash, u64)) -> Self {
        Hash::from((k1.as_ref(), k2.to_be_bytes().as_ref()))
    }
}

impl From<(Hash, &str)> for Hash {
    fn from((k1, k2): (Hash, &str)) -> Self {
        Hash::from((k1.as_ref(), k2.as_bytes()))
    }
}

impl From<(Hash, Hash)> for Hash {
    fn from((k1, k2): (Hash, Hash)) -> Self {
        Hash::from((k1.as_ref(), k2.as_ref()))
    }
}
