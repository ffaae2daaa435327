//! Provides abstraction for object storage on the NEAR blockchain

use crate::{ErrCode, ERR_CODE_STATE_CORRUPTED};
use near_sdk::{
    borsh::{BorshDeserialize, BorshSerialize},
    env,
};
use std::fmt::Debug;
use std::ops::{Deref, DerefMut};

/// Object supports persistence to NEAR blockchain storage, i.e., on the Trie
#[derive(Clone, Debug, PartialEq)]
pub struct Object<K, V>(K, V)
where
    K: BorshSerialize + Clone + Debug + PartialEq,
    V: BorshSerialize + BorshDeserialize + Clone + Debug + PartialEq;

impl<K, V> Object<K, V>
where
    K: BorshSerialize + Clone + Debug + PartialEq,
    V: BorshSerialize + BorshDeserialize + Clone + Debug + PartialEq,
{
    /// Object is created in memory, i.e., it is not persisted to storage.
    /// - use [`Object::save`] to persist the object to storage on the NEAR blockchain
    pub fn new(key: K, value: V) -> Self {
        Self(key, value)
    }

    pub fn key(&self) -> &K {
        &self.0
    }

    pub fn exists(key: &K) -> bool {
        object_exists(key)
    }

    /// Tries to load the object from storage using the specified key.
    ///
    /// ## Panics
    /// with [`ERR_CODE_STATE_CORRUPTED`] if Borsh deserialization fails, which means an object of a
    /// different type was stored with the same key
    pub fn load(key: &K) -> Option<Self> {
        let key_bytes = object_serialize_key(key);
        env::storage_read(&key_bytes)
            .map(|value| {
                V::try_from_slice(&value).unwrap_or_else(|err| {
                    ERR_CODE_STATE_CORRUPTED
                        .error(format!("object failed to deserialize: {}", err))
                        .panic()
                })
            })
            .map(|value| Object(key.clone(), value))
    }

    /// loads the object, or creates a new in-memory object using the default value
    pub fn load_or_default(key: K) -> Self
    where
        V: Default,
    {
        Self::load(&key).unwrap_or_else(|| Self::new(key, V::default()))
    }

    /// Saves the object to persistent storage on the NEAR blockchain
    /// - will overwrite any other object with the same key
    pub fn save(&self) {
        let key = object_serialize_key(&self.0);
        let value = borsh_serialize(&self.1);
        env::storage_write(&key, &value);
    }

    /// Deletes the object from storage and consumes the object
    ///
    /// Returns true if the object existed.
    pub fn delete(self) -> bool {
        let key = object_serialize_key(&self.0);
        env::storage_remove(&key)
    }

    pub fn into_value(self) -> V {
        self.1
    }
}

impl<K, V> Deref for Object<K, V>
where
    K: BorshSerialize + Clone + Debug + PartialEq,
    V: BorshSerialize + BorshDeserialize + Clone + Debug + PartialEq,
{
    type Target = V;

    fn deref(&self) -> &Self::Target {
        &self.1
    }
}

impl<K, V> DerefMut for Object<K, V>
where
    K: BorshSerialize + Clone + Debug + PartialEq,
    V: BorshSerialize + BorshDeserialize + Clone + Debug + PartialEq,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.1
    }
}

/// Used to check if the object is persisted to contract storage on the NEAR blockchain.
pub fn object_exists<K: BorshSerialize>(key: &K) -> bool {
    let key = object_serialize_key(key);
    env::storage_has_key(&key)
}

const ERR_CODE_BORSH_SERIALIZATION_FAILED: ErrCode = ErrCode("BORSH_SERIALIZATION_FAILED");

fn borsh_serialize<T: BorshSerialize>(value: &T) -> Vec<u8> {
    value.try_to_vec().unwrap_or_else(|err| {
        ERR_CODE_BORSH_SERIALIZATION_FAILED
            .error(err.to_string())
            .panic()
    })
}

/// Serializes the key using Borsh and then applies sha256 hash.
/// - Keys are always hashed before storing to ensure even distribution and const size.
fn object_serialize_key<K: BorshSerialize>(key: &K) -> Vec<u8> {
    env::sha256(&borsh_serialize(key))
}

#[cfg(test)]
mod test {
    use super::*;
    use oysterpack_smart_near_test::*;

    type Data = Object<u128, u128>;

    #[test]
    fn crud() {
        // Arrange
        testing_env!(new_context("bob"));

        let data = Data::new(1, 2);

        // Assert
        assert!(!object_exists(data.key()));

        // Act - save the object
        data.save();
        assert!(object_exists(data.key()));

        let mut data2 = Data::load(data.key()).unwrap();
        assert_eq!(data, data2);

        // change the value and then save it
        *data2 = 3_u128;
        data2.save();

        let data3 = Data::load(data.key()).unwrap();
        assert_eq!(data3, data2);

        // delete from storage
        assert!(data3.delete());
        assert!(Data::load(data.key()).is_none());
        assert_eq!(*Data::load_or_default(1), 0);
    }

    #[test]
    #[should_panic(expected = "[ERR] [STATE_CORRUPTED]")]
    fn load_with_mismatched_type() {
        testing_env!(new_context("bob"));

        Object::<u128, u8>::new(1, 2).save();
        Data::load(&1);
    }
}
