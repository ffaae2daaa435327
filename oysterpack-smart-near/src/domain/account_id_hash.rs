use crate::Hash;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use near_sdk::json_types::ValidAccountId;

/// Identifies a balance holder.
///
/// Holders are usually NEAR accounts, but contract components may also hold balances under
/// pseudo accounts, e.g., stake or rewards held in custody on behalf of stakers.
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AccountIdHash(pub Hash);

impl AccountIdHash {
    pub fn hash(&self) -> Hash {
        self.0
    }

    /// pseudo account that is owned by the contract and namespaced by `owner_key`
    /// - pseudo accounts can never collide with a real account ID hash
    pub fn pseudo_account(owner_key: Hash, name: &str) -> Self {
        Self(Hash::from((owner_key, name)))
    }
}

impl From<&str> for AccountIdHash {
    fn from(account_id: &str) -> Self {
        Self(account_id.into())
    }
}

impl From<&ValidAccountId> for AccountIdHash {
    fn from(account_id: &ValidAccountId) -> Self {
        Self(account_id.into())
    }
}

impl From<ValidAccountId> for AccountIdHash {
    fn from(account_id: ValidAccountId) -> Self {
        Self((&account_id).into())
    }
}
