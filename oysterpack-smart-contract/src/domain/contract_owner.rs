use crate::{
    ERR_CONTRACT_OWNER_ALREADY_INITIALIZED, ERR_CONTRACT_OWNER_NOT_INITIALIZED,
    ERR_OWNER_ACCESS_REQUIRED,
};
use oysterpack_smart_near::data::Object;
use oysterpack_smart_near::near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
    json_types::ValidAccountId,
    AccountId,
};
use std::ops::{Deref, DerefMut};

const CONTRACT_OWNER_KEY: u128 = 1954418276903221581394858206587618053;

type DAO = Object<u128, ContractOwner>;

pub struct ContractOwnerObject(DAO);

impl ContractOwnerObject {
    /// ## Panics
    /// if the contract owner has not been initialized
    pub fn load() -> Self {
        match DAO::load(&CONTRACT_OWNER_KEY) {
            Some(owner) => Self(owner),
            None => ERR_CONTRACT_OWNER_NOT_INITIALIZED.panic(),
        }
    }

    /// Used to initialize the contract with the specified owner.
    ///
    /// ## Panics
    /// if the contract owner has already been initialized with a different owner
    pub fn initialize_contract(account_id: ValidAccountId) {
        let owner = DAO::new(CONTRACT_OWNER_KEY, ContractOwner::new(account_id));
        match DAO::load(&CONTRACT_OWNER_KEY) {
            Some(current_owner) => {
                ERR_CONTRACT_OWNER_ALREADY_INITIALIZED.assert(|| current_owner == owner)
            }
            None => owner.save(),
        }
    }

    /// asserts that the predecessor account ID is the owner
    pub fn assert_owner_access() -> Self {
        let owner = Self::load();
        ERR_OWNER_ACCESS_REQUIRED.assert(|| owner.is_owner(&env::predecessor_account_id()));
        owner
    }

    /// changes the owner in memory - the caller is responsible for saving
    pub fn set_owner(&mut self, account_id: ValidAccountId) {
        self.0.account_id = account_id.into();
    }
}

impl Deref for ContractOwnerObject {
    type Target = DAO;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ContractOwnerObject {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Every contract has an owner
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq)]
pub struct ContractOwner {
    account_id: AccountId,
}

impl ContractOwner {
    pub fn new(account_id: ValidAccountId) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn is_owner(&self, account_id: &str) -> bool {
        self.account_id == account_id
    }
}
