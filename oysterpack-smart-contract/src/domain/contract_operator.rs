use crate::{ERR_CONTRACT_OPERATOR_NOT_INITIALIZED, ERR_OPERATOR_ACCESS_REQUIRED};
use oysterpack_smart_near::data::Object;
use oysterpack_smart_near::near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
    json_types::ValidAccountId,
    AccountId,
};
use std::ops::{Deref, DerefMut};

const CONTRACT_OPERATOR_KEY: u128 = 1954418317815263826432102925938306432;

type DAO = Object<u128, ContractOperator>;

pub struct ContractOperatorObject(DAO);

impl ContractOperatorObject {
    /// ## Panics
    /// if the contract operator has not been initialized
    pub fn load() -> Self {
        DAO::load(&CONTRACT_OPERATOR_KEY)
            .map(Self)
            .unwrap_or_else(|| ERR_CONTRACT_OPERATOR_NOT_INITIALIZED.panic())
    }

    /// overwrites any existing operator
    pub fn initialize_contract(account_id: ValidAccountId) {
        DAO::new(CONTRACT_OPERATOR_KEY, ContractOperator::new(account_id)).save();
    }

    /// asserts that the predecessor account ID is the operator
    pub fn assert_operator_access() -> Self {
        let operator = Self::load();
        ERR_OPERATOR_ACCESS_REQUIRED
            .assert(|| operator.is_operator(&env::predecessor_account_id()));
        operator
    }

    /// changes the operator in memory - the caller is responsible for saving
    pub fn set_operator(&mut self, account_id: ValidAccountId) {
        self.0.account_id = account_id.into();
    }
}

impl Deref for ContractOperatorObject {
    type Target = DAO;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ContractOperatorObject {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq)]
pub struct ContractOperator {
    account_id: AccountId,
}

impl ContractOperator {
    pub fn new(account_id: ValidAccountId) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn is_operator(&self, account_id: &str) -> bool {
        self.account_id == account_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oysterpack_smart_near_test::*;

    #[test]
    fn assert_operator_access() {
        testing_env!(new_context("operator"));
        ContractOperatorObject::initialize_contract(to_valid_account_id("operator"));

        let operator = ContractOperatorObject::assert_operator_access();
        assert_eq!(operator.account_id(), "operator");
    }

    #[test]
    #[should_panic(expected = "[ERR] [PERMISSION_DENIED] caller is not the operator")]
    fn assert_operator_access_denied() {
        let mut ctx = new_context("operator");
        testing_env!(ctx.clone());
        ContractOperatorObject::initialize_contract(to_valid_account_id("operator"));

        call_as(&mut ctx, "abuser");
        ContractOperatorObject::assert_operator_access();
    }
}
