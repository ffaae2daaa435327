use crate::*;
use near_sdk::AccountId;
use oysterpack_smart_contract::ContractOperator;

#[near_bindgen]
impl ContractOperator for Contract {
    fn ops_operator(&self) -> AccountId {
        ContractOperatorComponent.ops_operator()
    }

    #[payable]
    fn ops_operator_transfer(&mut self, new_operator: ValidAccountId) {
        ContractOperatorComponent.ops_operator_transfer(new_operator)
    }
}
