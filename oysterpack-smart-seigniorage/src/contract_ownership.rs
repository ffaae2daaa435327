use crate::*;
use near_sdk::AccountId;
use oysterpack_smart_contract::ContractOwnership;

#[near_bindgen]
impl ContractOwnership for Contract {
    fn ops_owner(&self) -> AccountId {
        ContractOwnershipComponent.ops_owner()
    }

    #[payable]
    fn ops_owner_transfer(&mut self, new_owner: ValidAccountId) {
        ContractOwnershipComponent.ops_owner_transfer(new_owner)
    }
}
