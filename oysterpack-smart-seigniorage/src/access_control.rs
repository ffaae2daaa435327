use crate::*;
use oysterpack_smart_contract::{components::access_control::AccessControlComponent, AccessControl};

#[near_bindgen]
impl AccessControl for Contract {
    fn ops_is_owner(&self, account_id: ValidAccountId) -> bool {
        AccessControlComponent.ops_is_owner(account_id)
    }

    fn ops_is_operator(&self, account_id: ValidAccountId) -> bool {
        AccessControlComponent.ops_is_operator(account_id)
    }
}
