use crate::{AccessControl, ContractOperatorObject, ContractOwnerObject};
use oysterpack_smart_near::near_sdk::json_types::ValidAccountId;

#[derive(Debug, Clone, Copy, Default)]
pub struct AccessControlComponent;

impl AccessControl for AccessControlComponent {
    fn ops_is_owner(&self, account_id: ValidAccountId) -> bool {
        ContractOwnerObject::load().is_owner(account_id.as_ref())
    }

    fn ops_is_operator(&self, account_id: ValidAccountId) -> bool {
        ContractOperatorObject::load().is_operator(account_id.as_ref())
    }
}
