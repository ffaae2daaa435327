use crate::{
    ContractOperator, ContractOperatorObject, ContractOwnerObject, LOG_EVENT_OPERATOR_TRANSFERRED,
};
use oysterpack_smart_near::assert_yocto_near_attached;
use oysterpack_smart_near::component::Deploy;
use oysterpack_smart_near::near_sdk::{json_types::ValidAccountId, AccountId};

#[derive(Debug, Clone, Copy, Default)]
pub struct ContractOperatorComponent;

impl Deploy for ContractOperatorComponent {
    type Config = ValidAccountId;

    fn deploy(&self, operator: Self::Config) {
        ContractOperatorObject::initialize_contract(operator);
    }
}

impl ContractOperator for ContractOperatorComponent {
    fn ops_operator(&self) -> AccountId {
        ContractOperatorObject::load().account_id().to_string()
    }

    fn ops_operator_transfer(&mut self, new_operator: ValidAccountId) {
        assert_yocto_near_attached();
        ContractOwnerObject::assert_owner_access();
        let mut operator = ContractOperatorObject::load();
        if operator.is_operator(new_operator.as_ref()) {
            return;
        }
        let previous_operator = operator.account_id().to_string();
        operator.set_operator(new_operator.clone());
        operator.save();

        LOG_EVENT_OPERATOR_TRANSFERRED.log(format!(
            "previous_operator={} new_operator={}",
            previous_operator,
            new_operator.as_ref()
        ));
    }
}
