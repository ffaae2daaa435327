use crate::{ContractOwnerObject, ContractOwnership, LOG_EVENT_OWNER_TRANSFERRED};
use oysterpack_smart_near::assert_yocto_near_attached;
use oysterpack_smart_near::component::Deploy;
use oysterpack_smart_near::near_sdk::{json_types::ValidAccountId, AccountId};

#[derive(Debug, Clone, Copy, Default)]
pub struct ContractOwnershipComponent;

impl Deploy for ContractOwnershipComponent {
    type Config = ValidAccountId;

    fn deploy(&self, owner: Self::Config) {
        ContractOwnerObject::initialize_contract(owner);
    }
}

impl ContractOwnership for ContractOwnershipComponent {
    fn ops_owner(&self) -> AccountId {
        ContractOwnerObject::load().account_id().to_string()
    }

    fn ops_owner_transfer(&mut self, new_owner: ValidAccountId) {
        assert_yocto_near_attached();
        let mut owner = ContractOwnerObject::assert_owner_access();
        if owner.is_owner(new_owner.as_ref()) {
            return;
        }
        let previous_owner = owner.account_id().to_string();
        owner.set_owner(new_owner.clone());
        owner.save();

        LOG_EVENT_OWNER_TRANSFERRED.log(format!(
            "previous_owner={} new_owner={}",
            previous_owner,
            new_owner.as_ref()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oysterpack_smart_near_test::*;

    #[test]
    fn transfer_ownership() {
        let mut ctx = new_context("owner");
        testing_env!(ctx.clone());
        let mut ownership = ContractOwnershipComponent;
        ownership.deploy(to_valid_account_id("owner"));
        assert_eq!(ownership.ops_owner(), "owner");

        call_as_with_yocto(&mut ctx, "owner");
        ownership.ops_owner_transfer(to_valid_account_id("timelock"));
        assert_eq!(ownership.ops_owner(), "timelock");
        assert_eq!(
            get_logs(),
            vec![LOG_EVENT_OWNER_TRANSFERRED.message("previous_owner=owner new_owner=timelock")]
        );

        // transferring to the current owner is a no-op
        call_as_with_yocto(&mut ctx, "timelock");
        ownership.ops_owner_transfer(to_valid_account_id("timelock"));
        assert!(get_logs().is_empty());
    }

    #[test]
    #[should_panic(expected = "[ERR] [PERMISSION_DENIED] caller is not the owner")]
    fn transfer_ownership_as_non_owner() {
        let mut ctx = new_context("owner");
        testing_env!(ctx.clone());
        let mut ownership = ContractOwnershipComponent;
        ownership.deploy(to_valid_account_id("owner"));

        call_as_with_yocto(&mut ctx, "bob");
        ownership.ops_owner_transfer(to_valid_account_id("bob"));
    }

    #[test]
    #[should_panic(expected = "[ERR] [YOCTONEAR_DEPOSIT_REQUIRED]")]
    fn transfer_ownership_without_yocto() {
        testing_env!(new_context("owner"));
        let mut ownership = ContractOwnershipComponent;
        ownership.deploy(to_valid_account_id("owner"));

        ownership.ops_owner_transfer(to_valid_account_id("bob"));
    }
}
