use near_sdk::json_types::ValidAccountId;

pub trait AccessControl {
    fn ops_is_owner(&self, account_id: ValidAccountId) -> bool;

    fn ops_is_operator(&self, account_id: ValidAccountId) -> bool;
}
