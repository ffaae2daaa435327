use near_sdk::{json_types::ValidAccountId, AccountId};
use oysterpack_smart_near::{ErrCode, ErrorConst, Level, LogEvent, ERR_CODE_PERMISSION_DENIED};

/// The contract operator runs privileged operations, e.g., reward allocation and token minting.
///
/// The operator role is administered by the contract owner.
pub trait ContractOperator {
    fn ops_operator(&self) -> AccountId;

    /// Hands the operator role to another account, e.g., the treasury.
    ///
    /// ## Panics
    /// - if the predecessor account is not the owner account
    /// - if 1 yoctoNEAR is not attached
    ///
    /// `#[payable]` - requires exactly 1 yoctoNEAR to be attached
    fn ops_operator_transfer(&mut self, new_operator: ValidAccountId);
}

pub const ERR_OPERATOR_ACCESS_REQUIRED: ErrorConst =
    ErrorConst(ERR_CODE_PERMISSION_DENIED, "caller is not the operator");

pub const ERR_CONTRACT_OPERATOR_NOT_INITIALIZED: ErrorConst = ErrorConst(
    ErrCode("CONTRACT_OPERATOR_NOT_INITIALIZED"),
    "contract operator has not been initialized",
);

pub const LOG_EVENT_OPERATOR_TRANSFERRED: LogEvent = LogEvent(Level::INFO, "OPERATOR_TRANSFERRED");
