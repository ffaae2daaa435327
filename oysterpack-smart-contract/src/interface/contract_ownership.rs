use near_sdk::{json_types::ValidAccountId, AccountId};
use oysterpack_smart_near::{ErrCode, ErrorConst, Level, LogEvent, ERR_CODE_PERMISSION_DENIED};

/// Every contract has an owner
pub trait ContractOwnership {
    fn ops_owner(&self) -> AccountId;

    /// Transfers contract ownership immediately to the new owner.
    ///
    /// ## Panics
    /// - if the predecessor account is not the owner account
    /// - if 1 yoctoNEAR is not attached
    ///
    /// `#[payable]` - requires exactly 1 yoctoNEAR to be attached
    fn ops_owner_transfer(&mut self, new_owner: ValidAccountId);
}

pub const ERR_OWNER_ACCESS_REQUIRED: ErrorConst =
    ErrorConst(ERR_CODE_PERMISSION_DENIED, "caller is not the owner");

/// Indicates that an attempt was made to initialize the contract with a different owner.
///
/// A contract can only be seeded with the contract owner once after the contract is deployed.
pub const ERR_CONTRACT_OWNER_ALREADY_INITIALIZED: ErrorConst = ErrorConst(
    ErrCode("CONTRACT_OWNER_ALREADY_INITIALIZED"),
    "contract owner is already initialized with a different owner",
);

pub const ERR_CONTRACT_OWNER_NOT_INITIALIZED: ErrorConst = ErrorConst(
    ErrCode("CONTRACT_OWNER_NOT_INITIALIZED"),
    "contract owner has not been initialized",
);

pub const LOG_EVENT_OWNER_TRANSFERRED: LogEvent = LogEvent(Level::INFO, "OWNER_TRANSFERRED");
