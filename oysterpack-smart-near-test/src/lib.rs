//! NEAR unit test support
//! - storage is preserved when the test environment is switched via [`testing_env!`], which
//!   makes it possible to simulate a sequence of calls made by different accounts over time

use near_sdk::test_utils::VMContextBuilder;
use oysterpack_smart_near::YOCTO;

pub use near_sdk::test_utils::get_logs;
pub use near_sdk::{self, testing_env, MockedBlockchain, VMContext};
pub use oysterpack_smart_near::to_valid_account_id;

pub const DEFAULT_CONTRACT_ACCOUNT_ID: &str = "contract.near";

pub const DEFAULT_CONTRACT_ACCOUNT_BALANCE: u128 = 10000 * YOCTO;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Creates a new NEAR test context.
/// - `predecessor_account_id` is also used as the `signer_account_id`
/// - `account_balance` is set to 10000 NEAR
pub fn new_context(predecessor_account_id: &str) -> VMContext {
    VMContextBuilder::new()
        .current_account_id(to_valid_account_id(DEFAULT_CONTRACT_ACCOUNT_ID))
        .signer_account_id(to_valid_account_id(predecessor_account_id))
        .predecessor_account_id(to_valid_account_id(predecessor_account_id))
        .account_balance(DEFAULT_CONTRACT_ACCOUNT_BALANCE)
        .build()
}

/// switches the predecessor account and clears the attached deposit
/// - the block timestamp is carried over
pub fn call_as(ctx: &mut VMContext, predecessor_account_id: &str) {
    ctx.predecessor_account_id = predecessor_account_id.to_string();
    ctx.signer_account_id = predecessor_account_id.to_string();
    ctx.attached_deposit = 0;
    testing_env!(ctx.clone());
}

/// same as [`call_as`], but attaches 1 yoctoNEAR which is required by owner functions
pub fn call_as_with_yocto(ctx: &mut VMContext, predecessor_account_id: &str) {
    ctx.predecessor_account_id = predecessor_account_id.to_string();
    ctx.signer_account_id = predecessor_account_id.to_string();
    ctx.attached_deposit = 1;
    testing_env!(ctx.clone());
}

/// advances the block clock and keeps the current predecessor
pub fn advance_time_secs(ctx: &mut VMContext, secs: u64) {
    ctx.block_timestamp += secs * NANOS_PER_SEC;
    ctx.block_index += 1;
    testing_env!(ctx.clone());
}

/// returns the logs that match the specified log event name, e.g., "REWARD_PAID"
pub fn logs_for_event(event: &str) -> Vec<String> {
    let tag = format!("[{}]", event);
    get_logs()
        .into_iter()
        .filter(|log| log.contains(&tag))
        .collect()
}
