use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};
use oysterpack_smart_fungible_token::TokenAmount;

/// Per account reward bookkeeping owned by a boardroom
#[derive(
    BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default,
)]
#[serde(crate = "near_sdk::serde")]
pub struct RewardRecord {
    /// rewards for snapshots up to and including this index have been settled
    /// - 0 means no snapshots have been settled
    pub last_snapshot_index: u64,
    /// settled rewards that have not yet been claimed
    pub accrued: TokenAmount,
}
