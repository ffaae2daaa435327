use crate::{Epoch, RewardPerShare};
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};
use oysterpack_smart_fungible_token::TokenAmount;
use oysterpack_smart_near::domain::BlockTimestamp;

/// Written by each reward allocation, and immutable once written.
///
/// Snapshots are numbered from 1 and the snapshot index is the epoch it closed.
#[derive(BorshSerialize, BorshDeserialize, Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Snapshot {
    /// the epoch that was closed by the allocation
    pub epoch: Epoch,
    pub reward_per_share: RewardPerShare,
    /// amount allocated
    pub reward_received: TokenAmount,
    pub timestamp: BlockTimestamp,
}
