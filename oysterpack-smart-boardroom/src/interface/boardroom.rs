use crate::{Epoch, RewardPerShare, RewardRecord, Snapshot};
use near_sdk::json_types::ValidAccountId;
use oysterpack_smart_fungible_token::{TokenAmount, TokenId};
use oysterpack_smart_near::{ErrCode, ErrorConst, Level, LogEvent};

/// Reward ledger
pub trait Boardroom {
    /// `1 + number of allocations`
    fn ops_boardroom_current_epoch(&self) -> Epoch;

    /// delegates to the vault
    fn ops_boardroom_balance_from_last_epoch(&self, account_id: ValidAccountId) -> TokenAmount;

    /// Unclaimed rewards, including rewards for snapshots that have not yet been settled for the
    /// account.
    fn ops_boardroom_earned(&self, account_id: ValidAccountId) -> TokenAmount;

    /// Pays out everything earned by the predecessor account.
    ///
    /// All bookkeeping is saved before the reward is transferred. Returns the amount paid, which
    /// is zero when nothing was earned.
    fn ops_boardroom_claim_reward(&mut self) -> TokenAmount;

    fn ops_boardroom_latest_snapshot(&self) -> Option<Snapshot>;

    /// returns the snapshot that closed the specified epoch
    fn ops_boardroom_snapshot(&self, epoch: Epoch) -> Option<Snapshot>;

    fn ops_boardroom_reward_record(&self, account_id: ValidAccountId) -> Option<RewardRecord>;

    fn ops_boardroom_reward_token(&self) -> TokenId;

    /// cumulative reward per share as of the latest snapshot
    fn ops_boardroom_reward_per_share(&self) -> RewardPerShare;

    /// total reward transferred into custody by allocations
    fn ops_boardroom_total_allocated(&self) -> TokenAmount;

    /// total reward paid out of custody by claims
    fn ops_boardroom_total_paid(&self) -> TokenAmount;
}

pub trait BoardroomOperator {
    /// Distributes `amount` of reward token to stakers proportionally to total stake.
    ///
    /// Closes the current epoch by writing a new snapshot. The reward is transferred from the
    /// operator into boardroom custody.
    ///
    /// ## Panics
    /// - if the predecessor account is not the operator
    /// - if amount is zero
    /// - if nothing is staked
    /// - if the operator has insufficient reward token balance
    fn ops_boardroom_allocate_seigniorage(&mut self, amount: TokenAmount) -> Snapshot;
}

pub const ERR_ZERO_TOTAL_STAKE: ErrorConst = ErrorConst(
    ErrCode("ZERO_TOTAL_STAKE"),
    "cannot allocate when total stake is zero",
);

pub const ERR_BOARDROOM_NOT_DEPLOYED: ErrorConst = ErrorConst(
    ErrCode("BOARDROOM_NOT_DEPLOYED"),
    "boardroom is not hosted by this contract",
);

pub const LOG_EVENT_REWARD_ADDED: LogEvent = LogEvent(Level::INFO, "REWARD_ADDED");

pub const LOG_EVENT_REWARD_PAID: LogEvent = LogEvent(Level::INFO, "REWARD_PAID");
