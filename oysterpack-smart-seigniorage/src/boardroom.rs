use crate::*;
use oysterpack_smart_boardroom::{
    Boardroom, BoardroomOperator, Epoch, RewardPerShare, RewardRecord, RewardCheckpoint, Snapshot,
};
use oysterpack_smart_fungible_token::TokenAmount;

/// Each boardroom hosted by the contract is addressed by its [`BoardroomId`]
#[near_bindgen]
impl Contract {
    pub fn ops_boardroom_current_epoch(&self, boardroom: BoardroomId) -> Epoch {
        Self::boardroom(boardroom).current_epoch()
    }

    pub fn ops_boardroom_balance_from_last_epoch(
        &self,
        boardroom: BoardroomId,
        account_id: ValidAccountId,
    ) -> TokenAmount {
        Self::boardroom(boardroom).ops_boardroom_balance_from_last_epoch(account_id)
    }

    pub fn ops_boardroom_earned(
        &self,
        boardroom: BoardroomId,
        account_id: ValidAccountId,
    ) -> TokenAmount {
        Self::boardroom(boardroom).ops_boardroom_earned(account_id)
    }

    pub fn ops_boardroom_claim_reward(&mut self, boardroom: BoardroomId) -> TokenAmount {
        Self::boardroom(boardroom).ops_boardroom_claim_reward()
    }

    pub fn ops_boardroom_latest_snapshot(&self, boardroom: BoardroomId) -> Option<Snapshot> {
        Self::boardroom(boardroom).ops_boardroom_latest_snapshot()
    }

    pub fn ops_boardroom_snapshot(&self, boardroom: BoardroomId, epoch: Epoch) -> Option<Snapshot> {
        Self::boardroom(boardroom).ops_boardroom_snapshot(epoch)
    }

    pub fn ops_boardroom_reward_record(
        &self,
        boardroom: BoardroomId,
        account_id: ValidAccountId,
    ) -> Option<RewardRecord> {
        Self::boardroom(boardroom).ops_boardroom_reward_record(account_id)
    }

    pub fn ops_boardroom_reward_token(&self, boardroom: BoardroomId) -> TokenId {
        Self::boardroom(boardroom).ops_boardroom_reward_token()
    }

    pub fn ops_boardroom_reward_per_share(&self, boardroom: BoardroomId) -> RewardPerShare {
        Self::boardroom(boardroom).ops_boardroom_reward_per_share()
    }

    pub fn ops_boardroom_total_allocated(&self, boardroom: BoardroomId) -> TokenAmount {
        Self::boardroom(boardroom).ops_boardroom_total_allocated()
    }

    pub fn ops_boardroom_total_paid(&self, boardroom: BoardroomId) -> TokenAmount {
        Self::boardroom(boardroom).ops_boardroom_total_paid()
    }

    /// operator only
    pub fn ops_boardroom_allocate_seigniorage(
        &mut self,
        boardroom: BoardroomId,
        amount: TokenAmount,
    ) -> Snapshot {
        Self::boardroom(boardroom).ops_boardroom_allocate_seigniorage(amount)
    }
}
