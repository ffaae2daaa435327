//! Drives the contract through a sequence of calls made by different accounts

use crate::*;
use oysterpack_smart_boardroom::{Snapshot, Vault, VaultBalances};
use oysterpack_smart_fungible_token::TokenAmount;
use oysterpack_smart_near::DECIMALS_18;
use oysterpack_smart_near_test::*;

pub const OWNER: &str = "owner";
pub const OPERATOR: &str = "operator";
pub const WHALE: &str = "whale";
pub const ABUSER: &str = "abuser";

pub const STAKE_AMOUNT: u128 = 5000 * DECIMALS_18;
pub const SEIGNIORAGE_AMOUNT: u128 = 10000 * DECIMALS_18;
pub const LOCK_SECS: u64 = 300;

pub struct Scenario {
    pub ctx: VMContext,
    pub contract: Contract,
}

impl Scenario {
    /// Stakers are funded with 3x [`STAKE_AMOUNT`] and the operator is funded with
    /// 3x [`SEIGNIORAGE_AMOUNT`] of each reward token.
    pub fn deploy(with_secondary_boardroom: bool) -> Self {
        let mut ctx = new_context(OWNER);
        testing_env!(ctx.clone());
        let mut contract = Contract::deploy(
            None,
            Some(to_valid_account_id(OPERATOR)),
            Metadata::new("MahaDAO", "MAHA", 18),
            Some(LOCK_SECS),
            Metadata::new("ARTH", "ARTH", 18),
            if with_secondary_boardroom {
                Some(Metadata::new("ARTH Share", "ARTHX", 18))
            } else {
                None
            },
        );

        call_as(&mut ctx, OPERATOR);
        for account_id in [WHALE, ABUSER].iter() {
            contract.ops_ft_mint(
                STAKE_TOKEN,
                to_valid_account_id(account_id),
                (STAKE_AMOUNT * 3).into(),
            );
        }
        contract.ops_ft_mint(
            PRIMARY_REWARD_TOKEN,
            to_valid_account_id(OPERATOR),
            (SEIGNIORAGE_AMOUNT * 3).into(),
        );
        if with_secondary_boardroom {
            contract.ops_ft_mint(
                SECONDARY_REWARD_TOKEN,
                to_valid_account_id(OPERATOR),
                (SEIGNIORAGE_AMOUNT * 3).into(),
            );
        }

        Self { ctx, contract }
    }

    pub fn call_as(&mut self, account_id: &str) {
        call_as(&mut self.ctx, account_id);
    }

    pub fn bond(&mut self, account_id: &str, amount: u128) -> VaultBalances {
        self.call_as(account_id);
        self.contract.ops_vault_bond(amount.into())
    }

    pub fn unbond(&mut self, account_id: &str, amount: u128) -> VaultBalances {
        self.call_as(account_id);
        self.contract.ops_vault_unbond(amount.into())
    }

    pub fn allocate(&mut self, boardroom: BoardroomId, amount: u128) -> Snapshot {
        self.call_as(OPERATOR);
        self.contract
            .ops_boardroom_allocate_seigniorage(boardroom, amount.into())
    }

    pub fn claim(&mut self, boardroom: BoardroomId, account_id: &str) -> u128 {
        self.call_as(account_id);
        *self.contract.ops_boardroom_claim_reward(boardroom)
    }

    /// moves the block clock past the lock window of every deposit made so far
    pub fn expire_locks(&mut self) {
        advance_time_secs(&mut self.ctx, LOCK_SECS);
    }

    pub fn current_epoch(&self) -> u64 {
        self.contract
            .ops_boardroom_current_epoch(PRIMARY_BOARDROOM)
            .value()
    }

    pub fn balance_from_last_epoch(&self, account_id: &str) -> u128 {
        *self
            .contract
            .ops_boardroom_balance_from_last_epoch(PRIMARY_BOARDROOM, to_valid_account_id(account_id))
    }

    pub fn earned(&self, boardroom: BoardroomId, account_id: &str) -> u128 {
        *self
            .contract
            .ops_boardroom_earned(boardroom, to_valid_account_id(account_id))
    }

    pub fn token_balance(&self, token: TokenId, account_id: &str) -> u128 {
        *self
            .contract
            .ops_ft_balance_of(token, to_valid_account_id(account_id))
    }

    pub fn total_staked(&self) -> TokenAmount {
        self.contract.ops_vault_total_staked()
    }
}
