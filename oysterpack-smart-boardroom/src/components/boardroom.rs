use crate::components::vault::VaultComponent;
use crate::*;
use oysterpack_smart_contract::ContractOperatorObject;
use oysterpack_smart_fungible_token::{
    components::fungible_token::FungibleTokenComponent, TokenAmount, TokenId, TokenService,
};
use oysterpack_smart_near::{
    assert_non_zero_amount,
    component::{Component, ComponentState, Deploy, ERR_COMPONENT_ALREADY_DEPLOYED},
    data::Object,
    domain::{AccountIdHash, BlockTimestamp},
    near_sdk::{
        borsh::{self, BorshDeserialize, BorshSerialize},
        env,
        json_types::ValidAccountId,
    },
    Hash, ERR_CODE_STATE_CORRUPTED, ERR_INSUFFICIENT_BALANCE,
};

/// Reward ledger instance.
///
/// Reward allocations are recorded as an append-only log of cumulative reward per share snapshots.
/// Each account has a pointer into the log, and everything up to the pointer has been settled into
/// the account's accrued rewards. Because the vault checkpoints the account before every stake
/// change, the account's eligible balance is constant across all snapshots after the pointer, as
/// long as the boardroom stays bound. Stake changes made while the boardroom was not bound are
/// never settled at more than the balance the boardroom was notified of.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardroomComponent<V = VaultComponent>
where
    V: StakeBalances,
{
    id: BoardroomId,
    vault: V,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq)]
pub struct BoardroomState {
    pub reward_token: TokenId,
    /// the latest snapshot index
    pub snapshot_count: u64,
    /// cumulative value as of the latest snapshot
    pub reward_per_share: RewardPerShare,
    pub total_allocated: TokenAmount,
    pub total_paid: TokenAmount,
    /// snapshot count as of the last time the vault bound the boardroom
    pub connected_at_snapshot: u64,
}

impl BoardroomState {
    pub fn current_epoch(&self) -> Epoch {
        Epoch(self.snapshot_count + 1)
    }
}

pub struct BoardroomConfig {
    pub reward_token: TokenId,
}

impl<V: StakeBalances> Component for BoardroomComponent<V> {
    type State = BoardroomState;
    const STATE_KEY: u128 = 1954424467180529440123318012449137451;

    fn instance_id(&self) -> u128 {
        self.id.0 as u128
    }
}

impl<V: StakeBalances> Deploy for BoardroomComponent<V> {
    type Config = BoardroomConfig;

    fn deploy(&self, config: Self::Config) {
        ERR_COMPONENT_ALREADY_DEPLOYED.assert(|| !self.is_deployed());
        self.new_state(BoardroomState {
            reward_token: config.reward_token,
            snapshot_count: 0,
            reward_per_share: RewardPerShare::default(),
            total_allocated: TokenAmount::zero(),
            total_paid: TokenAmount::zero(),
            connected_at_snapshot: 0,
        })
        .save();
    }
}

const SNAPSHOT_KEY: u128 = 1954424521649411307930213424658395318;
const REWARD_RECORD_KEY: u128 = 1954424548377024958398637317396126297;

type SnapshotObject = Object<Hash, Snapshot>;
type RewardRecordObject = Object<Hash, RewardRecord>;

impl<V: StakeBalances> BoardroomComponent<V> {
    pub fn new(id: BoardroomId, vault: V) -> Self {
        Self { id, vault }
    }

    pub fn id(&self) -> BoardroomId {
        self.id
    }

    /// pseudo account that holds allocated rewards until they are claimed
    pub fn custody(&self) -> AccountIdHash {
        AccountIdHash::pseudo_account(self.state_key(), "custody")
    }

    /// ## Panics
    /// if the boardroom is not deployed
    fn boardroom_state(&self) -> ComponentState<BoardroomState> {
        self.load_state()
            .unwrap_or_else(|| ERR_BOARDROOM_NOT_DEPLOYED.panic())
    }

    fn snapshot_key(&self, index: u64) -> Hash {
        Hash::from((Hash::from((SNAPSHOT_KEY, self.instance_id())), index))
    }

    fn load_snapshot(&self, index: u64) -> Option<Snapshot> {
        SnapshotObject::load(&self.snapshot_key(index)).map(Object::into_value)
    }

    fn reward_record_key(&self, account_id: &str) -> Hash {
        Hash::from((Hash::from((REWARD_RECORD_KEY, self.instance_id())), account_id))
    }

    /// New records start at the snapshot at which the boardroom was last connected, because the
    /// account's stake was never checkpointed on any earlier snapshot.
    fn reward_record(&self, state: &BoardroomState, account_id: &str) -> RewardRecordObject {
        let key = self.reward_record_key(account_id);
        RewardRecordObject::load(&key).unwrap_or_else(|| {
            RewardRecordObject::new(
                key,
                RewardRecord {
                    last_snapshot_index: state.connected_at_snapshot,
                    accrued: TokenAmount::zero(),
                },
            )
        })
    }

    /// index 0 is the implicit genesis snapshot
    fn reward_per_share_at(&self, index: u64) -> RewardPerShare {
        if index == 0 {
            return RewardPerShare::default();
        }
        match self.load_snapshot(index) {
            Some(snapshot) => snapshot.reward_per_share,
            None => ERR_CODE_STATE_CORRUPTED
                .error(format!("boardroom {} snapshot {} is missing", self.id, index))
                .panic(),
        }
    }

    /// Settles all snapshots after the record's pointer at `eligible_balance` and advances the
    /// pointer to the latest snapshot. Snapshots up to the last connect are settled at no more than
    /// `connected_balance`.
    fn settle(
        &self,
        state: &BoardroomState,
        record: &mut RewardRecord,
        eligible_balance: TokenAmount,
        connected_balance: TokenAmount,
    ) {
        if record.last_snapshot_index >= state.snapshot_count {
            return;
        }
        if record.last_snapshot_index < state.connected_at_snapshot {
            let delta = self.reward_per_share_at(state.connected_at_snapshot)
                - self.reward_per_share_at(record.last_snapshot_index);
            record.accrued += delta.earnings(eligible_balance.min(connected_balance));
            record.last_snapshot_index = state.connected_at_snapshot;
        }
        let delta = state.reward_per_share - self.reward_per_share_at(record.last_snapshot_index);
        record.accrued += delta.earnings(eligible_balance);
        record.last_snapshot_index = state.snapshot_count;
    }

    /// settles against the vault's current view of the account
    fn settle_from_vault(
        &self,
        state: &BoardroomState,
        record: &mut RewardRecord,
        account_id: &str,
    ) {
        let eligible_balance = self.vault.balance_from_last_epoch(account_id);
        let connected_balance = self.vault.connected_balance(account_id);
        self.settle(state, record, eligible_balance, connected_balance);
    }
}

impl<V: StakeBalances> RewardCheckpoint for BoardroomComponent<V> {
    fn current_epoch(&self) -> Epoch {
        self.boardroom_state().current_epoch()
    }

    fn connect(&mut self) {
        let mut state = self.boardroom_state();
        state.connected_at_snapshot = state.snapshot_count;
        state.save();
    }

    fn checkpoint(
        &mut self,
        account_id: &str,
        eligible_balance: TokenAmount,
        connected_balance: TokenAmount,
    ) {
        let state = self.boardroom_state();
        let mut record = self.reward_record(&state, account_id);
        self.settle(&state, &mut record, eligible_balance, connected_balance);
        record.save();
    }
}

impl<V: StakeBalances> Boardroom for BoardroomComponent<V> {
    fn ops_boardroom_current_epoch(&self) -> Epoch {
        self.current_epoch()
    }

    fn ops_boardroom_balance_from_last_epoch(&self, account_id: ValidAccountId) -> TokenAmount {
        self.vault.balance_from_last_epoch(account_id.as_ref())
    }

    fn ops_boardroom_earned(&self, account_id: ValidAccountId) -> TokenAmount {
        let state = self.boardroom_state();
        let mut record = *self.reward_record(&state, account_id.as_ref());
        self.settle_from_vault(&state, &mut record, account_id.as_ref());
        record.accrued
    }

    fn ops_boardroom_claim_reward(&mut self) -> TokenAmount {
        let account_id = env::predecessor_account_id();
        let mut state = self.boardroom_state();
        let mut record = self.reward_record(&state, &account_id);
        self.settle_from_vault(&state, &mut record, &account_id);

        let reward = record.accrued;
        record.accrued = TokenAmount::zero();
        record.save();
        if reward.is_zero() {
            return reward;
        }

        state.total_paid += reward;
        state.save();
        FungibleTokenComponent::new(state.reward_token).ft_transfer_from(
            self.custody(),
            account_id.as_str().into(),
            reward,
        );
        LOG_EVENT_REWARD_PAID.log(format!(
            "boardroom={} account_id={} amount={}",
            self.id, account_id, reward
        ));
        reward
    }

    fn ops_boardroom_latest_snapshot(&self) -> Option<Snapshot> {
        let state = self.boardroom_state();
        if state.snapshot_count == 0 {
            return None;
        }
        self.load_snapshot(state.snapshot_count)
    }

    fn ops_boardroom_snapshot(&self, epoch: Epoch) -> Option<Snapshot> {
        if epoch.value() == 0 {
            return None;
        }
        self.load_snapshot(epoch.value())
    }

    fn ops_boardroom_reward_record(&self, account_id: ValidAccountId) -> Option<RewardRecord> {
        RewardRecordObject::load(&self.reward_record_key(account_id.as_ref()))
            .map(Object::into_value)
    }

    fn ops_boardroom_reward_token(&self) -> TokenId {
        self.boardroom_state().reward_token
    }

    fn ops_boardroom_reward_per_share(&self) -> RewardPerShare {
        self.boardroom_state().reward_per_share
    }

    fn ops_boardroom_total_allocated(&self) -> TokenAmount {
        self.boardroom_state().total_allocated
    }

    fn ops_boardroom_total_paid(&self) -> TokenAmount {
        self.boardroom_state().total_paid
    }
}

impl<V: StakeBalances> BoardroomOperator for BoardroomComponent<V> {
    fn ops_boardroom_allocate_seigniorage(&mut self, amount: TokenAmount) -> Snapshot {
        let operator = ContractOperatorObject::assert_operator_access();
        assert_non_zero_amount(*amount);
        let total_staked = self.vault.total_staked();
        ERR_ZERO_TOTAL_STAKE.assert(|| !total_staked.is_zero());
        let mut state = self.boardroom_state();
        let mut reward_token = FungibleTokenComponent::new(state.reward_token);
        let operator_account = AccountIdHash::from(operator.account_id());
        ERR_INSUFFICIENT_BALANCE.assert(|| reward_token.ft_balance(operator_account) >= amount);

        let snapshot = Snapshot {
            epoch: state.current_epoch(),
            reward_per_share: state.reward_per_share
                + RewardPerShare::from_allocation(amount, total_staked),
            reward_received: amount,
            timestamp: BlockTimestamp::from_env(),
        };
        state.snapshot_count += 1;
        SnapshotObject::new(self.snapshot_key(state.snapshot_count), snapshot).save();
        state.reward_per_share = snapshot.reward_per_share;
        state.total_allocated += amount;
        state.save();

        reward_token.ft_transfer_from(operator_account, self.custody(), amount);
        LOG_EVENT_REWARD_ADDED.log(format!(
            "boardroom={} operator={} amount={} epoch={}",
            self.id,
            operator.account_id(),
            amount,
            snapshot.epoch
        ));
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oysterpack_smart_contract::components::contract_operator::ContractOperatorComponent;
    use oysterpack_smart_fungible_token::{components::fungible_token::FungibleTokenConfig, Metadata};
    use oysterpack_smart_near_test::*;
    use std::collections::HashMap;

    const OPERATOR: &str = "operator";
    const ALICE: &str = "alice";
    const BOB: &str = "bob";
    const REWARD_TOKEN: TokenId = TokenId(2);
    const BOARDROOM: BoardroomId = BoardroomId(1);

    /// epoch gated balances are set directly by the tests
    #[derive(Debug, Clone, PartialEq, Default)]
    struct MockVault {
        total_staked: u128,
        balances_from_last_epoch: HashMap<String, u128>,
        disconnected_deposits: HashMap<String, u128>,
    }

    impl MockVault {
        fn stake(&mut self, account_id: &str, amount: u128) {
            self.total_staked += amount;
            *self
                .balances_from_last_epoch
                .entry(account_id.to_string())
                .or_default() += amount;
        }

        fn stake_while_disconnected(&mut self, account_id: &str, amount: u128) {
            self.stake(account_id, amount);
            *self
                .disconnected_deposits
                .entry(account_id.to_string())
                .or_default() += amount;
        }
    }

    impl StakeBalances for MockVault {
        fn total_staked(&self) -> TokenAmount {
            self.total_staked.into()
        }

        fn balance_of(&self, account_id: &str) -> TokenAmount {
            self.balance_from_last_epoch(account_id)
        }

        fn balance_from_last_epoch(&self, account_id: &str) -> TokenAmount {
            self.balances_from_last_epoch
                .get(account_id)
                .cloned()
                .unwrap_or_default()
                .into()
        }

        fn connected_balance(&self, account_id: &str) -> TokenAmount {
            let disconnected_deposits = self
                .disconnected_deposits
                .get(account_id)
                .cloned()
                .unwrap_or_default();
            (*self.balance_from_last_epoch(account_id) - disconnected_deposits).into()
        }

        fn balance_without_bonded(&self, account_id: &str) -> TokenAmount {
            self.balance_from_last_epoch(account_id)
        }
    }

    fn deploy(ctx: &mut VMContext) -> BoardroomComponent<MockVault> {
        testing_env!(ctx.clone());
        ContractOperatorComponent.deploy(to_valid_account_id(OPERATOR));
        let mut reward_token = FungibleTokenComponent::new(REWARD_TOKEN);
        reward_token.deploy(FungibleTokenConfig {
            metadata: Metadata::new("ARTH", "ARTH", 18),
        });
        reward_token.ft_mint(OPERATOR.into(), 1_000_000.into());

        let boardroom = BoardroomComponent::new(BOARDROOM, MockVault::default());
        boardroom.deploy(BoardroomConfig {
            reward_token: REWARD_TOKEN,
        });
        boardroom
    }

    fn reward_balance(account_id: &str) -> TokenAmount {
        FungibleTokenComponent::new(REWARD_TOKEN).ft_balance(account_id.into())
    }

    #[test]
    fn allocate_and_claim() {
        let mut ctx = new_context(OPERATOR);
        let mut boardroom = deploy(&mut ctx);
        assert_eq!(boardroom.ops_boardroom_current_epoch(), Epoch::FIRST);
        assert!(boardroom.ops_boardroom_latest_snapshot().is_none());

        boardroom.vault.stake(ALICE, 300);
        boardroom.vault.stake(BOB, 100);

        ctx.block_timestamp = 1000;
        testing_env!(ctx.clone());
        let snapshot = boardroom.ops_boardroom_allocate_seigniorage(400.into());
        assert_eq!(snapshot.epoch, Epoch(1));
        assert_eq!(snapshot.reward_received, 400.into());
        assert_eq!(snapshot.timestamp, 1000.into());
        assert_eq!(
            get_logs(),
            vec![LOG_EVENT_REWARD_ADDED.message("boardroom=1 operator=operator amount=400 epoch=1")]
        );
        assert_eq!(boardroom.ops_boardroom_current_epoch(), Epoch(2));
        assert_eq!(boardroom.ops_boardroom_latest_snapshot(), Some(snapshot));
        assert_eq!(boardroom.ops_boardroom_snapshot(Epoch(1)), Some(snapshot));
        assert!(boardroom.ops_boardroom_snapshot(Epoch(0)).is_none());
        assert!(boardroom.ops_boardroom_snapshot(Epoch(2)).is_none());
        assert_eq!(reward_balance(OPERATOR), (1_000_000 - 400).into());
        assert_eq!(
            FungibleTokenComponent::new(REWARD_TOKEN).ft_balance(boardroom.custody()),
            400.into()
        );

        assert_eq!(boardroom.ops_boardroom_earned(to_valid_account_id(ALICE)), 300.into());
        assert_eq!(boardroom.ops_boardroom_earned(to_valid_account_id(BOB)), 100.into());

        call_as(&mut ctx, ALICE);
        assert_eq!(boardroom.ops_boardroom_claim_reward(), 300.into());
        assert_eq!(
            get_logs(),
            vec![LOG_EVENT_REWARD_PAID.message("boardroom=1 account_id=alice amount=300")]
        );
        assert_eq!(reward_balance(ALICE), 300.into());
        assert_eq!(
            boardroom.ops_boardroom_reward_record(to_valid_account_id(ALICE)),
            Some(RewardRecord {
                last_snapshot_index: 1,
                accrued: TokenAmount::zero()
            })
        );

        // claiming again pays nothing
        call_as(&mut ctx, ALICE);
        assert_eq!(boardroom.ops_boardroom_claim_reward(), TokenAmount::zero());
        assert!(get_logs().is_empty());
        assert_eq!(reward_balance(ALICE), 300.into());
        assert_eq!(boardroom.ops_boardroom_earned(to_valid_account_id(ALICE)), TokenAmount::zero());
        assert_eq!(boardroom.ops_boardroom_earned(to_valid_account_id(BOB)), 100.into());
        assert_eq!(boardroom.ops_boardroom_total_allocated(), 400.into());
        assert_eq!(boardroom.ops_boardroom_total_paid(), 300.into());
    }

    #[test]
    fn stake_added_while_disconnected_only_earns_after_the_connect_point() {
        let mut ctx = new_context(OPERATOR);
        let mut boardroom = deploy(&mut ctx);
        boardroom.vault.stake(ALICE, 100);
        boardroom.checkpoint(ALICE, TokenAmount::zero(), TokenAmount::zero());
        boardroom.ops_boardroom_allocate_seigniorage(200.into());
        boardroom.ops_boardroom_allocate_seigniorage(200.into());

        boardroom.vault.stake_while_disconnected(ALICE, 100);
        boardroom.vault.stake_while_disconnected(BOB, 100);
        boardroom.connect();
        assert!(boardroom
            .ops_boardroom_reward_record(to_valid_account_id(BOB))
            .is_none());
        assert_eq!(boardroom.ops_boardroom_earned(to_valid_account_id(BOB)), TokenAmount::zero());

        // alice 200, bob 100
        boardroom.ops_boardroom_allocate_seigniorage(300.into());
        assert_eq!(boardroom.ops_boardroom_earned(to_valid_account_id(BOB)), 100.into());
        // snapshots before the connect are settled at the 100 alice held when they were taken
        assert_eq!(boardroom.ops_boardroom_earned(to_valid_account_id(ALICE)), 600.into());

        call_as(&mut ctx, ALICE);
        assert_eq!(boardroom.ops_boardroom_claim_reward(), 600.into());
        call_as(&mut ctx, BOB);
        assert_eq!(boardroom.ops_boardroom_claim_reward(), 100.into());
        assert_eq!(
            FungibleTokenComponent::new(REWARD_TOKEN).ft_balance(boardroom.custody()),
            TokenAmount::zero()
        );
        assert_eq!(
            boardroom.ops_boardroom_total_paid(),
            boardroom.ops_boardroom_total_allocated()
        );
    }

    #[test]
    fn checkpoint_settles_at_eligible_balance() {
        let mut ctx = new_context(OPERATOR);
        let mut boardroom = deploy(&mut ctx);
        boardroom.vault.stake(ALICE, 100);
        boardroom.vault.stake(BOB, 100);

        boardroom.ops_boardroom_allocate_seigniorage(200.into());
        // alice's stake changes - the vault settles the pending snapshot at 100
        boardroom.checkpoint(ALICE, 100.into(), 100.into());
        assert_eq!(
            boardroom.ops_boardroom_reward_record(to_valid_account_id(ALICE)),
            Some(RewardRecord {
                last_snapshot_index: 1,
                accrued: 100.into()
            })
        );
        boardroom.vault.stake(ALICE, 200);

        // second allocation: alice 300, bob 100
        boardroom.ops_boardroom_allocate_seigniorage(400.into());
        assert_eq!(boardroom.ops_boardroom_earned(to_valid_account_id(ALICE)), 400.into());
        assert_eq!(boardroom.ops_boardroom_earned(to_valid_account_id(BOB)), 200.into());

        // checkpoint with nothing pending does not change the accrued rewards
        boardroom.checkpoint(ALICE, 300.into(), 300.into());
        boardroom.checkpoint(ALICE, 300.into(), 300.into());
        assert_eq!(boardroom.ops_boardroom_earned(to_valid_account_id(ALICE)), 400.into());
    }

    #[test]
    fn claim_with_nothing_earned() {
        let mut ctx = new_context(OPERATOR);
        let mut boardroom = deploy(&mut ctx);

        call_as(&mut ctx, ALICE);
        assert_eq!(boardroom.ops_boardroom_claim_reward(), TokenAmount::zero());
        assert!(get_logs().is_empty());
    }

    #[test]
    #[should_panic(expected = "[ERR] [ZERO_TOTAL_STAKE]")]
    fn allocate_with_zero_total_stake() {
        let mut ctx = new_context(OPERATOR);
        let mut boardroom = deploy(&mut ctx);

        boardroom.ops_boardroom_allocate_seigniorage(100.into());
    }

    #[test]
    #[should_panic(expected = "[ERR] [INVALID_AMOUNT]")]
    fn allocate_zero() {
        let mut ctx = new_context(OPERATOR);
        let mut boardroom = deploy(&mut ctx);
        boardroom.vault.stake(ALICE, 100);

        boardroom.ops_boardroom_allocate_seigniorage(TokenAmount::zero());
    }

    #[test]
    #[should_panic(expected = "[ERR] [PERMISSION_DENIED] caller is not the operator")]
    fn allocate_as_non_operator() {
        let mut ctx = new_context(OPERATOR);
        let mut boardroom = deploy(&mut ctx);
        boardroom.vault.stake(ALICE, 100);

        call_as(&mut ctx, ALICE);
        boardroom.ops_boardroom_allocate_seigniorage(TokenAmount::zero());
    }

    #[test]
    #[should_panic(expected = "[ERR] [INSUFFICIENT_BALANCE]")]
    fn allocate_more_than_operator_balance() {
        let mut ctx = new_context(OPERATOR);
        let mut boardroom = deploy(&mut ctx);
        boardroom.vault.stake(ALICE, 100);

        boardroom.ops_boardroom_allocate_seigniorage(1_000_001.into());
    }

    #[test]
    #[should_panic(expected = "[ERR] [BOARDROOM_NOT_DEPLOYED]")]
    fn boardroom_not_deployed() {
        let mut ctx = new_context(OPERATOR);
        deploy(&mut ctx);

        BoardroomComponent::new(BoardroomId(9), MockVault::default()).ops_boardroom_current_epoch();
    }
}
