use crate::components::boardroom::BoardroomComponent;
use crate::*;
use oysterpack_smart_contract::ContractOwnerObject;
use oysterpack_smart_fungible_token::{
    components::fungible_token::FungibleTokenComponent, TokenAmount, TokenId, TokenService,
};
use oysterpack_smart_near::{
    assert_non_zero_amount,
    component::{Component, Deploy, ERR_COMPONENT_ALREADY_DEPLOYED},
    data::Object,
    domain::{AccountIdHash, BlockTimestamp, TimestampDuration},
    near_sdk::{
        borsh::{self, BorshDeserialize, BorshSerialize},
        env,
        json_types::ValidAccountId,
    },
    Hash, ERR_INSUFFICIENT_BALANCE,
};

/// Stake custody and the single source of truth for stake balances.
///
/// The vault follows the epoch of the primary boardroom, falling back to the secondary. When no
/// boardroom is bound, the last epoch the vault observed is used.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VaultComponent;

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq)]
pub struct VaultState {
    pub stake_token: TokenId,
    pub lock_duration: TimestampDuration,
    /// sum of all account principals
    pub total_staked: TokenAmount,
    pub boardrooms: BoardroomBindings,
    pub last_known_epoch: Epoch,
}

pub struct VaultConfig {
    pub stake_token: TokenId,
    pub lock_duration: TimestampDuration,
    /// boardrooms must be deployed before the vault
    pub boardrooms: BoardroomBindings,
}

impl Component for VaultComponent {
    type State = VaultState;
    const STATE_KEY: u128 = 1954424604950731786236462815574524614;
}

impl Deploy for VaultComponent {
    type Config = VaultConfig;

    fn deploy(&self, config: Self::Config) {
        ERR_COMPONENT_ALREADY_DEPLOYED.assert(|| !self.is_deployed());
        self.assert_bindings(config.boardrooms);
        for id in config.boardrooms.iter() {
            self.boardroom(id).connect();
        }
        self.new_state(VaultState {
            stake_token: config.stake_token,
            lock_duration: config.lock_duration,
            total_staked: TokenAmount::zero(),
            boardrooms: config.boardrooms,
            last_known_epoch: Epoch::FIRST,
        })
        .save();
    }
}

const STAKE_RECORD_KEY: u128 = 1954424633227961066394101387637416871;

type StakeRecordObject = Object<Hash, StakeRecord>;

impl VaultComponent {
    /// pseudo account that holds the staked tokens
    pub fn custody(&self) -> AccountIdHash {
        AccountIdHash::pseudo_account(self.state_key(), "custody")
    }

    fn boardroom(&self, id: BoardroomId) -> BoardroomComponent<VaultComponent> {
        BoardroomComponent::new(id, *self)
    }

    fn assert_bindings(&self, bindings: BoardroomBindings) {
        bindings.assert_valid();
        for id in bindings.iter() {
            ERR_BOARDROOM_NOT_DEPLOYED.assert_with_message(
                || self.boardroom(id).is_deployed(),
                || format!("boardroom is not hosted by this contract: {}", id),
            );
        }
    }

    fn current_epoch(&self, state: &VaultState) -> Epoch {
        state
            .boardrooms
            .epoch_source()
            .map_or(state.last_known_epoch, |id| self.boardroom(id).current_epoch())
    }

    fn stake_record_key(account_id: &str) -> Hash {
        Hash::from((account_id, STAKE_RECORD_KEY))
    }

    fn load_stake_record(account_id: &str) -> Option<StakeRecordObject> {
        StakeRecordObject::load(&Self::stake_record_key(account_id))
    }

    /// Freezes the account's pre epoch balance if this is the account's first stake change in the
    /// epoch, and then settles the account's pending rewards in every bound boardroom.
    ///
    /// Returns false if no boardroom is bound.
    fn checkpoint(
        &self,
        state: &VaultState,
        account_id: &str,
        record: &mut StakeRecord,
        epoch: Epoch,
    ) -> bool {
        let connected_balance = record.connected_balance();
        let eligible_balance = record.checkpoint(epoch);
        if state.boardrooms.epoch_source().is_none() {
            return false;
        }
        for id in state.boardrooms.iter() {
            self.boardroom(id)
                .checkpoint(account_id, eligible_balance, connected_balance);
        }
        record.disconnected_deposits = TokenAmount::zero();
        true
    }

    fn vault_balances(record: &StakeRecord, epoch: Epoch, now: BlockTimestamp) -> VaultBalances {
        let locked = record.locked(now);
        VaultBalances {
            principal: record.principal,
            withdrawable: record.withdrawable(now),
            locked,
            locked_until: if locked.is_zero() {
                None
            } else {
                Some(record.locked_until)
            },
            balance_from_last_epoch: record.balance_from_last_epoch(epoch),
        }
    }
}

impl Vault for VaultComponent {
    fn ops_vault_bond(&mut self, amount: TokenAmount) -> VaultBalances {
        assert_non_zero_amount(*amount);
        let account_id = env::predecessor_account_id();
        let holder = AccountIdHash::from(account_id.as_str());
        let mut state = self.state();
        let mut stake_token = FungibleTokenComponent::new(state.stake_token);
        ERR_INSUFFICIENT_BALANCE.assert(|| stake_token.ft_balance(holder) >= amount);

        let epoch = self.current_epoch(&state);
        let now = BlockTimestamp::from_env();
        let mut record = StakeRecordObject::load_or_default(Self::stake_record_key(&account_id));
        if self.checkpoint(&state, &account_id, &mut record, epoch) {
            record.deposit(amount, now, state.lock_duration);
        } else {
            record.deposit_while_disconnected(amount, now, state.lock_duration);
        }
        record.save();
        state.total_staked += amount;
        state.last_known_epoch = epoch;
        state.save();
        stake_token.ft_transfer_from(holder, self.custody(), amount);

        LOG_EVENT_VAULT_BONDED.log(format!(
            "account_id={} amount={} principal={} epoch={}",
            account_id, amount, record.principal, epoch
        ));
        Self::vault_balances(&record, epoch, now)
    }

    fn ops_vault_unbond(&mut self, amount: TokenAmount) -> VaultBalances {
        assert_non_zero_amount(*amount);
        let account_id = env::predecessor_account_id();
        let mut record = Self::load_stake_record(&account_id)
            .unwrap_or_else(|| ERR_INSUFFICIENT_BALANCE.panic());
        ERR_INSUFFICIENT_BALANCE.assert(|| record.principal >= amount);
        let now = BlockTimestamp::from_env();
        ERR_LOCK_NOT_EXPIRED.assert_with_message(
            || record.withdrawable(now) >= amount,
            || {
                format!(
                    "amount exceeds the withdrawable balance of {} - {} is locked until {}",
                    record.withdrawable(now),
                    record.locked(now),
                    record.locked_until
                )
            },
        );

        let mut state = self.state();
        let epoch = self.current_epoch(&state);
        self.checkpoint(&state, &account_id, &mut record, epoch);

        record.withdraw(amount);
        record.save();
        state.total_staked -= amount;
        state.last_known_epoch = epoch;
        state.save();
        FungibleTokenComponent::new(state.stake_token).ft_transfer_from(
            self.custody(),
            account_id.as_str().into(),
            amount,
        );

        LOG_EVENT_VAULT_UNBONDED.log(format!(
            "account_id={} amount={} principal={} epoch={}",
            account_id, amount, record.principal, epoch
        ));
        Self::vault_balances(&record, epoch, now)
    }

    fn ops_vault_total_staked(&self) -> TokenAmount {
        self.total_staked()
    }

    fn ops_vault_balance_of(&self, account_id: ValidAccountId) -> TokenAmount {
        self.balance_of(account_id.as_ref())
    }

    fn ops_vault_balance_without_bonded(&self, account_id: ValidAccountId) -> TokenAmount {
        self.balance_without_bonded(account_id.as_ref())
    }

    fn ops_vault_balance_from_last_epoch(&self, account_id: ValidAccountId) -> TokenAmount {
        self.balance_from_last_epoch(account_id.as_ref())
    }

    fn ops_vault_stake_balances(&self, account_id: ValidAccountId) -> Option<VaultBalances> {
        let state = self.state();
        Self::load_stake_record(account_id.as_ref()).map(|record| {
            Self::vault_balances(&record, self.current_epoch(&state), BlockTimestamp::from_env())
        })
    }

    fn ops_vault_lock_duration(&self) -> TimestampDuration {
        self.state().lock_duration
    }

    fn ops_vault_stake_token(&self) -> TokenId {
        self.state().stake_token
    }

    fn ops_vault_boardrooms(&self) -> BoardroomBindings {
        self.state().boardrooms
    }
}

impl VaultOwner for VaultComponent {
    fn ops_vault_set_boardrooms(
        &mut self,
        primary: Option<BoardroomId>,
        secondary: Option<BoardroomId>,
    ) {
        ContractOwnerObject::assert_owner_access();
        let bindings = BoardroomBindings::new(primary, secondary);
        self.assert_bindings(bindings);

        let mut state = self.state();
        for id in bindings.iter() {
            if !state.boardrooms.iter().any(|bound| bound == id) {
                self.boardroom(id).connect();
            }
        }
        // remember the epoch of the outgoing binding in case nothing is bound anymore
        state.last_known_epoch = self.current_epoch(&state);
        state.boardrooms = bindings;
        state.save();

        let fmt_binding = |id: Option<BoardroomId>| {
            id.map_or_else(|| "none".to_string(), |id| id.to_string())
        };
        LOG_EVENT_VAULT_BOARDROOMS_SET.log(format!(
            "primary={} secondary={}",
            fmt_binding(primary),
            fmt_binding(secondary)
        ));
    }
}

impl StakeBalances for VaultComponent {
    fn total_staked(&self) -> TokenAmount {
        self.state().total_staked
    }

    fn balance_of(&self, account_id: &str) -> TokenAmount {
        Self::load_stake_record(account_id).map_or_else(TokenAmount::zero, |record| record.principal)
    }

    fn balance_from_last_epoch(&self, account_id: &str) -> TokenAmount {
        Self::load_stake_record(account_id).map_or_else(TokenAmount::zero, |record| {
            record.balance_from_last_epoch(self.current_epoch(&self.state()))
        })
    }

    fn connected_balance(&self, account_id: &str) -> TokenAmount {
        Self::load_stake_record(account_id)
            .map_or_else(TokenAmount::zero, |record| record.connected_balance())
    }

    fn balance_without_bonded(&self, account_id: &str) -> TokenAmount {
        Self::load_stake_record(account_id).map_or_else(TokenAmount::zero, |record| {
            record.withdrawable(BlockTimestamp::from_env())
        })
    }
}
