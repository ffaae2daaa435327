use crate::Epoch;
use near_sdk::borsh::{self, BorshDeserialize, BorshSerialize};
use oysterpack_smart_fungible_token::TokenAmount;
use oysterpack_smart_near::domain::{BlockTimestamp, TimestampDuration};

/// Per account stake bookkeeping owned by the vault.
///
/// Invariants:
/// - `pre_epoch_balance <= principal`
/// - `locked_balance <= principal` while the lock window is active
/// - `disconnected_deposits <= principal`
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct StakeRecord {
    pub principal: TokenAmount,
    /// principal as it stood before the first stake change in `last_action_epoch`
    pub pre_epoch_balance: TokenAmount,
    pub last_action_epoch: Epoch,
    pub locked_balance: TokenAmount,
    pub locked_until: BlockTimestamp,
    /// deposits made while no boardroom was bound that no boardroom has been notified of yet
    pub disconnected_deposits: TokenAmount,
}

impl StakeRecord {
    /// Balance eligible for rewards as of the most recently closed epoch.
    ///
    /// Stake changes made in the still open epoch are invisible until the epoch is closed.
    pub fn balance_from_last_epoch(&self, current_epoch: Epoch) -> TokenAmount {
        if self.last_action_epoch == current_epoch {
            self.pre_epoch_balance
        } else {
            self.principal
        }
    }

    /// the portion of the principal that bound boardrooms have been notified of
    pub fn connected_balance(&self) -> TokenAmount {
        self.principal - self.disconnected_deposits
    }

    /// Marks the start of a stake change in the specified epoch.
    ///
    /// On the first change within an epoch, the connected balance is frozen as the pre epoch
    /// balance. Deposits made while disconnected are thus treated as if they were made in the
    /// epoch in which boardrooms are next notified. Returns the frozen balance, which is the
    /// balance that boardrooms must settle pending rewards at.
    pub fn checkpoint(&mut self, epoch: Epoch) -> TokenAmount {
        if self.last_action_epoch != epoch {
            self.pre_epoch_balance = self.connected_balance();
            self.last_action_epoch = epoch;
        }
        self.pre_epoch_balance
    }

    pub fn locked(&self, now: BlockTimestamp) -> TokenAmount {
        if now < self.locked_until {
            self.locked_balance
        } else {
            TokenAmount::zero()
        }
    }

    pub fn withdrawable(&self, now: BlockTimestamp) -> TokenAmount {
        self.principal - self.locked(now)
    }

    /// Deposits are locked for `lock_duration`. Each deposit extends the lock window, which then
    /// covers all deposits made while the previous window was still active.
    pub fn deposit(&mut self, amount: TokenAmount, now: BlockTimestamp, lock_duration: TimestampDuration) {
        self.locked_balance = self.locked(now) + amount;
        self.locked_until = now + lock_duration;
        self.principal += amount;
    }

    pub fn deposit_while_disconnected(
        &mut self,
        amount: TokenAmount,
        now: BlockTimestamp,
        lock_duration: TimestampDuration,
    ) {
        self.deposit(amount, now, lock_duration);
        self.disconnected_deposits += amount;
    }

    /// Withdrawals are drawn from disconnected deposits first.
    ///
    /// ## Panics
    /// if `amount` exceeds the principal
    pub fn withdraw(&mut self, amount: TokenAmount) {
        self.principal -= amount;
        self.disconnected_deposits -= self.disconnected_deposits.min(amount);
        if self.pre_epoch_balance > self.principal {
            self.pre_epoch_balance = self.principal;
        }
    }
}
