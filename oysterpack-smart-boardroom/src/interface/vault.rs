use crate::{BoardroomBindings, BoardroomId, VaultBalances};
use near_sdk::json_types::ValidAccountId;
use oysterpack_smart_fungible_token::{TokenAmount, TokenId};
use oysterpack_smart_near::domain::TimestampDuration;
use oysterpack_smart_near::{ErrCode, ErrorConst, Level, LogEvent};

/// Stake custody
pub trait Vault {
    /// Stakes `amount` of the stake token on behalf of the predecessor account.
    ///
    /// Bound boardrooms are notified before the principal changes. Bonded stake is locked for the
    /// vault's lock duration, and each bond restarts the lock window.
    ///
    /// ## Panics
    /// - if amount is zero
    /// - if the account has insufficient stake token balance
    fn ops_vault_bond(&mut self, amount: TokenAmount) -> VaultBalances;

    /// Withdraws `amount` of stake back to the predecessor account.
    ///
    /// ## Panics
    /// - if amount is zero
    /// - if amount exceeds the principal
    /// - if amount reaches into the locked portion of the principal
    fn ops_vault_unbond(&mut self, amount: TokenAmount) -> VaultBalances;

    fn ops_vault_total_staked(&self) -> TokenAmount;

    fn ops_vault_balance_of(&self, account_id: ValidAccountId) -> TokenAmount;

    /// live principal minus the portion still inside its lock window
    fn ops_vault_balance_without_bonded(&self, account_id: ValidAccountId) -> TokenAmount;

    /// The balance eligible for rewards as of the most recently closed epoch, i.e., stake changes
    /// made in the still open epoch are not visible.
    fn ops_vault_balance_from_last_epoch(&self, account_id: ValidAccountId) -> TokenAmount;

    /// returns None if the account never staked
    fn ops_vault_stake_balances(&self, account_id: ValidAccountId) -> Option<VaultBalances>;

    fn ops_vault_lock_duration(&self) -> TimestampDuration;

    fn ops_vault_stake_token(&self) -> TokenId;

    fn ops_vault_boardrooms(&self) -> BoardroomBindings;
}

pub trait VaultOwner {
    /// Rebinds the boardrooms that are notified on stake changes.
    ///
    /// Notifications that a boardroom missed while it was not bound are not replayed. When the
    /// boardroom is bound again, its pending snapshots are settled at each account's epoch gated
    /// balance on the account's next stake change or claim.
    ///
    /// ## Panics
    /// - if the predecessor account is not the owner
    /// - if a boardroom is not deployed
    /// - if primary and secondary are the same boardroom
    fn ops_vault_set_boardrooms(
        &mut self,
        primary: Option<BoardroomId>,
        secondary: Option<BoardroomId>,
    );
}

pub const ERR_LOCK_NOT_EXPIRED: ErrorConst = ErrorConst(
    ErrCode("LOCK_NOT_EXPIRED"),
    "amount exceeds the withdrawable balance - stake is still locked",
);

pub const LOG_EVENT_VAULT_BONDED: LogEvent = LogEvent(Level::INFO, "VAULT_BONDED");

pub const LOG_EVENT_VAULT_UNBONDED: LogEvent = LogEvent(Level::INFO, "VAULT_UNBONDED");

pub const LOG_EVENT_VAULT_BOARDROOMS_SET: LogEvent = LogEvent(Level::INFO, "VAULT_BOARDROOMS_SET");
