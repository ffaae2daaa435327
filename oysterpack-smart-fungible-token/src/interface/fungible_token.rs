use crate::*;
use near_sdk::json_types::ValidAccountId;
use oysterpack_smart_near::{ErrCode, ErrorConst, Level, LogEvent};

/// Account facing token functions
pub trait FungibleToken {
    /// Transfers positive `amount` of tokens from the `env::predecessor_account_id` to `receiver_id`.
    ///
    /// ## Panics
    /// - if amount is zero
    /// - if the sender is the receiver
    /// - if the sender account has insufficient funds to fulfill the request
    fn ft_transfer(&mut self, receiver_id: ValidAccountId, amount: TokenAmount, memo: Option<Memo>);

    fn ft_total_supply(&self) -> TokenAmount;

    /// unknown accounts have zero balance
    fn ft_balance_of(&self, account_id: ValidAccountId) -> TokenAmount;

    fn ft_metadata(&self) -> Metadata;
}

/// Privileged token functions
pub trait FungibleTokenOperator {
    /// Mints new tokens and credits them to the specified account.
    ///
    /// ## Panics
    /// - if the predecessor account is not the contract operator
    /// - if amount is zero
    fn ft_operator_mint(&mut self, account_id: ValidAccountId, amount: TokenAmount);
}

pub const ERR_TOKEN_NOT_DEPLOYED: ErrorConst =
    ErrorConst(ErrCode("TOKEN_NOT_DEPLOYED"), "token is not hosted by this contract");

pub const LOG_EVENT_FT_MINT: LogEvent = LogEvent(Level::INFO, "FT_MINT");

pub const LOG_EVENT_FT_TRANSFER: LogEvent = LogEvent(Level::INFO, "FT_TRANSFER");
