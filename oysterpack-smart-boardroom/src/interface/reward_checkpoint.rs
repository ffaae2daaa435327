use crate::Epoch;
use oysterpack_smart_fungible_token::TokenAmount;

/// Reward ledger notifications sent by the vault.
pub trait RewardCheckpoint {
    /// epochs start at 1 and each reward allocation advances the epoch
    fn current_epoch(&self) -> Epoch;

    /// Invoked when the vault binds the boardroom.
    ///
    /// Accounts without a reward record only earn from snapshots taken after the boardroom was
    /// last connected.
    fn connect(&mut self);

    /// Invoked before the account's stake changes.
    ///
    /// Settles the account's pending rewards at `eligible_balance`, which is the balance that was
    /// in effect for every snapshot that has not yet been settled for the account. Snapshots
    /// taken before the boardroom was last connected are settled at no more than
    /// `connected_balance`.
    fn checkpoint(
        &mut self,
        account_id: &str,
        eligible_balance: TokenAmount,
        connected_balance: TokenAmount,
    );
}
