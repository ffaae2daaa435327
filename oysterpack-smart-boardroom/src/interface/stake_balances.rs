use oysterpack_smart_fungible_token::TokenAmount;

/// Stake balance source that boardrooms query on demand.
///
/// The vault implements it. Boardrooms never keep their own copy of stake balances.
pub trait StakeBalances {
    fn total_staked(&self) -> TokenAmount;

    /// live principal
    fn balance_of(&self, account_id: &str) -> TokenAmount;

    /// balance eligible for rewards as of the most recently closed epoch
    fn balance_from_last_epoch(&self, account_id: &str) -> TokenAmount;

    /// principal excluding deposits made while no boardroom was bound that boardrooms have not
    /// yet been notified of
    fn connected_balance(&self, account_id: &str) -> TokenAmount;

    /// principal minus the portion that is still locked
    fn balance_without_bonded(&self, account_id: &str) -> TokenAmount;
}
