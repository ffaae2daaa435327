use crate::TokenAmount;
use oysterpack_smart_near::domain::AccountIdHash;

/// Provides basic functions to operate the token ledger on behalf of other contract components.
///
/// Functions are not access controlled - access control is the responsibility of the calling
/// component, e.g., the vault moves stake between the staker and its custody account.
pub trait TokenService {
    /// Mints new tokens and credits them to the holder, which increases the total supply.
    ///
    /// ## Panics
    /// - if amount is zero
    fn ft_mint(&mut self, holder: AccountIdHash, amount: TokenAmount);

    /// Moves tokens between holders. Total supply is unchanged.
    ///
    /// ## Panics
    /// - if amount is zero
    /// - if the sender has insufficient balance
    fn ft_transfer_from(&mut self, sender: AccountIdHash, receiver: AccountIdHash, amount: TokenAmount);

    fn ft_balance(&self, holder: AccountIdHash) -> TokenAmount;
}
