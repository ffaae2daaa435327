use crate::*;
use oysterpack_smart_boardroom::{Vault, VaultBalances, VaultOwner};
use oysterpack_smart_fungible_token::TokenAmount;

#[near_bindgen]
impl Vault for Contract {
    fn ops_vault_bond(&mut self, amount: TokenAmount) -> VaultBalances {
        Self::vault().ops_vault_bond(amount)
    }

    fn ops_vault_unbond(&mut self, amount: TokenAmount) -> VaultBalances {
        Self::vault().ops_vault_unbond(amount)
    }

    fn ops_vault_total_staked(&self) -> TokenAmount {
        Self::vault().ops_vault_total_staked()
    }

    fn ops_vault_balance_of(&self, account_id: ValidAccountId) -> TokenAmount {
        Self::vault().ops_vault_balance_of(account_id)
    }

    fn ops_vault_balance_without_bonded(&self, account_id: ValidAccountId) -> TokenAmount {
        Self::vault().ops_vault_balance_without_bonded(account_id)
    }

    fn ops_vault_balance_from_last_epoch(&self, account_id: ValidAccountId) -> TokenAmount {
        Self::vault().ops_vault_balance_from_last_epoch(account_id)
    }

    fn ops_vault_stake_balances(&self, account_id: ValidAccountId) -> Option<VaultBalances> {
        Self::vault().ops_vault_stake_balances(account_id)
    }

    fn ops_vault_lock_duration(&self) -> TimestampDuration {
        Self::vault().ops_vault_lock_duration()
    }

    fn ops_vault_stake_token(&self) -> TokenId {
        Self::vault().ops_vault_stake_token()
    }

    fn ops_vault_boardrooms(&self) -> BoardroomBindings {
        Self::vault().ops_vault_boardrooms()
    }
}

#[near_bindgen]
impl VaultOwner for Contract {
    fn ops_vault_set_boardrooms(
        &mut self,
        primary: Option<BoardroomId>,
        secondary: Option<BoardroomId>,
    ) {
        Self::vault().ops_vault_set_boardrooms(primary, secondary)
    }
}
