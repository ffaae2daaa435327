use crate::*;
use oysterpack_smart_fungible_token::{
    FungibleToken, FungibleTokenOperator, Memo, TokenAmount,
};

/// Each token hosted by the contract is addressed by its [`TokenId`]
#[near_bindgen]
impl Contract {
    pub fn ops_ft_transfer(
        &mut self,
        token: TokenId,
        receiver_id: ValidAccountId,
        amount: TokenAmount,
        memo: Option<Memo>,
    ) {
        Self::token(token).ft_transfer(receiver_id, amount, memo)
    }

    pub fn ops_ft_total_supply(&self, token: TokenId) -> TokenAmount {
        Self::token(token).ft_total_supply()
    }

    pub fn ops_ft_balance_of(&self, token: TokenId, account_id: ValidAccountId) -> TokenAmount {
        Self::token(token).ft_balance_of(account_id)
    }

    pub fn ops_ft_metadata(&self, token: TokenId) -> Metadata {
        Self::token(token).ft_metadata()
    }

    /// operator only
    pub fn ops_ft_mint(&mut self, token: TokenId, account_id: ValidAccountId, amount: TokenAmount) {
        Self::token(token).ft_operator_mint(account_id, amount)
    }
}
