use near_sdk::serde::{Deserialize, Serialize};
use oysterpack_smart_fungible_token::TokenAmount;
use oysterpack_smart_near::domain::BlockTimestamp;

/// Account stake balances as reported by the vault
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct VaultBalances {
    pub principal: TokenAmount,
    /// portion of principal that can be unbonded now
    pub withdrawable: TokenAmount,
    /// portion of principal that is still inside the lock window
    pub locked: TokenAmount,
    /// set while part of the principal is locked
    pub locked_until: Option<BlockTimestamp>,
    /// balance eligible for rewards as of the most recently closed epoch
    pub balance_from_last_epoch: TokenAmount,
}
