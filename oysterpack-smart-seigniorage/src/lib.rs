//! Seigniorage staking contract
//!
//! Stakers bond the stake token into the vault. The operator distributes seigniorage through the
//! primary boardroom, and optionally through a secondary boardroom that pays out a second reward
//! token off the same stake.

mod access_control;
mod boardroom;
mod components;
mod contract_operator;
mod contract_ownership;
mod fungible_token;
#[cfg(test)]
mod test_utils;
mod vault;

use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    env,
    json_types::ValidAccountId,
    near_bindgen, PanicOnDefault,
};
use oysterpack_smart_boardroom::{
    components::{boardroom::BoardroomConfig, vault::VaultConfig},
    BoardroomBindings, BoardroomId,
};
use oysterpack_smart_contract::components::{
    contract_operator::ContractOperatorComponent, contract_ownership::ContractOwnershipComponent,
};
use oysterpack_smart_fungible_token::{
    components::fungible_token::{FungibleTokenComponent, FungibleTokenConfig},
    Metadata, TokenId,
};
use oysterpack_smart_near::{component::Deploy, domain::TimestampDuration, to_valid_account_id};

near_sdk::setup_alloc!();

pub const STAKE_TOKEN: TokenId = TokenId(1);
pub const PRIMARY_REWARD_TOKEN: TokenId = TokenId(2);
pub const SECONDARY_REWARD_TOKEN: TokenId = TokenId(3);

pub const PRIMARY_BOARDROOM: BoardroomId = BoardroomId(1);
pub const SECONDARY_BOARDROOM: BoardroomId = BoardroomId(2);

/// 5 days
pub const DEFAULT_LOCK_DURATION: TimestampDuration = TimestampDuration::from_secs(5 * 24 * 60 * 60);

#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct Contract;

#[near_bindgen]
impl Contract {
    /// If owner is not specified, then predecessor Account ID will be set as the contract owner.
    /// If operator is not specified, then the owner is also the operator.
    ///
    /// The secondary boardroom and its reward token are only deployed when the secondary reward
    /// token metadata is specified.
    #[init]
    pub fn deploy(
        owner: Option<ValidAccountId>,
        operator: Option<ValidAccountId>,
        stake_token_metadata: Metadata,
        lock_duration_secs: Option<u64>,
        primary_reward_metadata: Metadata,
        secondary_reward_metadata: Option<Metadata>,
    ) -> Self {
        let owner =
            owner.unwrap_or_else(|| to_valid_account_id(&env::predecessor_account_id()));
        let operator = operator.unwrap_or_else(|| owner.clone());
        ContractOwnershipComponent.deploy(owner);
        ContractOperatorComponent.deploy(operator);

        FungibleTokenComponent::new(STAKE_TOKEN).deploy(FungibleTokenConfig {
            metadata: stake_token_metadata,
        });

        FungibleTokenComponent::new(PRIMARY_REWARD_TOKEN).deploy(FungibleTokenConfig {
            metadata: primary_reward_metadata,
        });
        Self::boardroom_unchecked(PRIMARY_BOARDROOM).deploy(BoardroomConfig {
            reward_token: PRIMARY_REWARD_TOKEN,
        });

        let secondary = secondary_reward_metadata.map(|metadata| {
            FungibleTokenComponent::new(SECONDARY_REWARD_TOKEN)
                .deploy(FungibleTokenConfig { metadata });
            Self::boardroom_unchecked(SECONDARY_BOARDROOM).deploy(BoardroomConfig {
                reward_token: SECONDARY_REWARD_TOKEN,
            });
            SECONDARY_BOARDROOM
        });

        Self::vault().deploy(VaultConfig {
            stake_token: STAKE_TOKEN,
            lock_duration: lock_duration_secs
                .map_or(DEFAULT_LOCK_DURATION, TimestampDuration::from_secs),
            boardrooms: BoardroomBindings::new(Some(PRIMARY_BOARDROOM), secondary),
        });

        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oysterpack_smart_boardroom::{Epoch, Vault};
    use oysterpack_smart_contract::{AccessControl, ContractOperator, ContractOwnership};
    use oysterpack_smart_near_test::*;

    fn metadata(symbol: &str) -> Metadata {
        Metadata::new(symbol, symbol, 18)
    }

    #[test]
    fn deploy_with_defaults() {
        testing_env!(new_context("owner"));

        let contract = Contract::deploy(None, None, metadata("MAHA"), None, metadata("ARTH"), None);
        assert_eq!(contract.ops_owner(), "owner");
        assert_eq!(contract.ops_operator(), "owner");
        assert!(contract.ops_is_operator(to_valid_account_id("owner")));
        assert_eq!(contract.ops_vault_lock_duration(), DEFAULT_LOCK_DURATION);
        assert_eq!(contract.ops_vault_stake_token(), STAKE_TOKEN);
        assert_eq!(
            contract.ops_vault_boardrooms(),
            BoardroomBindings::new(Some(PRIMARY_BOARDROOM), None)
        );
        assert_eq!(contract.ops_ft_metadata(STAKE_TOKEN).symbol, "MAHA");
        assert_eq!(
            contract.ops_boardroom_reward_token(PRIMARY_BOARDROOM),
            PRIMARY_REWARD_TOKEN
        );
        assert_eq!(
            contract.ops_boardroom_current_epoch(PRIMARY_BOARDROOM),
            Epoch::FIRST
        );
        assert!(contract
            .ops_boardroom_latest_snapshot(PRIMARY_BOARDROOM)
            .is_none());
    }

    #[test]
    fn deploy_with_secondary_boardroom() {
        testing_env!(new_context("admin"));

        let contract = Contract::deploy(
            Some(to_valid_account_id("owner")),
            Some(to_valid_account_id("operator")),
            metadata("MAHA"),
            Some(300),
            metadata("ARTH"),
            Some(metadata("ARTHX")),
        );
        assert_eq!(contract.ops_owner(), "owner");
        assert_eq!(contract.ops_operator(), "operator");
        assert!(!contract.ops_is_owner(to_valid_account_id("admin")));
        assert_eq!(
            contract.ops_vault_lock_duration(),
            TimestampDuration::from_secs(300)
        );
        assert_eq!(
            contract.ops_vault_boardrooms(),
            BoardroomBindings::new(Some(PRIMARY_BOARDROOM), Some(SECONDARY_BOARDROOM))
        );
        assert_eq!(
            contract.ops_boardroom_reward_token(SECONDARY_BOARDROOM),
            SECONDARY_REWARD_TOKEN
        );
        assert_eq!(contract.ops_ft_metadata(SECONDARY_REWARD_TOKEN).symbol, "ARTHX");
    }

    #[test]
    #[should_panic(expected = "[ERR] [INVALID] `name` must not be blank")]
    fn deploy_with_invalid_metadata() {
        testing_env!(new_context("owner"));

        Contract::deploy(None, None, metadata(""), None, metadata("ARTH"), None);
    }
}
