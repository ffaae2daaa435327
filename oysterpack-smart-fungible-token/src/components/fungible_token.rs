use crate::*;
use oysterpack_smart_contract::ContractOperatorObject;
use oysterpack_smart_near::{
    assert_non_zero_amount, assert_request,
    component::{Component, ComponentState, Deploy, ERR_COMPONENT_ALREADY_DEPLOYED},
    data::Object,
    domain::AccountIdHash,
    near_sdk::{
        borsh::{self, BorshDeserialize, BorshSerialize},
        env,
        json_types::ValidAccountId,
    },
    Hash, ERR_INSUFFICIENT_BALANCE,
};

/// Token ledger for a single token hosted by the contract
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FungibleTokenComponent {
    token: TokenId,
}

#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq)]
pub struct TokenState {
    pub metadata: Metadata,
    pub total_supply: TokenAmount,
}

pub struct FungibleTokenConfig {
    pub metadata: Metadata,
}

impl Component for FungibleTokenComponent {
    type State = TokenState;
    const STATE_KEY: u128 = 1954423190437618342196734001512749915;

    fn instance_id(&self) -> u128 {
        self.token.0 as u128
    }
}

impl Deploy for FungibleTokenComponent {
    type Config = FungibleTokenConfig;

    fn deploy(&self, config: Self::Config) {
        ERR_COMPONENT_ALREADY_DEPLOYED.assert(|| !self.is_deployed());
        config.metadata.assert_valid();
        self.new_state(TokenState {
            metadata: config.metadata,
            total_supply: TokenAmount::zero(),
        })
        .save();
    }
}

type BalanceObject = Object<Hash, TokenAmount>;

impl FungibleTokenComponent {
    pub fn new(token: TokenId) -> Self {
        Self { token }
    }

    pub fn token(&self) -> TokenId {
        self.token
    }

    /// ## Panics
    /// if the token is not deployed
    fn token_state(&self) -> ComponentState<TokenState> {
        self.load_state()
            .unwrap_or_else(|| ERR_TOKEN_NOT_DEPLOYED.panic())
    }

    fn balance(&self, holder: AccountIdHash) -> BalanceObject {
        BalanceObject::load_or_default(Hash::from((self.state_key(), holder.hash())))
    }

    /// zero balances are removed from storage
    fn save_balance(balance: BalanceObject) {
        if balance.is_zero() {
            balance.delete();
        } else {
            balance.save();
        }
    }
}

impl TokenService for FungibleTokenComponent {
    fn ft_mint(&mut self, holder: AccountIdHash, amount: TokenAmount) {
        assert_non_zero_amount(*amount);
        let mut state = self.token_state();
        let mut balance = self.balance(holder);

        state.total_supply += amount;
        *balance += amount;
        state.save();
        balance.save();
    }

    fn ft_transfer_from(
        &mut self,
        sender: AccountIdHash,
        receiver: AccountIdHash,
        amount: TokenAmount,
    ) {
        assert_non_zero_amount(*amount);
        let mut sender_balance = self.balance(sender);
        ERR_INSUFFICIENT_BALANCE.assert(|| *sender_balance >= amount);
        if sender == receiver {
            return;
        }

        let mut receiver_balance = self.balance(receiver);
        *sender_balance -= amount;
        *receiver_balance += amount;
        Self::save_balance(sender_balance);
        receiver_balance.save();
    }

    fn ft_balance(&self, holder: AccountIdHash) -> TokenAmount {
        *self.balance(holder)
    }
}

impl FungibleToken for FungibleTokenComponent {
    fn ft_transfer(&mut self, receiver_id: ValidAccountId, amount: TokenAmount, memo: Option<Memo>) {
        let sender_id = env::predecessor_account_id();
        self.token_state();
        assert_request(
            || sender_id.as_str() != receiver_id.as_ref().as_str(),
            || "sender and receiver must not be the same",
        );

        self.ft_transfer_from(
            sender_id.as_str().into(),
            (&receiver_id).into(),
            amount,
        );

        let mut msg = format!(
            "token={} sender={} receiver={} amount={}",
            self.token,
            sender_id,
            receiver_id.as_ref(),
            amount
        );
        if let Some(memo) = memo {
            msg.push_str(&format!(" memo={}", memo));
        }
        LOG_EVENT_FT_TRANSFER.log(msg);
    }

    fn ft_total_supply(&self) -> TokenAmount {
        self.token_state().total_supply
    }

    fn ft_balance_of(&self, account_id: ValidAccountId) -> TokenAmount {
        self.ft_balance(account_id.into())
    }

    fn ft_metadata(&self) -> Metadata {
        self.token_state().metadata.clone()
    }
}

impl FungibleTokenOperator for FungibleTokenComponent {
    fn ft_operator_mint(&mut self, account_id: ValidAccountId, amount: TokenAmount) {
        ContractOperatorObject::assert_operator_access();
        self.ft_mint((&account_id).into(), amount);
        LOG_EVENT_FT_MINT.log(format!(
            "token={} account_id={} amount={}",
            self.token,
            account_id.as_ref(),
            amount
        ));
    }
}
