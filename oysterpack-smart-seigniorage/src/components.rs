use crate::*;
use oysterpack_smart_boardroom::{
    components::{boardroom::BoardroomComponent, vault::VaultComponent},
    ERR_BOARDROOM_NOT_DEPLOYED,
};
use oysterpack_smart_fungible_token::ERR_TOKEN_NOT_DEPLOYED;
use oysterpack_smart_near::component::Component;

impl Contract {
    pub fn vault() -> VaultComponent {
        VaultComponent
    }

    /// ## Panics
    /// if the boardroom is not hosted by this contract
    pub fn boardroom(id: BoardroomId) -> BoardroomComponent {
        let boardroom = Self::boardroom_unchecked(id);
        ERR_BOARDROOM_NOT_DEPLOYED.assert(|| boardroom.is_deployed());
        boardroom
    }

    pub(crate) fn boardroom_unchecked(id: BoardroomId) -> BoardroomComponent {
        BoardroomComponent::new(id, Self::vault())
    }

    /// ## Panics
    /// if the token is not hosted by this contract
    pub fn token(token: TokenId) -> FungibleTokenComponent {
        let token = FungibleTokenComponent::new(token);
        ERR_TOKEN_NOT_DEPLOYED.assert(|| token.is_deployed());
        token
    }
}
