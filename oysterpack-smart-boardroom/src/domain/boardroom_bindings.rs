use crate::BoardroomId;
use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};
use oysterpack_smart_near::ERR_INVALID;

/// Boardrooms that the vault notifies before an account's stake changes
#[derive(
    BorshSerialize, BorshDeserialize, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default,
)]
#[serde(crate = "near_sdk::serde")]
pub struct BoardroomBindings {
    pub primary: Option<BoardroomId>,
    pub secondary: Option<BoardroomId>,
}

impl BoardroomBindings {
    pub fn new(primary: Option<BoardroomId>, secondary: Option<BoardroomId>) -> Self {
        Self { primary, secondary }
    }

    /// primary first
    pub fn iter(&self) -> impl Iterator<Item = BoardroomId> {
        self.primary.into_iter().chain(self.secondary)
    }

    /// the boardroom whose epoch counter the vault follows
    pub fn epoch_source(&self) -> Option<BoardroomId> {
        self.primary.or(self.secondary)
    }

    pub fn assert_valid(&self) {
        ERR_INVALID.assert(
            || self.primary.is_none() || self.primary != self.secondary,
            || "primary and secondary boardrooms must be different",
        );
    }
}
