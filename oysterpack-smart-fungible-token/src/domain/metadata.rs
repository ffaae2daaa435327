use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};
use oysterpack_smart_near::ERR_INVALID;

#[derive(BorshDeserialize, BorshSerialize, Clone, Deserialize, Serialize, PartialEq, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct Metadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Metadata {
    pub fn new(name: &str, symbol: &str, decimals: u8) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals,
        }
    }

    pub fn assert_valid(&self) {
        ERR_INVALID.assert(|| !self.name.trim().is_empty(), || "`name` must not be blank");
        ERR_INVALID.assert(
            || !self.symbol.trim().is_empty(),
            || "`symbol` must not be blank",
        );
    }
}
