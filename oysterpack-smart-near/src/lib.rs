//! Provides support for building OysterPack SMART NEAR smart contracts.

pub use crate::core::*;

pub mod component;
mod core;
pub mod data;
pub mod domain;

pub use near_sdk;

use near_sdk::json_types::ValidAccountId;
use std::convert::TryFrom;

/// 10^18 - fixed point scale used for reward per share math
pub const DECIMALS_18: u128 = 1_000_000_000_000_000_000;

/// YOCTO = 10^24
pub const YOCTO: u128 = 1_000_000_000_000_000_000_000_000;

mod u256 {
    use uint::construct_uint;

    construct_uint! {
        /// 256-bit unsigned integer.
        pub struct U256(4);
    }
}
pub use u256::U256;

/// ## Panics
/// if the account ID is not a valid NEAR account ID
pub fn to_valid_account_id(account_id: &str) -> ValidAccountId {
    match ValidAccountId::try_from(account_id) {
        Ok(account_id) => account_id,
        Err(_) => ERR_INVALID
            .error(format!("invalid account ID: {}", account_id))
            .panic(),
    }
}
