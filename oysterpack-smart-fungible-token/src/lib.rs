//! In-contract fungible token ledger
//! - a contract may host several tokens, each keyed by [`TokenId`]
//! - balances are keyed by [`oysterpack_smart_near::domain::AccountIdHash`], which allows contract
//!   components to hold tokens in custody under pseudo accounts

pub mod components;
mod domain;
mod interface;

pub use domain::*;
pub use interface::*;
