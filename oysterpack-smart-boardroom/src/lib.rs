//! Epoch-gated stake custody and snapshot-based reward accrual
//!
//! - [`components::vault::VaultComponent`] holds staked tokens in custody and is the single source
//!   of truth for stake balances
//! - [`components::boardroom::BoardroomComponent`] distributes reward tokens to stakers
//!   proportionally to stake, through an append-only log of reward per share snapshots
//!
//! A deposit only starts to earn once the epoch in which it was made is closed by a reward
//! allocation. Before the vault changes an account's stake it notifies every bound boardroom,
//! which settles the account's pending rewards at the balance that was in effect.

pub mod components;
mod domain;
mod interface;

pub use domain::*;
pub use interface::*;
