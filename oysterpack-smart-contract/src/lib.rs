//! Contract access control
//! - every contract has a single owner, who administers the contract
//! - every contract has a single operator, who runs privileged day to day operations
//!   such as reward allocation and token minting

pub mod components;
mod domain;
mod interface;

pub use domain::*;
pub use interface::*;
pub use interface::ContractOperator;
