mod contract_operator;
mod contract_owner;

pub use contract_operator::*;
pub use contract_owner::*;
