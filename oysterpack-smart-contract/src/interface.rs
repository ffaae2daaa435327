mod access_control;
mod contract_operator;
mod contract_ownership;

pub use access_control::*;
pub use contract_operator::*;
pub use contract_ownership::*;
