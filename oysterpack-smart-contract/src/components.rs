pub mod access_control;
pub mod contract_operator;
pub mod contract_ownership;
