mod fungible_token;
mod token_service;

pub use fungible_token::*;
pub use token_service::*;
