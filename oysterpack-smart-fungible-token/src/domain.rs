mod memo;
mod metadata;
mod token_amount;
mod token_id;

pub use memo::*;
pub use metadata::*;
pub use token_amount::*;
pub use token_id::*;
