mod boardroom;
mod reward_checkpoint;
mod stake_balances;
mod vault;

pub use boardroom::*;
pub use reward_checkpoint::*;
pub use stake_balances::*;
pub use vault::*;
