mod boardroom_bindings;
mod boardroom_id;
mod epoch;
mod reward_per_share;
mod reward_record;
mod snapshot;
mod stake_record;
mod vault_balances;

pub use boardroom_bindings::*;
pub use boardroom_id::*;
pub use epoch::*;
pub use reward_per_share::*;
pub use reward_record::*;
pub use snapshot::*;
pub use stake_record::*;
pub use vault_balances::*;
