//! NEAR typesafe domain
//! - domain objects support Borsh serialization, and JSON serialization where they cross the
//!   contract interface

mod account_id_hash;
mod block_timestamp;
mod timestamp_duration;

pub use account_id_hash::*;
pub use block_timestamp::*;
pub use timestamp_duration::*;
