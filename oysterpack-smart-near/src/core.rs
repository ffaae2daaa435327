mod asserts;
mod errors;
mod hash;
mod log_events;

pub use asserts::*;
pub use errors::*;
pub use hash::*;
pub use log_events::*;
