//! Defines standard component related interfaces

mod component;
mod deploy;

pub use component::*;
pub use deploy::*;
