//! Provides support to work with data stored on the NEAR blockchain

pub mod numbers;
mod object;

pub use object::*;
