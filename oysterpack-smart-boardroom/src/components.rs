pub mod boardroom;
pub mod vault;
