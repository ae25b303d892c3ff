//! Adapter implementations for board ports.

pub mod memory;
mod random;

pub use random::RandomTaskIds;
