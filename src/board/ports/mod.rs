//! Port contracts for the maintenance board.
//!
//! The board performs no I/O. The one thing it needs from its host is a
//! source of fresh ticket identifiers.

pub mod id_generator;

pub use id_generator::TaskIdGenerator;
