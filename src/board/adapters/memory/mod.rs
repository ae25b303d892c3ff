//! Deterministic in-memory adapters for tests and seeded sessions.

mod sequence;

pub use sequence::SequentialTaskIds;
