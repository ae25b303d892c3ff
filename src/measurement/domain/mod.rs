//! Domain values for contract measurement.

mod error;
mod item;
mod money;
mod quantity;

pub use error::MeasurementError;
pub use item::{MeasurementItem, SinapiCode};
pub use money::Money;
pub use quantity::Quantity;
