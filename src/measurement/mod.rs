//! SINAPI measurement ledger.
//!
//! Each contract line carries three quantities: what was contracted, what
//! the contractor reports as executed, and what the inspector has measured.
//! Only measured quantities are paid, so money totals follow the inspector.

pub mod domain;
mod ledger;

pub use ledger::{MeasurementField, MeasurementLedger};
