//! Maintenance and urgency board.
//!
//! Tickets are opened against school work sites, moved across three columns
//! by drag-and-drop or the advance button, and deleted when no longer
//! relevant. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Snapshot ownership in [`store`]
//! - Transition planning and the reducer in [`services`]
//! - Derived column views in [`projection`]
//! - The identifier port in [`ports`] with adapters in [`adapters`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod projection;
pub mod services;
pub mod store;

#[cfg(test)]
mod tests;
