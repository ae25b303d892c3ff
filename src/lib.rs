//! Canteiro: works-management core for a municipal education department.
//!
//! This crate holds the typed state behind the construction-works
//! dashboard: who may do what, the maintenance ticket board, and the SINAPI
//! measurement ledger. It performs no I/O; the host renders views from the
//! snapshots it exposes and feeds user interactions back as commands.
//!
//! # Architecture
//!
//! Canteiro follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for what the host supplies
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`access`]: Roles and the permission policy
//! - [`board`]: Maintenance tickets, transitions and column projections
//! - [`measurement`]: Contract measurement ledger
//! - [`session`]: Explicit application state and command dispatch

pub mod access;
pub mod board;
pub mod measurement;
pub mod session;
