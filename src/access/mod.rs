//! Role model and permission policy.
//!
//! A session acts under exactly one [`Role`], chosen once at sign-in. The
//! policy functions in [`policy`] answer whether that role may perform an
//! [`Action`] or open a [`Section`]; they never enforce anything themselves.
//! Callers check before mutating.

mod action;
mod error;
pub mod policy;
mod role;

pub use action::{Action, Section};
pub use error::{ParseActionError, ParseRoleError, PermissionDenied};
pub use policy::{can_perform, can_view, permitted_actions, require, visible_sections};
pub use role::Role;
