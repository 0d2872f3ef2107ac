//! Shared domain types.
//!
//! # Modules
//!
//! - [`access`] - Capability actions, admin roles, and the [`Ability`] trait
//! - [`resource`] - Resource symbols naming domain entity types

pub mod access;
pub mod resource;

pub use access::{Ability, Action, AdminRole};
pub use resource::ResourceSymbol;
