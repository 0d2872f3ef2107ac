//! Clementine Core - Shared types library.
//!
//! This crate provides common types used across all Clementine components:
//! - `admin` - Internal administration panel view layer
//! - `integration-tests` - End-to-end rendering tests
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Capability actions, admin roles, the [`types::Ability`] trait,
//!   and resource symbols

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
