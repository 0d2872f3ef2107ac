//! Clementine Admin - navigation components for the admin panel.
//!
//! This crate is the view-layer glue between the admin panel's templates and
//! the host application's routing and authorization: it turns resource
//! symbols into permission-checked tabs, action buttons, icon links, and
//! configuration menu rows, emitted as HTML fragment strings.
//!
//! The host framework is an external collaborator represented by small
//! traits: [`clementine_core::Ability`] for capability checks,
//! [`nav::RouteResolver`] for route-name-to-URL resolution, and
//! [`labels::Labels`] for UI string lookup. Everything here is a synchronous,
//! side-effect-free computation over those seams plus an explicit
//! [`nav::RenderContext`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod html;
pub mod labels;
pub mod nav;

pub use labels::{Labels, NoLabels, StaticLabels};
pub use nav::{
    ButtonLinkOptions, ButtonOptions, LinkMethod, LinkOptions, MatchRule, Navigation,
    RenderContext, ResourceDescriptor, ResourceRegistry, RouteResolver, RouteTable, TabOptions,
};
