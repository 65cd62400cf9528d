//! # warden-core
//!
//! Foundation types for the warden hook framework.
//!
//! This crate provides the shared vocabulary the other warden crates depend on:
//!
//! - **Events**: [`events::EventKind`] and the data-carrying [`events::HookEvent`]
//!   delivered by the host runtime at lifecycle points
//! - **Tools**: [`tools::ToolName`] and the strongly-typed [`tools::ToolArgs`]
//!   argument records parsed from the host's per-tool argument mapping
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by `warden-hooks` and `warden-plugins`.

#![deny(unsafe_code)]

pub mod events;
pub mod tools;
