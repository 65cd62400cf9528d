//! # warden-hooks
//!
//! Lifecycle hook framework for an agent runtime that executes tools on
//! behalf of an AI coding assistant.
//!
//! Hooks subscribe to [`EventKind`](warden_core::events::EventKind)s —
//! session start/end, the two-phase `tool.execute.before` /
//! `tool.execute.after` pair, and generic runtime events — and perform a
//! side effect: logging, blocking, annotating output, or notifying.
//!
//! ## Execution Model
//!
//! Dispatch is sequential and cooperative: one handler runs to completion
//! (including awaited I/O) before the next starts. The host may have multiple
//! tool invocations in flight whose before/after events interleave
//! arbitrarily; the [`correlator::CallCorrelator`] bridges a single
//! invocation's two phases by call identifier.
//!
//! ## Blocking
//!
//! A `Block` result from a `tool.execute.before` handler is the sole
//! mechanism to prevent tool execution. The engine short-circuits with
//! [`errors::HookDenied`], whose message is surfaced to the end user as the
//! abort reason.
//!
//! ## Fail-Open
//!
//! Handler errors never abort the invocation they instrument. They are
//! logged and treated as `Continue` — telemetry must not break the workflow
//! it observes.

#![deny(unsafe_code)]

pub mod correlator;
pub mod engine;
pub mod errors;
pub mod handler;
pub mod registry;
pub mod types;
