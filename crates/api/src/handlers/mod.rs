//! Request handlers for the HeartSignal HTTP surface.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers validate inputs, delegate to the repositories in
//! `heartsignal_db`, and map errors via [`crate::error::AppError`].

pub mod signal;
pub mod user;
