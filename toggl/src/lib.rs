//! Client library for the Toggl time tracking API (v8).
//!
//! Construct a [`TogglClient`] from an API token, then reach the per-resource
//! operations through its accessor methods (`clients()`, `time_entries()`, ...).

mod client;
mod error;
mod services;

pub mod domain;

pub use client::*;
pub use domain::*;
pub use error::*;
pub use services::*;
