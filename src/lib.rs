//! Headless interaction layer for the Busy Bees blog administration panel.
//!
//! Controllers in [`application::admin`] hold the state a panel page shows and
//! turn UI events into calls against the panel backend; [`infra`] provides the
//! HTTP transport, durable navigation storage and logging used by real hosts.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;

pub use busybee_api_types as api;
