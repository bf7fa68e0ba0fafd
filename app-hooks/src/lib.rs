//! Command-line front ends for the application hooks.
//!
//! Two binaries are built from this crate: `makeled-app` and `mission-app`.

pub mod app;
pub mod cli;
