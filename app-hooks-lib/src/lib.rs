//! `app-hooks-lib` holds the logic behind the flight-software application
//! hooks: run-level parsing, the LED executable wrapper, configuration,
//! logging setup, and dispatch of a run level to an [`hooks::AppHook`].
//!
//! # Example
//!
//! ```rust
//! use app_hooks_lib::hooks::{dispatch, HookInvocation, MissionHook};
//!
//! # fn demo() -> Result<(), app_hooks_lib::error::HookError> {
//! let invocation = HookInvocation::parse(Some("OnCommand"), None, vec!["ping".into()])?;
//! dispatch(&MissionHook, &invocation)?;
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod hooks;
pub mod led;
pub mod logging;
pub mod run_level;
pub mod runner;

/// Logger name of the LED blinker app.
pub const LED_APP_NAME: &str = "kubos-linux-makeLED";

/// Logger name of the skeleton mission app.
pub const MISSION_APP_NAME: &str = "mission-framework";
