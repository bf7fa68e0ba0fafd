//! Defines custom error types for the application hooks.

use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when a hook fails to run.
pub enum HookError {
    #[error("Unknown run level specified: '{0}'")]
    UnknownRunLevel(String),

    #[error("OnCommand requires a --subcommand (one of: on, off, flash, status).")]
    MissingSubcommand,

    #[error("Command: {0} Is an invalid command! Expected one of: on, off, flash, status.")]
    UnknownLedAction(String),

    #[error("Failed to launch '{program}': {reason}")]
    Launch { program: String, reason: String },

    #[error(
        "LED binary exited with {}: {}",
        describe_status(.status),
        describe_output(.stdout, .stderr)
    )]
    LedFailed {
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },

    #[error("LED binary wrote non-ASCII data to {stream}")]
    Decode { stream: &'static str },

    #[error("Failed to load configuration: {0}")]
    Config(String),
}

impl HookError {
    /// True for errors raised while launching or running the LED executable,
    /// as opposed to bad arguments or configuration.
    pub fn is_led_failure(&self) -> bool {
        matches!(
            self,
            HookError::Launch { .. } | HookError::LedFailed { .. } | HookError::Decode { .. }
        )
    }
}

fn describe_output(stdout: &str, stderr: &str) -> String {
    match (stdout.is_empty(), stderr.is_empty()) {
        (true, true) => "no output".to_string(),
        (false, true) => stdout.to_string(),
        (true, false) => stderr.to_string(),
        (false, false) => format!("{stdout}; {stderr}"),
    }
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}
