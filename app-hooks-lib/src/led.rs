//! The external LED-control executable.
//!
//! The executable is opaque: it is started with `-r <action>` and whatever it
//! prints on stdout ends up in the hook's log.

use crate::error::HookError;
use crate::runner::{CommandSpec, ProcessOutput, ProcessRunner};
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where the LED executable is installed on the flight image.
pub const DEFAULT_LED_BINARY: &str = "/home/kubos/blinkleds/kubos-linux-makeLED";

/// A subcommand the LED executable understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedAction {
    On,
    Off,
    Flash,
    /// Prints the trigger of every LED.
    Status,
}

impl LedAction {
    /// The positional argument passed after `-r`.
    pub fn as_arg(self) -> &'static str {
        match self {
            LedAction::On => "on",
            LedAction::Off => "off",
            LedAction::Flash => "flash",
            LedAction::Status => "status",
        }
    }

    fn label(self) -> &'static str {
        match self {
            LedAction::On => "ON",
            LedAction::Off => "OFF",
            LedAction::Flash => "FLASH",
            LedAction::Status => "STATUS",
        }
    }
}

impl FromStr for LedAction {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(LedAction::On),
            "off" => Ok(LedAction::Off),
            "flash" => Ok(LedAction::Flash),
            "status" => Ok(LedAction::Status),
            other => Err(HookError::UnknownLedAction(other.to_string())),
        }
    }
}

impl fmt::Display for LedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

/// Location of the LED executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedBinary {
    path: PathBuf,
}

impl Default for LedBinary {
    fn default() -> Self {
        Self::new(DEFAULT_LED_BINARY)
    }
}

impl LedBinary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<path> -r <action>`
    pub fn command(&self, action: LedAction) -> CommandSpec {
        CommandSpec::new(self.path.as_os_str()).args(["-r", action.as_arg()])
    }

    /// Runs the executable for `action` and waits for it.
    ///
    /// A nonzero (or signal) exit is an error carrying whatever the program
    /// printed. On success stdout must be ASCII; stderr is ignored.
    pub fn invoke<R: ProcessRunner>(
        &self,
        runner: &R,
        action: LedAction,
    ) -> Result<LedReport, HookError> {
        let ProcessOutput {
            stdout,
            stderr,
            exit_code,
        } = runner.run(&self.command(action))?;
        debug!(
            "LED binary finished with exit code {:?} ({} bytes stdout, {} bytes stderr)",
            exit_code,
            stdout.len(),
            stderr.len()
        );

        if exit_code != Some(0) {
            return Err(HookError::LedFailed {
                status: exit_code,
                stdout: lossy_trimmed(&stdout),
                stderr: lossy_trimmed(&stderr),
            });
        }
        let stdout = decode_ascii(stdout, "stdout")?;

        Ok(LedReport { action, stdout })
    }
}

fn lossy_trimmed(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim().to_string()
}

fn decode_ascii(bytes: Vec<u8>, stream: &'static str) -> Result<String, HookError> {
    if !bytes.is_ascii() {
        return Err(HookError::Decode { stream });
    }
    String::from_utf8(bytes).map_err(|_| HookError::Decode { stream })
}

/// What a successful LED run printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedReport {
    pub action: LedAction,
    pub stdout: String,
}

impl LedReport {
    /// Log line for the stop branch, which always switches the LEDs off.
    pub fn stop_line(&self) -> String {
        format!("LED STOP {}", self.stdout.trim_end())
    }
}

impl fmt::Display for LedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LED {} {}", self.action.label(), self.stdout.trim_end())
    }
}
