//! Synchronous process execution behind a small trait.
//!
//! Hooks never build shell strings: a [`CommandSpec`] carries the program and
//! its arguments as discrete elements, and a [`ProcessRunner`] turns it into a
//! finished [`ProcessOutput`]. [`SystemRunner`] is the real implementation;
//! tests substitute their own to record invocations.

use crate::error::HookError;
use log::debug;
use std::ffi::OsString;
use std::process::{Command, Stdio};

/// Program plus argv, executed without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl CommandSpec {
    #[must_use]
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Builds the `std::process::Command`. Stdin is closed, stdout and stderr
    /// are captured.
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    /// Space-joined rendering for log lines.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    #[must_use]
    pub fn new(stdout: Vec<u8>, stderr: Vec<u8>, exit_code: Option<i32>) -> Self {
        Self {
            stdout,
            stderr,
            exit_code,
        }
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs a command to completion.
///
/// `Ok` means the process was started and reaped, whatever its exit code.
/// Failing to start it at all is a [`HookError::Launch`].
pub trait ProcessRunner {
    fn run(&self, cmd: &CommandSpec) -> Result<ProcessOutput, HookError>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, cmd: &CommandSpec) -> Result<ProcessOutput, HookError> {
        (**self).run(cmd)
    }
}

/// Blocks on the child with [`Command::output`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, cmd: &CommandSpec) -> Result<ProcessOutput, HookError> {
        debug!("Executing: {}", cmd.display());
        let output = cmd.to_command().output().map_err(|e| HookError::Launch {
            program: cmd.program.to_string_lossy().into_owned(),
            reason: e.to_string(),
        })?;

        Ok(ProcessOutput::new(
            output.stdout,
            output.stderr,
            output.status.code(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_arguments_discrete() {
        let cmd = CommandSpec::new("/bin/led")
            .arg("-r")
            .args(["flash now"]);
        assert_eq!(cmd.args, vec![OsString::from("-r"), OsString::from("flash now")]);
        assert_eq!(cmd.display(), "/bin/led -r flash now");
    }

    #[test]
    fn success_requires_zero_exit_code() {
        assert!(ProcessOutput::new(vec![], vec![], Some(0)).success());
        assert!(!ProcessOutput::new(vec![], vec![], Some(1)).success());
        assert!(!ProcessOutput::new(vec![], vec![], None).success());
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let cmd = CommandSpec::new("/nonexistent/app-hooks/led-binary").arg("on");
        let err = SystemRunner.run(&cmd).unwrap_err();
        match err {
            HookError::Launch { program, .. } => {
                assert_eq!(program, "/nonexistent/app-hooks/led-binary");
            }
            other => panic!("expected launch error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn captures_output_and_exit_code() {
        let cmd = CommandSpec::new("sh").args(["-c", "echo out; echo err >&2; exit 3"]);
        let output = SystemRunner.run(&cmd).unwrap();
        assert_eq!(output.stdout, b"out\n");
        assert_eq!(output.stderr, b"err\n");
        assert_eq!(output.exit_code, Some(3));
        assert!(!output.success());
    }
}
