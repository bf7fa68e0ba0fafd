//! Run-level dispatch and the two application hooks.

use crate::error::HookError;
use crate::led::{LedAction, LedBinary, LedReport};
use crate::run_level::RunLevel;
use crate::runner::{ProcessRunner, SystemRunner};
use log::{debug, error, info};

/// Validated arguments of one hook run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookInvocation {
    pub run_level: RunLevel,
    pub subcommand: Option<String>,
    /// Free positional arguments forwarded by the application service.
    pub args: Vec<String>,
}

impl HookInvocation {
    /// Fails with [`HookError::UnknownRunLevel`] when `run` is absent or not
    /// one of the recognized literals.
    pub fn parse(
        run: Option<&str>,
        subcommand: Option<String>,
        args: Vec<String>,
    ) -> Result<Self, HookError> {
        let run_level = run
            .ok_or_else(|| HookError::UnknownRunLevel("<none>".to_string()))?
            .parse()?;

        Ok(Self {
            run_level,
            subcommand,
            args,
        })
    }
}

/// One handler per lifecycle event.
pub trait AppHook {
    fn on_boot(&self) -> Result<(), HookError>;

    fn on_stop(&self) -> Result<(), HookError> {
        info!("OnStop logic");
        Ok(())
    }

    fn on_command(&self, invocation: &HookInvocation) -> Result<(), HookError>;
}

/// Calls exactly one handler of `hook`, chosen by the run level.
pub fn dispatch<H: AppHook + ?Sized>(
    hook: &H,
    invocation: &HookInvocation,
) -> Result<(), HookError> {
    debug!("Dispatching run level {}", invocation.run_level);
    match invocation.run_level {
        RunLevel::OnBoot => hook.on_boot(),
        RunLevel::OnStop => hook.on_stop(),
        RunLevel::OnCommand => hook.on_command(invocation),
    }
}

/// Drives the LED executable from run levels and subcommands.
#[derive(Debug, Clone)]
pub struct LedHook<R = SystemRunner> {
    binary: LedBinary,
    runner: R,
}

impl LedHook<SystemRunner> {
    pub fn new(binary: LedBinary) -> Self {
        Self::with_runner(binary, SystemRunner)
    }
}

impl<R: ProcessRunner> LedHook<R> {
    pub fn with_runner(binary: LedBinary, runner: R) -> Self {
        Self { binary, runner }
    }

    fn run_led(&self, action: LedAction) -> Result<LedReport, HookError> {
        // The error text is logged by the caller.
        self.binary
            .invoke(&self.runner, action)
            .inspect_err(|_| error!("LED ERROR"))
    }
}

impl<R: ProcessRunner> AppHook for LedHook<R> {
    fn on_boot(&self) -> Result<(), HookError> {
        info!("OnBoot logic");
        Ok(())
    }

    fn on_stop(&self) -> Result<(), HookError> {
        info!("OnStop logic");
        let report = self.run_led(LedAction::Off)?;
        info!("{}", report.stop_line());
        Ok(())
    }

    fn on_command(&self, invocation: &HookInvocation) -> Result<(), HookError> {
        let subcommand = invocation.subcommand.as_deref();
        info!("OnCommand logic {}", subcommand.unwrap_or("<none>"));

        // Validate before anything is launched.
        let action: LedAction = subcommand.ok_or(HookError::MissingSubcommand)?.parse()?;

        let report = self.run_led(action)?;
        info!("{report}");
        Ok(())
    }
}

/// Skeleton mission app: logs lifecycle events and launches nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissionHook;

impl AppHook for MissionHook {
    fn on_boot(&self) -> Result<(), HookError> {
        info!("OnBoot logic");
        Ok(())
    }

    fn on_command(&self, invocation: &HookInvocation) -> Result<(), HookError> {
        info!("OnCommand logic");
        if !invocation.args.is_empty() {
            info!("command args are {:?}", invocation.args);
        }
        Ok(())
    }
}
